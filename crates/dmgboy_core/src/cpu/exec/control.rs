use crate::cpu::{Bus, Cpu, Instruction, TAKEN_CALL_RET_CYCLES, TAKEN_JUMP_CYCLES};

impl Cpu {
    pub(super) fn exec_jr_cc(&mut self, instr: &Instruction) -> u32 {
        debug_assert!(matches!(instr.opcode, 0x20 | 0x28 | 0x30 | 0x38));
        if !self.cc_condition(instr.opcode >> 3) {
            return 0;
        }
        self.jump_relative(instr.offset());
        TAKEN_JUMP_CYCLES
    }

    pub(super) fn exec_jp_cc(&mut self, instr: &Instruction) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        if !self.cc_condition(instr.opcode >> 3) {
            return 0;
        }
        self.regs.pc = instr.imm16();
        TAKEN_JUMP_CYCLES
    }

    pub(super) fn exec_call_cc<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        if !self.cc_condition(instr.opcode >> 3) {
            return 0;
        }
        self.call(bus, instr.imm16());
        TAKEN_CALL_RET_CYCLES
    }

    pub(super) fn exec_ret_cc<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) -> u32 {
        debug_assert!(matches!(instr.opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        if !self.cc_condition(instr.opcode >> 3) {
            return 0;
        }
        self.ret(bus);
        TAKEN_CALL_RET_CYCLES
    }
}
