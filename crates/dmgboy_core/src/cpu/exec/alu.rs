use crate::cpu::{Bus, Cpu, Flag, Instruction, Reg8};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let operation = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, Reg8::from_index(opcode));
        self.alu_op(operation, value);
    }

    pub(super) fn exec_alu_imm(&mut self, instr: &Instruction) {
        debug_assert!(matches!(
            instr.opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        self.alu_op((instr.opcode >> 3) & 0x07, instr.imm8());
    }

    /// RLCA, RRCA, RLA, RRA: like their `0xCB` forms on A, but Z is always
    /// cleared.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let result = self.alu_shift(opcode >> 3, self.regs.a);
        self.regs.a = result;
        self.set_flag(Flag::Z, false);
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.rp(opcode >> 4);
        self.alu_add16_hl(value);
    }

    pub(super) fn exec_add_sp_r8(&mut self, instr: &Instruction) {
        self.regs.sp = self.alu_add16_signed(self.regs.sp, instr.imm8());
    }

    pub(super) fn exec_ld_hl_sp_r8(&mut self, instr: &Instruction) {
        let result = self.alu_add16_signed(self.regs.sp, instr.imm8());
        self.regs.set_hl(result);
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::H, true);
        self.set_flag(Flag::N, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::C, true);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::C, !carry);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::N, false);
    }
}
