use crate::cpu::{Bus, Cpu, Instruction, Reg8};

impl Cpu {
    pub(super) fn exec_ld_rr_d16(&mut self, instr: &Instruction) {
        debug_assert!(matches!(instr.opcode, 0x01 | 0x11 | 0x21 | 0x31));
        self.regs.set_rp(instr.opcode >> 4, instr.imm16());
    }

    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) {
        let reg = Reg8::from_index(instr.opcode >> 3);
        self.write_reg8(bus, reg, instr.imm8());
    }

    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) {
        bus.write16(instr.imm16(), self.regs.sp);
    }

    pub(super) fn exec_ldh_a8<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) {
        debug_assert!(matches!(instr.opcode, 0xE0 | 0xF0));

        let addr = 0xFF00u16 | instr.imm8() as u16;
        if instr.opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
    }

    pub(super) fn exec_ldh_c<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));

        let addr = 0xFF00u16 | self.regs.c as u16;
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
    }

    pub(super) fn exec_ld_a16_a<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) {
        debug_assert!(matches!(instr.opcode, 0xEA | 0xFA));

        let addr = instr.imm16();
        if instr.opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
    }

    /// Address for the `(BC)`, `(DE)`, `(HL+)`, `(HL-)` forms, applying the
    /// HL post-increment/decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        let hl = self.regs.hl();
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
    }

    pub(super) fn exec_ld_a_indirect<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
    }

    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);

        let dst = Reg8::from_index(opcode >> 3);
        let src = Reg8::from_index(opcode);
        let value = self.read_reg8(bus, src);
        self.write_reg8(bus, dst, value);
    }

    pub(super) fn exec_ld_sp_hl(&mut self) {
        self.regs.sp = self.regs.hl();
    }
}
