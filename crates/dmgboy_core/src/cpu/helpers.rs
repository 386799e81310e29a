use super::{Bus, Cpu, Flag, Reg8};

impl Cpu {
    /// Read one of the eight 8-bit operands (B, C, D, E, H, L, (HL), A).
    #[inline]
    pub(super) fn read_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
            Reg8::HlIndirect => bus.read8(self.regs.hl()),
            Reg8::A => self.regs.a,
        }
    }

    /// Write one of the eight 8-bit operands. The encoding matches `read_reg8`.
    #[inline]
    pub(super) fn write_reg8<B: Bus>(&mut self, bus: &mut B, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
            Reg8::HlIndirect => bus.write8(self.regs.hl(), value),
            Reg8::A => self.regs.a = value,
        }
    }

    /// Push a word: SP drops by two and the value lands little-endian at SP.
    #[inline]
    pub(crate) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        // High byte first, at the higher address.
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(crate) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let value = bus.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    /// Evaluate the 2-bit condition field (NZ, Z, NC, C).
    #[inline]
    pub(super) fn cc_condition(&self, cc: u8) -> bool {
        match cc & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    /// Relative jump from the already-advanced PC.
    #[inline]
    pub(super) fn jump_relative(&mut self, offset: i8) {
        self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
    }

    /// Push the already-advanced PC and jump to `target`.
    #[inline]
    pub(super) fn call<B: Bus>(&mut self, bus: &mut B, target: u16) {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = target;
    }

    #[inline]
    pub(super) fn ret<B: Bus>(&mut self, bus: &mut B) {
        self.regs.pc = self.pop_u16(bus);
    }
}
