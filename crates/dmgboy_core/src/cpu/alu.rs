use super::{Cpu, Flag};

/// Carry out of bit 3 for an 8-bit addition.
#[inline]
pub fn half_carry_add8(a: u8, b: u8) -> bool {
    (a & 0x0F) + (b & 0x0F) > 0x0F
}

/// Borrow into bit 4 for an 8-bit subtraction `a - b`.
#[inline]
pub fn half_borrow_sub8(a: u8, b: u8) -> bool {
    (a & 0x0F) < (b & 0x0F)
}

/// Half-carry for `ADD HL,rr`: the low 11 bits of the operands overflow
/// into bit 11.
#[inline]
pub fn half_carry_add16(a: u16, b: u16) -> bool {
    (a & 0x07FF) + (b & 0x07FF) > 0x07FF
}

impl Cpu {
    /// Replace all four flags at once.
    #[inline]
    fn set_znhc(&mut self, z: bool, n: bool, h: bool, c: bool) {
        let f = (u8::from(z) << 7) | (u8::from(n) << 6) | (u8::from(h) << 5) | (u8::from(c) << 4);
        self.regs.set_f(f);
    }

    /// ADD (`with_carry == false`) or ADC into A.
    pub(super) fn alu_add(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let cin = u8::from(with_carry && self.get_flag(Flag::C));
        let wide = u16::from(a) + u16::from(value) + u16::from(cin);
        let half = (a & 0x0F) + (value & 0x0F) + cin > 0x0F;

        self.regs.a = wide as u8;
        self.set_znhc(wide as u8 == 0, false, half, wide > 0xFF);
    }

    /// SUB (`with_carry == false`) or SBC from A.
    pub(super) fn alu_sub(&mut self, value: u8, with_carry: bool) {
        let a = self.regs.a;
        let cin = u8::from(with_carry && self.get_flag(Flag::C));
        let result = a.wrapping_sub(value).wrapping_sub(cin);
        let half = u16::from(a & 0x0F) < u16::from(value & 0x0F) + u16::from(cin);
        let borrow = u16::from(a) < u16::from(value) + u16::from(cin);

        self.regs.a = result;
        self.set_znhc(result == 0, true, half, borrow);
    }

    /// Flags of `A - value` without storing the difference.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let a = self.regs.a;
        self.set_znhc(a == value, true, half_borrow_sub8(a, value), a < value);
    }

    /// The eight accumulator operations selected by bits 5..3 of
    /// `0x80..=0xBF` and of the `d8` forms: ADD ADC SUB SBC AND XOR OR CP.
    pub(super) fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => {
                self.regs.a &= value;
                self.set_znhc(self.regs.a == 0, false, true, false);
            }
            5 => {
                self.regs.a ^= value;
                self.set_znhc(self.regs.a == 0, false, false, false);
            }
            6 => {
                self.regs.a |= value;
                self.set_znhc(self.regs.a == 0, false, false, false);
            }
            _ => self.alu_cp(value),
        }
    }

    /// DAA: turn A back into packed BCD after an ADD/ADC or SUB/SBC.
    ///
    /// The low digit needs 0x06 when it exceeds 9 or H is set, the high
    /// digit 0x60 when it exceeds 9 or C is set. Both checks apply in either
    /// direction; N only selects whether the correction is added or
    /// subtracted. C reports the high correction, H is cleared, N is kept.
    pub(super) fn alu_daa(&mut self) {
        let subtract = self.get_flag(Flag::N);
        let a = self.regs.a;

        let low = self.get_flag(Flag::H) || (a & 0x0F) > 0x09;
        let high = self.get_flag(Flag::C) || (a >> 4) > 0x09;
        let correction = (if low { 0x06 } else { 0 }) | (if high { 0x60 } else { 0 });

        let result = if subtract {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };
        self.regs.a = result;
        self.set_znhc(result == 0, subtract, false, high);
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let c = self.get_flag(Flag::C);
        self.set_znhc(result == 0, false, half_carry_add8(value, 1), c);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let c = self.get_flag(Flag::C);
        self.set_znhc(result == 0, true, half_borrow_sub8(value, 1), c);
        result
    }

    /// ADD HL,rr. Z is preserved. H (bit 11) and C (bit 15) are computed
    /// independently.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        let z = self.get_flag(Flag::Z);

        self.regs.set_hl(result);
        self.set_znhc(z, false, half_carry_add16(hl, value), carry);
    }

    /// `base + (r8 as i8)` for ADD SP,r8 and LD HL,SP+r8.
    ///
    /// Z and N clear; H and C are those of the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let low = base as u8;
        let carry = low.checked_add(imm8).is_none();
        self.set_znhc(false, false, half_carry_add8(low, imm8), carry);
        base.wrapping_add_signed(i16::from(imm8 as i8))
    }

    /// The CB group-0 operation selected by bits 5..3 of the suffix:
    /// RLC RRC RL RR SLA SRA SWAP SRL.
    ///
    /// Z from the result, C from the bit shifted out (clear for SWAP),
    /// N and H clear.
    pub(super) fn alu_shift(&mut self, kind: u8, value: u8) -> u8 {
        let cin = u8::from(self.get_flag(Flag::C));
        let msb = value & 0x80 != 0;
        let lsb = value & 0x01 != 0;
        let (result, cout) = match kind & 0x07 {
            0 => (value.rotate_left(1), msb),
            1 => (value.rotate_right(1), lsb),
            2 => ((value << 1) | cin, msb),
            3 => ((value >> 1) | (cin << 7), lsb),
            4 => (value << 1, msb),
            5 => ((value >> 1) | (value & 0x80), lsb),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, lsb),
        };

        self.set_znhc(result == 0, false, false, cout);
        result
    }
}
