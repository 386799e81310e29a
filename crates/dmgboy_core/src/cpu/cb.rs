use super::{Bus, Cpu, Flag, Reg8};

impl Cpu {
    /// Execute a `0xCB`-prefixed instruction (rotates, shifts, BIT/RES/SET).
    ///
    /// The suffix splits into `x` (bits 7..6, the group), `y` (bits 5..3, the
    /// shift kind or bit number) and `z` (bits 2..0, the operand).
    pub(super) fn exec_cb<B: Bus>(&mut self, bus: &mut B, cb: u8) {
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let reg = Reg8::from_index(cb);

        match x {
            0 => {
                let value = self.read_reg8(bus, reg);
                let result = self.alu_shift(y, value);
                self.write_reg8(bus, reg, result);
            }
            1 => {
                // BIT b, r: read only. Preserve C, set H=1, N=0.
                let value = self.read_reg8(bus, reg);
                self.set_flag(Flag::Z, value & (1 << y) == 0);
                self.set_flag(Flag::N, false);
                self.set_flag(Flag::H, true);
            }
            2 => {
                // RES b, r
                let value = self.read_reg8(bus, reg);
                self.write_reg8(bus, reg, value & !(1 << y));
            }
            _ => {
                // SET b, r
                let value = self.read_reg8(bus, reg);
                self.write_reg8(bus, reg, value | (1 << y));
            }
        }
    }
}
