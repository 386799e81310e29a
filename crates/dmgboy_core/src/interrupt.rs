use bitflags::bitflags;

/// Interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

bitflags! {
    /// Interrupt request/enable lines as laid out in IF and IE.
    ///
    /// Lower bits have higher priority.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

impl InterruptFlags {
    /// The pending line that would be serviced first, if any.
    pub fn highest_priority(self) -> Option<InterruptFlags> {
        let bits = self.bits() & Self::all().bits();
        if bits == 0 {
            return None;
        }
        Some(Self::from_bits_truncate(1 << bits.trailing_zeros()))
    }

    /// Jump target for a single interrupt line (0x40, 0x48, ..., 0x60).
    ///
    /// For a set of several lines this is the vector of the highest-priority one.
    pub fn vector(self) -> u16 {
        0x0040 + 8 * (self.bits().trailing_zeros() as u16)
    }
}
