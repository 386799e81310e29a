/// Serial port modelled via SB/SC.
///
/// Only the instant, internally clocked transfer used by test ROMs to print
/// results is modelled. When a transfer is started on SC (bit 7 set while
/// bit 0 is 1), the current SB value is appended to `output`, the
/// transfer-start bit is cleared and the serial interrupt is requested.
#[derive(Clone, Debug, Default)]
pub(crate) struct Serial {
    pub(crate) sb: u8,
    pub(crate) sc: u8,
    pub(crate) output: Vec<u8>,
}

impl Serial {
    pub(super) fn write_sb(&mut self, value: u8) {
        self.sb = value;
    }

    /// Returns `true` when the write completed a transfer.
    pub(super) fn write_sc(&mut self, value: u8) -> bool {
        self.sc = value;
        // Internal clock & start bit set?
        if (self.sc & 0x81) != 0x81 {
            return false;
        }
        self.output.push(self.sb);
        log::trace!("GB serial: 0x{:02X}", self.sb);
        self.sc &= !0x80;
        true
    }

    /// SC reads with the unused bits 1..=6 set.
    #[inline]
    pub(super) fn read_sc(&self) -> u8 {
        self.sc | 0x7E
    }
}
