use super::*;

impl MemoryBus {
    /// OAM DMA: copy 160 bytes from `source << 8` into OAM.
    ///
    /// The transfer completes at once; its 160 M-cycle duration and the
    /// CPU's restricted bus access during it are not modelled.
    pub(super) fn oam_dma(&mut self, source: u8) {
        let base = u16::from(source) << 8;
        for i in 0..OAM_SIZE as u16 {
            self.oam[i as usize] = self.read(base.wrapping_add(i));
        }
        log::trace!("GB bus: OAM DMA from 0x{base:04X}");
    }
}
