use super::*;
use crate::interrupt::IE_ADDR;
use crate::machine::io::DMA;

impl MemoryBus {
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=ROM_END => self.record_fault(MachineError::RomBankSwitch {
                address: addr,
                value,
            }),
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize] = value,
            CART_RAM_START..=CART_RAM_END => {
                self.cart_ram[(addr - CART_RAM_START) as usize] = value
            }
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize] = value,
            ECHO_START..=ECHO_END => self.wram[(addr - ECHO_START) as usize] = value,
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize] = value,
            UNUSABLE_START..=UNUSABLE_END => {
                log::debug!("GB bus: write 0x{value:02X} to unusable 0x{addr:04X} ignored")
            }
            DMA => {
                self.io.write(addr, value);
                self.oam_dma(value);
            }
            IO_START..=IO_END | IE_ADDR => self.io.write(addr, value),
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize] = value,
        }
    }
}
