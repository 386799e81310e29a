use super::*;
use crate::interrupt::IE_ADDR;

impl MemoryBus {
    /// Side-effect free read of any address.
    pub fn read(&self, addr: u16) -> u8 {
        match (addr, &self.boot_rom) {
            (0x0000..=0x00FF, Some(boot)) if self.io.boot_rom_enabled() => boot.read(addr),
            _ => self.read_mapped(addr),
        }
    }

    fn read_mapped(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=ROM_END => self.read_rom(addr),
            VRAM_START..=VRAM_END => self.vram[(addr - VRAM_START) as usize],
            CART_RAM_START..=CART_RAM_END => self.cart_ram[(addr - CART_RAM_START) as usize],
            WRAM_START..=WRAM_END => self.wram[(addr - WRAM_START) as usize],
            ECHO_START..=ECHO_END => self.wram[(addr - ECHO_START) as usize],
            OAM_START..=OAM_END => self.oam[(addr - OAM_START) as usize],
            UNUSABLE_START..=UNUSABLE_END => OPEN_BUS,
            IO_START..=IO_END | IE_ADDR => self.io.read(addr),
            HRAM_START..=HRAM_END => self.hram[(addr - HRAM_START) as usize],
        }
    }

    /// Bytes past the end of a short image read as open bus.
    #[inline]
    fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(OPEN_BUS)
    }
}
