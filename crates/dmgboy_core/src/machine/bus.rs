use rand::{rngs::StdRng, RngCore, SeedableRng};

use super::{boot::BootRom, io::HardwareRegisters};
use crate::cpu::Bus;
use crate::error::MachineError;

mod dma;
mod read;
mod write;

pub const ROM_END: u16 = 0x7FFF;
pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const CART_RAM_START: u16 = 0xA000;
pub const CART_RAM_END: u16 = 0xBFFF;
pub const WRAM_START: u16 = 0xC000;
pub const WRAM_END: u16 = 0xDFFF;
pub const ECHO_START: u16 = 0xE000;
pub const ECHO_END: u16 = 0xFDFF;
pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const IO_START: u16 = 0xFF00;
pub const IO_END: u16 = 0xFF7F;
pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;

pub const VRAM_SIZE: usize = 0x2000;
pub const CART_RAM_SIZE: usize = 0x2000;
pub const WRAM_SIZE: usize = 0x2000;
pub const OAM_SIZE: usize = 0xA0;
pub const HRAM_SIZE: usize = 0x7F;

/// Largest image addressable without a mapper (two 16 KiB banks).
pub const MAX_ROM_SIZE: usize = 0x8000;

/// Value returned for reads with nothing behind them.
pub const OPEN_BUS: u8 = 0xFF;

/// Address decoder over the DMG memory map.
///
/// Every address belongs to exactly one backing store; `read`/`write` in
/// the submodules hold the routing table.
pub struct MemoryBus {
    rom: Vec<u8>,
    boot_rom: Option<BootRom>,
    pub(crate) vram: Box<[u8; VRAM_SIZE]>,
    cart_ram: Box<[u8; CART_RAM_SIZE]>,
    wram: Box<[u8; WRAM_SIZE]>,
    pub(crate) oam: [u8; OAM_SIZE],
    hram: [u8; HRAM_SIZE],
    pub(crate) io: HardwareRegisters,
    /// First unsupported access seen; the machine turns this into an error
    /// after the current instruction.
    fault: Option<MachineError>,
}

impl MemoryBus {
    /// Build a bus over `rom`.
    ///
    /// With a boot ROM, I/O registers start from their power-on values and
    /// the overlay is mapped. Without one, they start from the state the
    /// boot ROM would have left behind. With `power_on_seed`, work RAM and
    /// high RAM are filled from a PRNG; otherwise they start zeroed.
    pub(crate) fn new(rom: Vec<u8>, boot_rom: Option<BootRom>, power_on_seed: Option<u64>) -> Self {
        if rom.len() > MAX_ROM_SIZE {
            log::warn!(
                "GB bus: ROM is {} bytes; only the first 0x{MAX_ROM_SIZE:X} are mapped (no MBC support)",
                rom.len()
            );
        }
        let io = if boot_rom.is_some() {
            HardwareRegisters::default()
        } else {
            HardwareRegisters::post_boot()
        };
        let mut bus = Self {
            rom,
            boot_rom,
            vram: Box::new([0; VRAM_SIZE]),
            cart_ram: Box::new([0; CART_RAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            oam: [0; OAM_SIZE],
            hram: [0; HRAM_SIZE],
            io,
            fault: None,
        };
        if let Some(seed) = power_on_seed {
            bus.randomize_internal_ram(seed);
        }
        bus
    }

    /// Internal RAM holds garbage at power-on. A seeded PRNG keeps runs
    /// reproducible.
    fn randomize_internal_ram(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        rng.fill_bytes(&mut self.wram[..]);
        rng.fill_bytes(&mut self.hram);
    }

    /// Whether reads of 0x0000..=0x00FF currently hit the boot ROM.
    #[inline]
    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_rom.is_some() && self.io.boot_rom_enabled()
    }

    #[inline]
    pub fn io(&self) -> &HardwareRegisters {
        &self.io
    }

    #[inline]
    pub fn io_mut(&mut self) -> &mut HardwareRegisters {
        &mut self.io
    }

    #[inline]
    pub fn vram(&self) -> &[u8; VRAM_SIZE] {
        &self.vram
    }

    #[inline]
    pub fn oam(&self) -> &[u8; OAM_SIZE] {
        &self.oam
    }

    pub(crate) fn take_rom(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.rom)
    }

    pub(crate) fn take_fault(&mut self) -> Option<MachineError> {
        self.fault.take()
    }

    fn record_fault(&mut self, fault: MachineError) {
        log::error!("GB bus: {fault}");
        // Keep the first fault of an instruction; later ones are consequences.
        self.fault.get_or_insert(fault);
    }
}

impl Bus for MemoryBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }
}
