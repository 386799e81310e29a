mod audio;
mod init;

pub use audio::AudioRegisters;

use super::serial::Serial;
use crate::interrupt::{InterruptFlags, IE_ADDR, IF_ADDR};

pub const P1: u16 = 0xFF00;
pub const SB: u16 = 0xFF01;
pub const SC: u16 = 0xFF02;
pub const DIV: u16 = 0xFF04;
pub const TIMA: u16 = 0xFF05;
pub const TMA: u16 = 0xFF06;
pub const TAC: u16 = 0xFF07;
pub const WAVE_PATTERN_START: u16 = 0xFF30;
pub const WAVE_PATTERN_END: u16 = 0xFF3F;
pub const LCDC: u16 = 0xFF40;
pub const STAT: u16 = 0xFF41;
pub const SCY: u16 = 0xFF42;
pub const SCX: u16 = 0xFF43;
pub const LY: u16 = 0xFF44;
pub const LYC: u16 = 0xFF45;
pub const DMA: u16 = 0xFF46;
pub const BGP: u16 = 0xFF47;
pub const OBP0: u16 = 0xFF48;
pub const OBP1: u16 = 0xFF49;
pub const WY: u16 = 0xFF4A;
pub const WX: u16 = 0xFF4B;
/// Writing 0x01 here unmaps the boot ROM for the rest of the session.
///
/// Any other non-zero value unmaps it too, as on hardware; zero is ignored.
pub const BOOT_ROM_DISABLE: u16 = 0xFF50;

/// STAT bits written by the LCD mode scheduler (mode and LYC=LY flag).
const STAT_READ_ONLY_MASK: u8 = 0x07;

/// The memory-mapped I/O register bank (0xFF00..=0xFF7F plus IE at 0xFFFF).
///
/// Plain storage registers are public fields. Registers with special write
/// rules (DIV, LY, STAT, IF, SC, the boot ROM latch) are reached through
/// `read`/`write` or dedicated accessors so the rules always hold.
#[derive(Clone, Debug, Default)]
pub struct HardwareRegisters {
    /// Joypad select bits (4..=5). No buttons are ever reported pressed.
    pub p1: u8,
    pub(crate) serial: Serial,
    div: u8,
    /// Set by a DIV write; the timer consumes it to restart its divider phase.
    div_reset: bool,
    pub tima: u8,
    pub tma: u8,
    pub tac: u8,
    if_reg: u8,
    pub audio: AudioRegisters,
    pub wave_pattern: [u8; 16],
    pub lcdc: u8,
    stat: u8,
    pub scy: u8,
    pub scx: u8,
    ly: u8,
    pub lyc: u8,
    pub dma: u8,
    pub bgp: u8,
    pub obp0: u8,
    pub obp1: u8,
    pub wy: u8,
    pub wx: u8,
    boot_rom_disable: u8,
    pub ie: u8,
}

impl HardwareRegisters {
    /// CPU-visible read. Unmapped addresses read as 0xFF.
    pub fn read(&self, addr: u16) -> u8 {
        match addr {
            P1 => 0xC0 | (self.p1 & 0x30) | 0x0F,
            SB => self.serial.sb,
            SC => self.serial.read_sc(),
            DIV => self.div,
            TIMA => self.tima,
            TMA => self.tma,
            TAC => self.tac | 0xF8,
            IF_ADDR => self.if_reg | 0xE0,
            0xFF10..=0xFF2F => self.audio.read(addr).unwrap_or(0xFF),
            WAVE_PATTERN_START..=WAVE_PATTERN_END => {
                self.wave_pattern[(addr - WAVE_PATTERN_START) as usize]
            }
            LCDC => self.lcdc,
            STAT => self.stat | 0x80,
            SCY => self.scy,
            SCX => self.scx,
            LY => self.ly,
            LYC => self.lyc,
            DMA => self.dma,
            BGP => self.bgp,
            OBP0 => self.obp0,
            OBP1 => self.obp1,
            WY => self.wy,
            WX => self.wx,
            BOOT_ROM_DISABLE => self.boot_rom_disable | 0xFE,
            IE_ADDR => self.ie,
            _ => 0xFF,
        }
    }

    /// CPU-visible write. Writes to unmapped addresses are dropped.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            P1 => self.p1 = value & 0x30,
            SB => self.serial.write_sb(value),
            SC => {
                if self.serial.write_sc(value) {
                    self.request_interrupt(InterruptFlags::SERIAL);
                }
            }
            // Any write clears the divider, whatever the value.
            DIV => {
                self.div = 0;
                self.div_reset = true;
            }
            TIMA => self.tima = value,
            TMA => self.tma = value,
            TAC => self.tac = value & 0x07,
            IF_ADDR => self.if_reg = value & 0x1F,
            0xFF10..=0xFF2F => match self.audio.register_mut(addr) {
                Some(reg) => *reg = value,
                None => log::trace!("GB IO: write to unmapped 0x{addr:04X} ignored"),
            },
            WAVE_PATTERN_START..=WAVE_PATTERN_END => {
                self.wave_pattern[(addr - WAVE_PATTERN_START) as usize] = value;
            }
            LCDC => self.lcdc = value,
            STAT => {
                self.stat = (self.stat & STAT_READ_ONLY_MASK) | (value & 0x78);
            }
            SCY => self.scy = value,
            SCX => self.scx = value,
            // LY belongs to the LCD mode scheduler.
            LY => log::trace!("GB IO: write of 0x{value:02X} to LY ignored"),
            LYC => self.lyc = value,
            DMA => self.dma = value,
            BGP => self.bgp = value,
            OBP0 => self.obp0 = value,
            OBP1 => self.obp1 = value,
            WY => self.wy = value,
            WX => self.wx = value,
            BOOT_ROM_DISABLE => {
                if value != 0 && self.boot_rom_enabled() {
                    log::info!("GB IO: boot ROM unmapped");
                    self.boot_rom_disable = 0x01;
                }
            }
            IE_ADDR => self.ie = value,
            _ => log::trace!("GB IO: write to unmapped 0x{addr:04X} ignored"),
        }
    }

    #[inline]
    pub fn div(&self) -> u8 {
        self.div
    }

    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn stat(&self) -> u8 {
        self.stat | 0x80
    }

    #[inline]
    pub fn interrupt_flags(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.if_reg)
    }

    #[inline]
    pub fn interrupt_enable(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.ie)
    }

    #[inline]
    pub fn request_interrupt(&mut self, flags: InterruptFlags) {
        self.if_reg |= flags.bits();
    }

    /// Whether the boot ROM overlay latch is still in its power-on state.
    #[inline]
    pub fn boot_rom_enabled(&self) -> bool {
        self.boot_rom_disable & 0x01 == 0
    }

    /// Bytes sent over the serial port so far.
    pub fn serial_output(&self) -> &[u8] {
        &self.serial.output
    }

    pub(crate) fn increment_div(&mut self) {
        self.div = self.div.wrapping_add(1);
    }

    pub(crate) fn take_div_reset(&mut self) -> bool {
        std::mem::take(&mut self.div_reset)
    }

    pub(crate) fn set_ly(&mut self, ly: u8) {
        self.ly = ly;
    }

    /// Update STAT's scheduler-owned bits: mode (0..=1) and LYC=LY (2).
    pub(crate) fn set_stat_status(&mut self, mode: u8, coincidence: bool) {
        let mut stat = self.stat & !STAT_READ_ONLY_MASK;
        stat |= mode & 0x03;
        if coincidence {
            stat |= 0x04;
        }
        self.stat = stat;
    }
}
