//! LCD mode scheduler.
//!
//! Paces the four LCD modes and the scanline counter from the cycle cost
//! of each executed instruction. It owns LY and the low STAT bits and
//! raises the VBlank and STAT interrupts. Pixel output is left to the
//! caller, which reads VRAM/OAM after each completed frame.

use super::io::HardwareRegisters;
use crate::interrupt::InterruptFlags;

pub const OAM_READ_CYCLES: u32 = 80;
pub const VRAM_READ_CYCLES: u32 = 172;
pub const HBLANK_CYCLES: u32 = 204;
pub const LINE_CYCLES: u32 = OAM_READ_CYCLES + VRAM_READ_CYCLES + HBLANK_CYCLES;

pub const VISIBLE_LINES: u8 = 144;
pub const VBLANK_LINES: u8 = 10;
pub const TOTAL_LINES: u8 = VISIBLE_LINES + VBLANK_LINES;
pub const CYCLES_PER_FRAME: u32 = LINE_CYCLES * TOTAL_LINES as u32;

const STAT_HBLANK_SELECT: u8 = 1 << 3;
const STAT_VBLANK_SELECT: u8 = 1 << 4;
const STAT_OAM_SELECT: u8 = 1 << 5;
const STAT_LYC_SELECT: u8 = 1 << 6;

/// LCD mode, numbered as reported in STAT bits 0..=1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum GpuMode {
    HBlank = 0,
    VBlank = 1,
    OamRead = 2,
    VramRead = 3,
}

impl GpuMode {
    /// Cycles spent in this mode per scanline.
    pub const fn duration(self) -> u32 {
        match self {
            GpuMode::OamRead => OAM_READ_CYCLES,
            GpuMode::VramRead => VRAM_READ_CYCLES,
            GpuMode::HBlank => HBLANK_CYCLES,
            GpuMode::VBlank => LINE_CYCLES,
        }
    }

    const fn stat_select(self) -> u8 {
        match self {
            GpuMode::HBlank => STAT_HBLANK_SELECT,
            GpuMode::VBlank => STAT_VBLANK_SELECT,
            GpuMode::OamRead => STAT_OAM_SELECT,
            GpuMode::VramRead => 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeScheduler {
    mode: GpuMode,
    line: u8,
    /// Cycles accumulated in the current mode, always below its duration
    /// between calls.
    cycles: u32,
    frame_count: u64,
    /// ORed state of the enabled STAT interrupt sources; the interrupt
    /// fires on its rising edge.
    stat_line: bool,
}

impl Default for ModeScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeScheduler {
    /// Start of a frame: OAM read on line 0.
    pub const fn new() -> Self {
        Self {
            mode: GpuMode::OamRead,
            line: 0,
            cycles: 0,
            frame_count: 0,
            stat_line: false,
        }
    }

    #[inline]
    pub fn mode(&self) -> GpuMode {
        self.mode
    }

    #[inline]
    pub fn line(&self) -> u8 {
        self.line
    }

    #[inline]
    pub fn mode_cycles(&self) -> u32 {
        self.cycles
    }

    /// Number of times VBlank has been entered.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Consume `cycles` and run every mode transition they cover.
    ///
    /// Returns `true` if a frame completed (VBlank was entered) during
    /// this call. Cycles beyond the last transition carry into the next
    /// call.
    pub fn step(&mut self, cycles: u32, io: &mut HardwareRegisters) -> bool {
        self.cycles += cycles;
        let mut frame_complete = false;
        while self.cycles >= self.mode.duration() {
            self.cycles -= self.mode.duration();
            frame_complete |= self.advance(io);
            self.publish(io);
        }
        // LYC may have been rewritten by the CPU since the last transition.
        self.publish(io);
        frame_complete
    }

    fn advance(&mut self, io: &mut HardwareRegisters) -> bool {
        match self.mode {
            GpuMode::OamRead => self.mode = GpuMode::VramRead,
            GpuMode::VramRead => self.mode = GpuMode::HBlank,
            GpuMode::HBlank => {
                self.line += 1;
                if self.line == VISIBLE_LINES {
                    self.mode = GpuMode::VBlank;
                    self.frame_count += 1;
                    io.request_interrupt(InterruptFlags::VBLANK);
                    log::debug!("GB PPU: VBlank entered, frame {}", self.frame_count);
                    return true;
                }
                self.mode = GpuMode::OamRead;
            }
            GpuMode::VBlank => {
                self.line += 1;
                if self.line == TOTAL_LINES {
                    self.line = 0;
                    self.mode = GpuMode::OamRead;
                }
            }
        }
        false
    }

    /// Mirror mode and line into STAT/LY and raise LCD_STAT on a rising
    /// edge of the STAT interrupt line.
    fn publish(&mut self, io: &mut HardwareRegisters) {
        let line = self.write_status(io);
        let rising = line && !self.stat_line;
        self.stat_line = line;
        if rising {
            io.request_interrupt(InterruptFlags::LCD_STAT);
            log::debug!(
                "GB PPU: STAT IRQ rising edge (STAT=0x{:02X} LY={} mode={:?})",
                io.stat(),
                self.line,
                self.mode
            );
        }
    }

    /// Write LY/STAT for the current position without raising interrupts.
    pub(crate) fn attach(&mut self, io: &mut HardwareRegisters) {
        self.stat_line = self.write_status(io);
    }

    /// Returns the resulting level of the STAT interrupt line.
    fn write_status(&self, io: &mut HardwareRegisters) -> bool {
        let coincidence = self.line == io.lyc;
        io.set_ly(self.line);
        io.set_stat_status(self.mode as u8, coincidence);

        let stat = io.stat();
        (stat & self.mode.stat_select()) != 0 || (coincidence && (stat & STAT_LYC_SELECT) != 0)
    }
}
