//! Divider and programmable timer.
//!
//! DIV and TIMA live in `HardwareRegisters`; this unit only tracks the
//! cycles accumulated towards their next increments. Time advances by
//! whole instructions, so the register-access edge cases of the real
//! counter are not reproduced.

use super::io::HardwareRegisters;
use crate::interrupt::InterruptFlags;

pub const DIV_PERIOD: u32 = 256;

const TAC_ENABLE: u8 = 0x04;

/// TIMA period in cycles for TAC[1:0].
#[inline]
pub const fn tima_period(tac: u8) -> u32 {
    match tac & 0x03 {
        0b00 => 1024,
        0b01 => 16,
        0b10 => 64,
        _ => 256,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    div_cycles: u32,
    tima_cycles: u32,
}

impl Timer {
    pub fn step(&mut self, cycles: u32, io: &mut HardwareRegisters) {
        if io.take_div_reset() {
            self.div_cycles = 0;
        }
        self.div_cycles += cycles;
        while self.div_cycles >= DIV_PERIOD {
            self.div_cycles -= DIV_PERIOD;
            io.increment_div();
        }

        if io.tac & TAC_ENABLE == 0 {
            return;
        }
        let period = tima_period(io.tac);
        self.tima_cycles += cycles;
        while self.tima_cycles >= period {
            self.tima_cycles -= period;
            let (tima, overflow) = io.tima.overflowing_add(1);
            if overflow {
                io.tima = io.tma;
                io.request_interrupt(InterruptFlags::TIMER);
                log::trace!("GB timer: TIMA overflow, reloaded 0x{:02X}", io.tma);
            } else {
                io.tima = tima;
            }
        }
    }
}
