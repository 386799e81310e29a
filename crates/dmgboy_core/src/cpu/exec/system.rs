use crate::cpu::{Bus, Cpu};
use crate::interrupt::{IE_ADDR, IF_ADDR};

impl Cpu {
    pub(super) fn exec_halt<B: Bus>(&mut self, bus: &mut B) {
        if !self.ime {
            // HALT bug: with IME clear and an interrupt already pending the
            // CPU does not halt, and the next opcode fetch does not
            // increment PC.
            let pending = bus.read8(IE_ADDR) & bus.read8(IF_ADDR) & 0x1F;
            if pending != 0 {
                self.halt_bug = true;
                return;
            }
        }

        self.halted = true;
    }

    /// STOP (`10 00`). The CPU idles until a joypad interrupt is requested.
    pub(super) fn exec_stop(&mut self) {
        self.stopped = true;
        self.halted = false;
    }

    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    pub(super) fn exec_ei(&mut self) {
        // IME becomes 1 after the *next* instruction completes.
        self.ime_enable_pending = true;
    }
}
