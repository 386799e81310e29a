use super::{Cpu, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the state the DMG boot ROM leaves behind at 0x0100.
    pub fn new() -> Self {
        let mut cpu = Self::power_on();
        cpu.apply_dmg_boot_state();
        cpu
    }

    /// A CPU as it comes out of reset: every register zero, PC at 0x0000,
    /// ready to run a boot ROM.
    pub fn power_on() -> Self {
        Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            halt_bug: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            trace: false,
            last_instruction: None,
        }
    }

    /// Reset to the post-boot state, keeping the trace setting.
    pub fn reset(&mut self) {
        let trace = self.trace;
        *self = Self::new();
        self.trace = trace;
    }

    /// Initialize registers to match the DMG boot ROM's state after it
    /// hands control to cartridge code (values from Pan Docs).
    pub fn apply_dmg_boot_state(&mut self) {
        self.regs.set_af(0x01B0);
        self.regs.set_bc(0x0013);
        self.regs.set_de(0x00D8);
        self.regs.set_hl(0x014D);
        self.regs.sp = 0xFFFE;
        self.regs.pc = 0x0100;

        // IME is clear when control reaches the cartridge.
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }
}
