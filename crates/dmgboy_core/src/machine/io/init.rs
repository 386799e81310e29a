use super::HardwareRegisters;

impl HardwareRegisters {
    /// Registers as the DMG boot ROM leaves them when it jumps to 0x0100.
    ///
    /// Used when a machine starts without a boot ROM image. The boot ROM
    /// latch is already set, so the overlay stays unmapped.
    pub fn post_boot() -> Self {
        let mut io = Self {
            p1: 0x30,
            div: 0xAB,
            // The boot ROM exits with a VBlank request pending.
            if_reg: 0x01,
            lcdc: 0x91,
            stat: 0x05,
            dma: 0xFF,
            bgp: 0xFC,
            boot_rom_disable: 0x01,
            ..Self::default()
        };
        io.serial.sc = 0x7E;

        let audio = &mut io.audio;
        audio.nr10 = 0x80;
        audio.nr11 = 0xBF;
        audio.nr12 = 0xF3;
        audio.nr13 = 0xFF;
        audio.nr14 = 0xBF;
        audio.nr21 = 0x3F;
        audio.nr22 = 0x00;
        audio.nr23 = 0xFF;
        audio.nr24 = 0xBF;
        audio.nr30 = 0x7F;
        audio.nr31 = 0xFF;
        audio.nr32 = 0x9F;
        audio.nr33 = 0xFF;
        audio.nr34 = 0xBF;
        audio.nr41 = 0xFF;
        audio.nr42 = 0x00;
        audio.nr43 = 0x00;
        audio.nr44 = 0xBF;
        audio.nr50 = 0x77;
        audio.nr51 = 0xF3;
        audio.nr52 = 0xF1;
        io
    }
}
