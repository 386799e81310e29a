use super::bus::OPEN_BUS;
use super::gpu::{
    CYCLES_PER_FRAME, LINE_CYCLES, OAM_READ_CYCLES, TOTAL_LINES, VISIBLE_LINES, VRAM_READ_CYCLES,
};
use super::io::{DIV, DMA, LY, P1, SC, STAT, TAC, TIMA, TMA};
use super::video::tile_row;
use super::*;
use crate::error::MachineError;
use crate::interrupt::{InterruptFlags, IE_ADDR, IF_ADDR};

/// A 32 KiB mapper-less image with `program` at the entry point (0x0100).
fn rom_with(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

fn machine(program: &[u8]) -> GameBoy {
    GameBoy::new(&rom_with(program), MachineConfig::default()).unwrap()
}

#[test]
fn scheduler_enters_vblank_after_visible_lines_and_wraps_after_full_sweep() {
    let mut io = HardwareRegisters::default();
    let mut scheduler = ModeScheduler::new();

    for _ in 0..VISIBLE_LINES - 1 {
        assert!(!scheduler.step(LINE_CYCLES, &mut io));
    }
    assert_eq!(scheduler.mode(), GpuMode::OamRead);
    assert_eq!(scheduler.line(), VISIBLE_LINES - 1);

    assert!(scheduler.step(LINE_CYCLES, &mut io));
    assert_eq!(scheduler.mode(), GpuMode::VBlank);
    assert_eq!(scheduler.line(), VISIBLE_LINES);
    assert_eq!(scheduler.frame_count(), 1);
    assert_eq!(io.ly(), VISIBLE_LINES);
    assert!(io.interrupt_flags().contains(InterruptFlags::VBLANK));

    for _ in VISIBLE_LINES..TOTAL_LINES {
        assert!(!scheduler.step(LINE_CYCLES, &mut io));
    }
    assert_eq!(scheduler.mode(), GpuMode::OamRead);
    assert_eq!(scheduler.line(), 0);
    assert_eq!(scheduler.frame_count(), 1);
    assert_eq!(io.ly(), 0);
}

#[test]
fn scheduler_walks_modes_within_a_line() {
    let mut io = HardwareRegisters::default();
    let mut scheduler = ModeScheduler::new();

    scheduler.step(79, &mut io);
    assert_eq!(scheduler.mode(), GpuMode::OamRead);
    scheduler.step(1, &mut io);
    assert_eq!(scheduler.mode(), GpuMode::VramRead);
    assert_eq!(io.stat() & 0x03, GpuMode::VramRead as u8);
    scheduler.step(172, &mut io);
    assert_eq!(scheduler.mode(), GpuMode::HBlank);
    assert_eq!(io.stat() & 0x03, GpuMode::HBlank as u8);
    scheduler.step(204, &mut io);
    assert_eq!(scheduler.mode(), GpuMode::OamRead);
    assert_eq!(scheduler.line(), 1);
}

#[test]
fn scheduler_carries_excess_cycles_forward() {
    let mut io = HardwareRegisters::default();
    let mut scheduler = ModeScheduler::new();

    assert!(!scheduler.step(100, &mut io));
    assert_eq!(scheduler.mode(), GpuMode::VramRead);
    assert_eq!(scheduler.mode_cycles(), 20);

    // One large step covering the rest of the frame lands exactly on the
    // start of the next one.
    assert!(scheduler.step(CYCLES_PER_FRAME - 100, &mut io));
    assert_eq!(scheduler.mode(), GpuMode::OamRead);
    assert_eq!(scheduler.line(), 0);
    assert_eq!(scheduler.mode_cycles(), 0);
    assert_eq!(scheduler.frame_count(), 1);
}

#[test]
fn scheduler_reports_lyc_coincidence_and_stat_interrupt() {
    let mut io = HardwareRegisters::default();
    let mut scheduler = ModeScheduler::new();
    io.lyc = 2;
    io.write(STAT, 0x40);

    scheduler.step(LINE_CYCLES, &mut io);
    assert_eq!(io.stat() & 0x04, 0);
    assert!(!io.interrupt_flags().contains(InterruptFlags::LCD_STAT));

    scheduler.step(LINE_CYCLES, &mut io);
    assert_eq!(io.stat(), 0x80 | 0x40 | 0x04 | GpuMode::OamRead as u8);
    assert!(io.interrupt_flags().contains(InterruptFlags::LCD_STAT));
}

#[test]
fn scheduler_raises_stat_interrupt_on_selected_mode_entry() {
    let mut io = HardwareRegisters::default();
    let mut scheduler = ModeScheduler::new();
    io.write(STAT, 0x08);

    scheduler.step(OAM_READ_CYCLES + VRAM_READ_CYCLES - 4, &mut io);
    assert!(!io.interrupt_flags().contains(InterruptFlags::LCD_STAT));
    scheduler.step(4, &mut io);
    assert_eq!(scheduler.mode(), GpuMode::HBlank);
    assert!(io.interrupt_flags().contains(InterruptFlags::LCD_STAT));
}

#[test]
fn cpu_writes_cannot_touch_ly_or_stat_status_bits() {
    let mut gb = machine(&[]);
    let ly = gb.io().ly();
    let status = gb.io().stat() & 0x07;

    gb.bus_mut().write(LY, 0x77);
    gb.bus_mut().write(STAT, 0xFF);

    assert_eq!(gb.io().ly(), ly);
    assert_eq!(gb.io().stat() & 0x07, status);
    assert_eq!(gb.io().stat() & 0x78, 0x78);
}

#[test]
fn div_write_clears_divider_regardless_of_value() {
    let mut gb = machine(&[]);
    assert_eq!(gb.io().div(), 0xAB);

    gb.bus_mut().write(DIV, 0x55);

    assert_eq!(gb.io().div(), 0);
    assert_eq!(gb.bus().read(DIV), 0);
}

#[test]
fn div_increments_every_256_cycles() {
    // An all-zero image is a sea of NOPs.
    let mut gb = machine(&[]);
    let start = gb.io().div();

    for _ in 0..63 {
        assert_eq!(gb.step().unwrap().cycles, 4);
    }
    assert_eq!(gb.io().div(), start);
    gb.step().unwrap();
    assert_eq!(gb.io().div(), start.wrapping_add(1));
}

#[test]
fn timer_overflow_reloads_from_tma_and_requests_interrupt() {
    let mut io = HardwareRegisters::default();
    let mut timer = Timer::default();
    io.write(TIMA, 0xFE);
    io.write(TMA, 0x10);
    io.write(TAC, 0x05);

    timer.step(16, &mut io);
    assert_eq!(io.tima, 0xFF);
    assert!(!io.interrupt_flags().contains(InterruptFlags::TIMER));

    timer.step(20, &mut io);
    assert_eq!(io.tima, 0x10);
    assert!(io.interrupt_flags().contains(InterruptFlags::TIMER));
}

#[test]
fn timer_is_idle_while_disabled() {
    let mut io = HardwareRegisters::default();
    let mut timer = Timer::default();
    io.write(TAC, 0x01);

    timer.step(1024, &mut io);

    assert_eq!(io.tima, 0);
    assert_eq!(io.div(), 4);
}

#[test]
fn io_reads_force_unused_bits_high() {
    let mut io = HardwareRegisters::default();

    assert_eq!(io.read(IF_ADDR), 0xE0);
    assert_eq!(io.read(TAC), 0xF8);
    assert_eq!(io.read(STAT) & 0x80, 0x80);
    assert_eq!(io.read(SC), 0x7E);
    assert_eq!(io.read(0xFF03), OPEN_BUS);
    assert_eq!(io.read(P1), 0xCF);

    io.write(P1, 0x20);
    assert_eq!(io.read(P1), 0xEF);
    io.write(IF_ADDR, 0xFF);
    assert_eq!(io.read(IF_ADDR), 0xFF);
    assert_eq!(io.interrupt_flags(), InterruptFlags::all());
}

#[test]
fn audio_and_wave_registers_are_plain_storage() {
    let mut io = HardwareRegisters::default();

    io.write(0xFF12, 0xF3);
    io.write(0xFF26, 0x80);
    io.write(0xFF30, 0x12);
    io.write(0xFF3F, 0x34);
    io.write(0xFF15, 0x99);

    assert_eq!(io.read(0xFF12), 0xF3);
    assert_eq!(io.audio.nr12, 0xF3);
    assert_eq!(io.read(0xFF26), 0x80);
    assert_eq!(io.wave_pattern[0], 0x12);
    assert_eq!(io.read(0xFF3F), 0x34);
    assert_eq!(io.read(0xFF15), OPEN_BUS);
}

#[test]
fn boot_overlay_covers_low_rom_until_disabled() {
    let mut rom = rom_with(&[]);
    rom[0x0000] = 0x55;
    rom[0x0100] = 0x66;
    let boot = BootRom::from_bytes(&[0xAA; 256]).unwrap();
    let mut gb = GameBoy::new(&rom, MachineConfig::builder().boot_rom(boot).build()).unwrap();

    assert_eq!(gb.registers().pc, 0x0000);
    assert!(gb.bus().boot_rom_mapped());
    assert_eq!(gb.bus().read(0x0000), 0xAA);
    assert_eq!(gb.bus().read(0x00FF), 0xAA);
    assert_eq!(gb.bus().read(0x0100), 0x66);

    gb.bus_mut().write(0xFF50, 1);

    assert!(!gb.bus().boot_rom_mapped());
    assert_eq!(gb.bus().read(0x0000), 0x55);

    // Latch is one-way for the session.
    gb.bus_mut().write(0xFF50, 0);
    assert_eq!(gb.bus().read(0x0000), 0x55);
}

#[test]
fn low_rom_reads_cartridge_without_boot_image() {
    let mut rom = rom_with(&[]);
    rom[0x0000] = 0x55;
    let gb = GameBoy::new(&rom, MachineConfig::default()).unwrap();

    assert!(!gb.bus().boot_rom_mapped());
    assert_eq!(gb.bus().read(0x0000), 0x55);
}

#[test]
fn any_non_zero_boot_flag_write_unmaps_overlay() {
    let mut rom = rom_with(&[]);
    rom[0x0000] = 0x55;
    let boot = BootRom::from_bytes(&[0xAA; 256]).unwrap();
    let mut gb = GameBoy::new(&rom, MachineConfig::builder().boot_rom(boot).build()).unwrap();

    gb.bus_mut().write(0xFF50, 0x00);
    assert_eq!(gb.bus().read(0x0000), 0xAA);

    gb.bus_mut().write(0xFF50, 0x80);
    assert_eq!(gb.bus().read(0x0000), 0x55);
    assert_eq!(gb.bus().read(0xFF50), 0xFF);
}

#[test]
fn boot_program_hands_over_to_cartridge() {
    let mut image = [0u8; 256];
    // LD A,1 ; LDH (0x50),A
    image[..4].copy_from_slice(&[0x3E, 0x01, 0xE0, 0x50]);
    let mut rom = rom_with(&[]);
    rom[0x0004] = 0x3C; // INC A
    let config = MachineConfig::builder()
        .boot_rom(BootRom::from_bytes(&image).unwrap())
        .build();
    let mut gb = GameBoy::new(&rom, config).unwrap();

    gb.step().unwrap();
    gb.step().unwrap();
    gb.step().unwrap();

    assert_eq!(gb.registers().a, 2);
    assert_eq!(gb.registers().pc, 0x0005);
}

#[test]
fn boot_rom_must_be_256_bytes() {
    assert_eq!(
        BootRom::from_bytes(&[0; 255]).unwrap_err(),
        MachineError::BootRomSize { len: 255 }
    );
}

#[test]
fn echo_region_aliases_internal_ram() {
    let mut gb = machine(&[]);

    gb.bus_mut().write(0xC123, 0x42);
    assert_eq!(gb.bus().read(0xE123), 0x42);

    gb.bus_mut().write(0xFDFF, 0x99);
    assert_eq!(gb.bus().read(0xDDFF), 0x99);
}

#[test]
fn unusable_region_reads_open_bus_and_drops_writes() {
    // LD A,0x12 ; LD (0xFEA5),A
    let mut gb = machine(&[0x3E, 0x12, 0xEA, 0xA5, 0xFE]);

    gb.step().unwrap();
    gb.step().unwrap();

    assert_eq!(gb.bus().read(0xFEA5), OPEN_BUS);
    assert!(gb.fault().is_none());
}

#[test]
fn rom_write_fails_the_step_and_latches() {
    // LD A,1 ; LD (0x2000),A
    let mut gb = machine(&[0x3E, 0x01, 0xEA, 0x00, 0x20]);
    let bank_switch = MachineError::RomBankSwitch {
        address: 0x2000,
        value: 0x01,
    };

    gb.step().unwrap();
    assert_eq!(gb.step().unwrap_err(), bank_switch);
    assert_eq!(
        gb.step().unwrap_err(),
        MachineError::Faulted(Box::new(bank_switch.clone()))
    );
    assert_eq!(gb.fault(), Some(&bank_switch));
    assert_eq!(gb.bus().read(0x2000), 0x00);

    gb.reset();
    assert!(gb.fault().is_none());
    assert_eq!(gb.registers().pc, 0x0100);
    gb.step().unwrap();
}

#[test]
fn short_images_read_open_bus_past_the_end() {
    assert_eq!(
        GameBoy::new(&[], MachineConfig::default()).err(),
        Some(MachineError::EmptyCartridge)
    );

    let gb = GameBoy::new(&[0x00; 0x200], MachineConfig::default()).unwrap();
    assert_eq!(gb.bus().read(0x01FF), 0x00);
    assert_eq!(gb.bus().read(0x0200), OPEN_BUS);
    assert_eq!(gb.bus().read(0x7FFF), OPEN_BUS);
}

#[test]
fn post_boot_state_without_boot_rom() {
    let gb = machine(&[]);

    assert_eq!(gb.registers().pc, 0x0100);
    assert_eq!(gb.registers().sp, 0xFFFE);
    assert_eq!(gb.registers().af(), 0x01B0);
    assert_eq!(gb.io().lcdc, 0x91);
    assert_eq!(gb.io().bgp, 0xFC);
    assert_eq!(gb.io().audio.nr52, 0xF1);
    assert!(!gb.io().boot_rom_enabled());
    assert_eq!(gb.scheduler().mode(), GpuMode::OamRead);
    assert_eq!(gb.io().ly(), 0);
    assert_eq!(gb.io().stat() & 0x03, GpuMode::OamRead as u8);
}

#[test]
fn power_on_seed_fills_internal_ram_reproducibly() {
    let seeded = || {
        let config = MachineConfig::builder().power_on_seed(42).build();
        GameBoy::new(&rom_with(&[]), config).unwrap()
    };
    let wram = |gb: &GameBoy| (0xC000..=0xDFFFu16).map(|a| gb.bus().read(a)).collect::<Vec<_>>();

    let a = seeded();
    let b = seeded();
    let zeroed = machine(&[]);

    assert_eq!(wram(&a), wram(&b));
    assert!(wram(&a).iter().any(|&byte| byte != 0));
    assert!(wram(&zeroed).iter().all(|&byte| byte == 0));
    assert_eq!(a.bus().read(0xFF80), b.bus().read(0xFF80));
}

#[test]
fn serial_transfer_captures_byte_and_requests_interrupt() {
    // LD A,'O' ; LDH (SB),A ; LD A,0x81 ; LDH (SC),A
    let mut gb = machine(&[0x3E, b'O', 0xE0, 0x01, 0x3E, 0x81, 0xE0, 0x02]);

    for _ in 0..4 {
        gb.step().unwrap();
    }

    assert_eq!(gb.serial_output(), b"O");
    assert!(gb.io().interrupt_flags().contains(InterruptFlags::SERIAL));
    assert_eq!(gb.bus().read(SC) & 0x80, 0);
}

#[test]
fn oam_dma_copies_160_bytes() {
    let mut gb = machine(&[]);
    for i in 0..0xA0u16 {
        gb.bus_mut().write(0xC000 + i, i as u8);
    }

    gb.bus_mut().write(DMA, 0xC0);

    assert_eq!(gb.bus().read(DMA), 0xC0);
    for i in 0..0xA0usize {
        assert_eq!(gb.oam()[i], i as u8);
    }
}

#[test]
fn run_frame_stops_on_vblank() {
    let mut gb = machine(&[]);

    let first = gb.run_frame().unwrap();
    assert_eq!(first, u64::from(LINE_CYCLES) * u64::from(VISIBLE_LINES));
    assert_eq!(gb.frame_count(), 1);
    assert_eq!(gb.io().ly(), VISIBLE_LINES);

    let second = gb.run_frame().unwrap();
    assert_eq!(second, u64::from(CYCLES_PER_FRAME));
    assert_eq!(gb.frame_count(), 2);
    assert_eq!(gb.total_cycles(), first + second);
}

#[test]
fn timer_interrupt_wakes_halted_cpu() {
    // EI ; HALT
    let mut gb = machine(&[0xFB, 0x76]);
    gb.bus_mut().write(IE_ADDR, InterruptFlags::TIMER.bits());
    gb.bus_mut().write(TIMA, 0xFF);
    gb.bus_mut().write(TAC, 0x05);

    for _ in 0..16 {
        if gb.registers().pc == 0x0050 {
            break;
        }
        gb.step().unwrap();
    }

    assert_eq!(gb.registers().pc, 0x0050);
    assert!(!gb.cpu().halted);
    assert!(!gb.cpu().ime);
    assert!(!gb.io().interrupt_flags().contains(InterruptFlags::TIMER));
}

#[test]
fn external_interrupt_request_is_visible_in_if() {
    let mut gb = machine(&[]);

    gb.request_interrupt(InterruptFlags::JOYPAD);

    assert!(gb.io().interrupt_flags().contains(InterruptFlags::JOYPAD));
    assert_eq!(gb.bus().read(IF_ADDR) & 0x10, 0x10);
}

#[test]
fn peek_instruction_shows_next_opcode() {
    // JP 0x0150
    let mut gb = machine(&[0xC3, 0x50, 0x01]);

    let next = gb.peek_instruction();

    assert_eq!(next.mnemonic(), "JP a16");
    assert_eq!(next.imm16(), 0x0150);
    assert_eq!(gb.registers().pc, 0x0100);

    gb.step().unwrap();
    assert_eq!(gb.registers().pc, 0x0150);
    assert_eq!(gb.cpu().last_instruction().map(|i| i.opcode), Some(0xC3));
}

#[test]
fn tile_rows_decode_bit_planes_msb_first() {
    let mut gb = machine(&[]);
    // Tile 1, row 3.
    gb.bus_mut().write(0x8000 + 16 + 6, 0x3C);
    gb.bus_mut().write(0x8000 + 16 + 7, 0x7E);

    let row = tile_row(gb.vram(), 1, 3);

    assert_eq!(row.pixels(), [0, 2, 3, 3, 3, 3, 2, 0]);
    assert_eq!(row.pixel(1), 2);
    assert_eq!(tile_row(gb.vram(), 0, 0).pixels(), [0; 8]);
}
