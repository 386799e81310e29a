use crate::cpu::{Cpu, Instruction, Registers};
use crate::error::{MachineError, Result};
use crate::interrupt::InterruptFlags;

use super::bus::{MemoryBus, OAM_SIZE, VRAM_SIZE};
use super::config::MachineConfig;
use super::gpu::ModeScheduler;
use super::io::HardwareRegisters;
use super::timer::Timer;

/// What one [`GameBoy::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// T-cycles consumed by the instruction, interrupt dispatch or idle step.
    pub cycles: u32,
    /// VBlank was entered during this step; VRAM and OAM hold a full frame.
    pub frame_complete: bool,
}

/// A DMG machine: CPU, memory bus, LCD mode scheduler and timer, stepped
/// in lockstep one instruction at a time.
pub struct GameBoy {
    cpu: Cpu,
    bus: MemoryBus,
    scheduler: ModeScheduler,
    timer: Timer,
    config: MachineConfig,
    total_cycles: u64,
    fault: Option<MachineError>,
}

impl GameBoy {
    /// Build a machine around a mapper-less cartridge image.
    pub fn new(cartridge: &[u8], config: MachineConfig) -> Result<Self> {
        if cartridge.is_empty() {
            return Err(MachineError::EmptyCartridge);
        }
        Ok(Self::build(cartridge.to_vec(), config))
    }

    fn build(rom: Vec<u8>, config: MachineConfig) -> Self {
        let mut cpu = if config.boot_rom.is_some() {
            Cpu::power_on()
        } else {
            Cpu::new()
        };
        cpu.set_trace(config.trace_instructions);

        let mut bus = MemoryBus::new(rom, config.boot_rom.clone(), config.power_on_seed);
        let mut scheduler = ModeScheduler::new();
        scheduler.attach(bus.io_mut());

        Self {
            cpu,
            bus,
            scheduler,
            timer: Timer::default(),
            config,
            total_cycles: 0,
            fault: None,
        }
    }

    /// Return to the power-on state with the same cartridge and config.
    /// Clears a latched fault.
    pub fn reset(&mut self) {
        let rom = self.bus.take_rom();
        *self = Self::build(rom, self.config.clone());
    }

    /// Execute one instruction, then advance the timer and the LCD mode
    /// scheduler by its cycle cost.
    ///
    /// An unsupported memory access fails the step it happened in. Every
    /// later step returns [`MachineError::Faulted`] until [`reset`](Self::reset).
    pub fn step(&mut self) -> Result<StepOutcome> {
        if let Some(fault) = &self.fault {
            return Err(MachineError::Faulted(Box::new(fault.clone())));
        }

        let cycles = self.cpu.step(&mut self.bus);
        let io = self.bus.io_mut();
        self.timer.step(cycles, io);
        let frame_complete = self.scheduler.step(cycles, io);
        self.total_cycles += u64::from(cycles);

        if let Some(fault) = self.bus.take_fault() {
            log::error!(
                "GB CPU: stopped at PC=0x{:04X} after {}",
                self.cpu.regs.pc,
                self.cpu
                    .last_instruction()
                    .map_or_else(|| "<none>".to_string(), ToString::to_string)
            );
            self.fault = Some(fault.clone());
            return Err(fault);
        }

        Ok(StepOutcome {
            cycles,
            frame_complete,
        })
    }

    /// Step until the next frame completes. Returns the cycles consumed.
    pub fn run_frame(&mut self) -> Result<u64> {
        let mut cycles = 0u64;
        loop {
            let outcome = self.step()?;
            cycles += u64::from(outcome.cycles);
            if outcome.frame_complete {
                return Ok(cycles);
            }
        }
    }

    /// Raise an interrupt line from outside the core (joypad, tests).
    pub fn request_interrupt(&mut self, flags: InterruptFlags) {
        self.bus.io_mut().request_interrupt(flags);
    }

    /// Decode the next instruction without executing it.
    pub fn peek_instruction(&mut self) -> Instruction {
        self.cpu.peek_instruction(&mut self.bus)
    }

    #[inline]
    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    #[inline]
    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    #[inline]
    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    #[inline]
    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }

    #[inline]
    pub fn io(&self) -> &HardwareRegisters {
        self.bus.io()
    }

    #[inline]
    pub fn vram(&self) -> &[u8; VRAM_SIZE] {
        self.bus.vram()
    }

    #[inline]
    pub fn oam(&self) -> &[u8; OAM_SIZE] {
        self.bus.oam()
    }

    #[inline]
    pub fn scheduler(&self) -> &ModeScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.scheduler.frame_count()
    }

    #[inline]
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    pub fn serial_output(&self) -> &[u8] {
        self.bus.io().serial_output()
    }

    /// The error that stopped the machine, if any.
    pub fn fault(&self) -> Option<&MachineError> {
        self.fault.as_ref()
    }
}
