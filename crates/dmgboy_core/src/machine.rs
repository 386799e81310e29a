pub mod boot;
pub mod bus;
mod config;
mod gameboy;
pub mod gpu;
pub mod io;
mod serial;
pub mod timer;
pub mod video;

pub use boot::BootRom;
pub use bus::MemoryBus;
pub use config::MachineConfig;
pub use gameboy::{GameBoy, StepOutcome};
pub use gpu::{GpuMode, ModeScheduler};
pub use io::{AudioRegisters, HardwareRegisters};
pub use timer::Timer;

#[cfg(test)]
mod tests;
