pub mod cpu;
pub mod error;
pub mod interrupt;
pub mod machine;

pub use cpu::{Bus, Cpu};
pub use error::MachineError;
pub use interrupt::InterruptFlags;
pub use machine::{BootRom, GameBoy, MachineConfig, StepOutcome};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = machine::gpu::VISIBLE_LINES as usize;
