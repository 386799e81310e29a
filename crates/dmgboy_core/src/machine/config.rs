use typed_builder::TypedBuilder;

use super::boot::BootRom;

/// Construction options for a [`GameBoy`](super::GameBoy).
///
/// ```
/// use dmgboy_core::MachineConfig;
///
/// let config = MachineConfig::builder().power_on_seed(7).build();
/// assert!(config.boot_rom.is_none());
/// ```
#[derive(Clone, Debug, Default, TypedBuilder)]
pub struct MachineConfig {
    /// Start at 0x0000 with this image overlaid; without it the machine
    /// starts in the post-boot state at 0x0100.
    #[builder(default, setter(strip_option))]
    pub boot_rom: Option<BootRom>,
    /// Fill work RAM and high RAM with seeded noise instead of zeros.
    #[builder(default, setter(strip_option))]
    pub power_on_seed: Option<u64>,
    /// Log every executed instruction at trace level.
    #[builder(default = false)]
    pub trace_instructions: bool,
}
