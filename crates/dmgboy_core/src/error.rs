use thiserror::Error;

/// Errors raised while building or running a [`GameBoy`](crate::GameBoy).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("cartridge image is empty")]
    EmptyCartridge,

    #[error("boot ROM must be 256 bytes, got {len}")]
    BootRomSize { len: usize },

    /// A write into 0x0000..=0x7FFF. Only mapper-less cartridges are
    /// supported, so a bank switch request cannot be honoured.
    #[error("ROM bank switching is not supported (wrote 0x{value:02X} to 0x{address:04X})")]
    RomBankSwitch { address: u16, value: u8 },

    /// The machine stopped on an earlier error and can only be `reset`.
    #[error("machine is halted after an earlier error: {0}")]
    Faulted(Box<MachineError>),
}

pub type Result<T, E = MachineError> = std::result::Result<T, E>;
