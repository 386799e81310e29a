mod ime;
mod service;

/// T-cycles consumed by an interrupt dispatch.
pub const INTERRUPT_DISPATCH_CYCLES: u32 = 20;
