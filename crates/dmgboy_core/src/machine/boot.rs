use crate::error::{MachineError, Result};

pub const BOOT_ROM_SIZE: usize = 0x100;

/// A 256-byte DMG boot ROM image, overlaid on 0x0000..=0x00FF until the
/// program writes to 0xFF50.
#[derive(Clone)]
pub struct BootRom(Box<[u8; BOOT_ROM_SIZE]>);

impl BootRom {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image: [u8; BOOT_ROM_SIZE] = bytes
            .try_into()
            .map_err(|_| MachineError::BootRomSize { len: bytes.len() })?;
        Ok(Self(Box::new(image)))
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u8 {
        self.0[addr as usize & (BOOT_ROM_SIZE - 1)]
    }
}

impl std::fmt::Debug for BootRom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootRom").finish_non_exhaustive()
    }
}
