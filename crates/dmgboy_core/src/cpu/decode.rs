use std::fmt;

use super::opcodes::{OpcodeDesc, CB_PREFIX, OPCODES};
use super::Bus;

/// A fully fetched instruction: opcode, descriptor and raw operand bytes.
///
/// Decoding reads the bus but changes nothing, so it doubles as the view
/// handed to tracing and debugging front ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the first byte (the opcode or the `0xCB` prefix).
    pub address: u16,
    /// The opcode byte, or the suffix byte for prefixed instructions.
    pub opcode: u8,
    pub prefixed: bool,
    /// Up to two immediate bytes in memory order. Unused slots are zero.
    pub operands: [u8; 2],
    pub desc: &'static OpcodeDesc,
}

impl Instruction {
    /// Decode the instruction starting at `address`.
    ///
    /// With `repeat_opcode` set (the HALT bug), the byte after the opcode is
    /// read from the opcode's own address, as the CPU failed to advance PC.
    pub fn decode<B: Bus>(bus: &mut B, address: u16, repeat_opcode: bool) -> Self {
        let lead = bus.read8(address);
        let mut next = if repeat_opcode {
            address
        } else {
            address.wrapping_add(1)
        };

        if lead == CB_PREFIX {
            let suffix = bus.read8(next);
            return Self {
                address,
                opcode: suffix,
                prefixed: true,
                operands: [0; 2],
                desc: OpcodeDesc::lookup(true, suffix),
            };
        }

        let desc = &OPCODES[lead as usize];
        let mut operands = [0u8; 2];
        for slot in operands.iter_mut().take(desc.byte_length.saturating_sub(1) as usize) {
            *slot = bus.read8(next);
            next = next.wrapping_add(1);
        }

        Self {
            address,
            opcode: lead,
            prefixed: false,
            operands,
            desc,
        }
    }

    /// Total bytes occupied in memory, including the `0xCB` prefix.
    #[inline]
    pub fn size_bytes(&self) -> u16 {
        if self.prefixed {
            1 + self.desc.byte_length as u16
        } else {
            self.desc.byte_length as u16
        }
    }

    /// Table cost in T-cycles, including the prefix fetch for `0xCB` forms.
    #[inline]
    pub fn base_cycles(&self) -> u32 {
        if self.prefixed {
            OPCODES[CB_PREFIX as usize].base_cycles as u32 + self.desc.base_cycles as u32
        } else {
            self.desc.base_cycles as u32
        }
    }

    #[inline]
    pub fn mnemonic(&self) -> &'static str {
        self.desc.mnemonic
    }

    /// The operand bytes actually encoded by this instruction.
    pub fn operand_bytes(&self) -> &[u8] {
        let count = if self.prefixed {
            0
        } else {
            self.desc.byte_length.saturating_sub(1) as usize
        };
        &self.operands[..count]
    }

    #[inline]
    pub fn imm8(&self) -> u8 {
        self.operands[0]
    }

    #[inline]
    pub fn imm16(&self) -> u16 {
        u16::from_le_bytes(self.operands)
    }

    /// The first operand as a signed displacement (`r8`).
    #[inline]
    pub fn offset(&self) -> i8 {
        self.operands[0] as i8
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.prefixed {
            write!(f, "{} [CB {:02X}]", self.desc.mnemonic, self.opcode)?;
            return Ok(());
        }
        write!(f, "{}", self.desc.mnemonic)?;
        let operands = self.operand_bytes();
        if !operands.is_empty() {
            write!(f, " [")?;
            for (i, byte) in operands.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{byte:02X}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}
