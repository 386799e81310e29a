//! Static opcode descriptors for the base and `0xCB`-prefixed instruction spaces.
//!
//! Cycle counts are T-cycles. For conditional control flow the base cost is
//! the not-taken cost; `Cpu::step` adds the taken delta at runtime.

/// Immutable description of one opcode slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpcodeDesc {
    /// Length in bytes. For the base table this includes the opcode and any
    /// operands; for the prefixed table it counts only the suffix byte.
    pub byte_length: u8,
    /// Cost in T-cycles (not-taken cost for conditional instructions).
    pub base_cycles: u8,
    pub mnemonic: &'static str,
}

/// Mnemonic carried by opcode holes. Their cost is 0 cycles.
pub const INVALID_MNEMONIC: &str = "INVALID";

/// The lead byte that selects `CB_OPCODES`.
pub const CB_PREFIX: u8 = 0xCB;

/// Extra cycles for a taken `JR cc` / `JP cc`.
pub const TAKEN_JUMP_CYCLES: u32 = 4;
/// Extra cycles for a taken `CALL cc` / `RET cc`.
pub const TAKEN_CALL_RET_CYCLES: u32 = 12;

impl OpcodeDesc {
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.base_cycles != 0
    }

    /// Look up the descriptor for `byte` in the base or prefixed space.
    #[inline]
    pub fn lookup(prefixed: bool, byte: u8) -> &'static OpcodeDesc {
        if prefixed {
            &CB_OPCODES[byte as usize]
        } else {
            &OPCODES[byte as usize]
        }
    }
}

const fn op(byte_length: u8, base_cycles: u8, mnemonic: &'static str) -> OpcodeDesc {
    OpcodeDesc {
        byte_length,
        base_cycles,
        mnemonic,
    }
}

const INVALID: OpcodeDesc = op(1, 0, INVALID_MNEMONIC);

pub static OPCODES: [OpcodeDesc; 256] = [
    op(1, 4, "NOP"), // 0x00
    op(3, 12, "LD BC,d16"), // 0x01
    op(1, 8, "LD (BC),A"), // 0x02
    op(1, 8, "INC BC"), // 0x03
    op(1, 4, "INC B"), // 0x04
    op(1, 4, "DEC B"), // 0x05
    op(2, 8, "LD B,d8"), // 0x06
    op(1, 4, "RLCA"), // 0x07
    op(3, 20, "LD (a16),SP"), // 0x08
    op(1, 8, "ADD HL,BC"), // 0x09
    op(1, 8, "LD A,(BC)"), // 0x0A
    op(1, 8, "DEC BC"), // 0x0B
    op(1, 4, "INC C"), // 0x0C
    op(1, 4, "DEC C"), // 0x0D
    op(2, 8, "LD C,d8"), // 0x0E
    op(1, 4, "RRCA"), // 0x0F
    op(2, 4, "STOP"), // 0x10
    op(3, 12, "LD DE,d16"), // 0x11
    op(1, 8, "LD (DE),A"), // 0x12
    op(1, 8, "INC DE"), // 0x13
    op(1, 4, "INC D"), // 0x14
    op(1, 4, "DEC D"), // 0x15
    op(2, 8, "LD D,d8"), // 0x16
    op(1, 4, "RLA"), // 0x17
    op(2, 12, "JR r8"), // 0x18
    op(1, 8, "ADD HL,DE"), // 0x19
    op(1, 8, "LD A,(DE)"), // 0x1A
    op(1, 8, "DEC DE"), // 0x1B
    op(1, 4, "INC E"), // 0x1C
    op(1, 4, "DEC E"), // 0x1D
    op(2, 8, "LD E,d8"), // 0x1E
    op(1, 4, "RRA"), // 0x1F
    op(2, 8, "JR NZ,r8"), // 0x20
    op(3, 12, "LD HL,d16"), // 0x21
    op(1, 8, "LD (HL+),A"), // 0x22
    op(1, 8, "INC HL"), // 0x23
    op(1, 4, "INC H"), // 0x24
    op(1, 4, "DEC H"), // 0x25
    op(2, 8, "LD H,d8"), // 0x26
    op(1, 4, "DAA"), // 0x27
    op(2, 8, "JR Z,r8"), // 0x28
    op(1, 8, "ADD HL,HL"), // 0x29
    op(1, 8, "LD A,(HL+)"), // 0x2A
    op(1, 8, "DEC HL"), // 0x2B
    op(1, 4, "INC L"), // 0x2C
    op(1, 4, "DEC L"), // 0x2D
    op(2, 8, "LD L,d8"), // 0x2E
    op(1, 4, "CPL"), // 0x2F
    op(2, 8, "JR NC,r8"), // 0x30
    op(3, 12, "LD SP,d16"), // 0x31
    op(1, 8, "LD (HL-),A"), // 0x32
    op(1, 8, "INC SP"), // 0x33
    op(1, 12, "INC (HL)"), // 0x34
    op(1, 12, "DEC (HL)"), // 0x35
    op(2, 12, "LD (HL),d8"), // 0x36
    op(1, 4, "SCF"), // 0x37
    op(2, 8, "JR C,r8"), // 0x38
    op(1, 8, "ADD HL,SP"), // 0x39
    op(1, 8, "LD A,(HL-)"), // 0x3A
    op(1, 8, "DEC SP"), // 0x3B
    op(1, 4, "INC A"), // 0x3C
    op(1, 4, "DEC A"), // 0x3D
    op(2, 8, "LD A,d8"), // 0x3E
    op(1, 4, "CCF"), // 0x3F
    op(1, 4, "LD B,B"), // 0x40
    op(1, 4, "LD B,C"), // 0x41
    op(1, 4, "LD B,D"), // 0x42
    op(1, 4, "LD B,E"), // 0x43
    op(1, 4, "LD B,H"), // 0x44
    op(1, 4, "LD B,L"), // 0x45
    op(1, 8, "LD B,(HL)"), // 0x46
    op(1, 4, "LD B,A"), // 0x47
    op(1, 4, "LD C,B"), // 0x48
    op(1, 4, "LD C,C"), // 0x49
    op(1, 4, "LD C,D"), // 0x4A
    op(1, 4, "LD C,E"), // 0x4B
    op(1, 4, "LD C,H"), // 0x4C
    op(1, 4, "LD C,L"), // 0x4D
    op(1, 8, "LD C,(HL)"), // 0x4E
    op(1, 4, "LD C,A"), // 0x4F
    op(1, 4, "LD D,B"), // 0x50
    op(1, 4, "LD D,C"), // 0x51
    op(1, 4, "LD D,D"), // 0x52
    op(1, 4, "LD D,E"), // 0x53
    op(1, 4, "LD D,H"), // 0x54
    op(1, 4, "LD D,L"), // 0x55
    op(1, 8, "LD D,(HL)"), // 0x56
    op(1, 4, "LD D,A"), // 0x57
    op(1, 4, "LD E,B"), // 0x58
    op(1, 4, "LD E,C"), // 0x59
    op(1, 4, "LD E,D"), // 0x5A
    op(1, 4, "LD E,E"), // 0x5B
    op(1, 4, "LD E,H"), // 0x5C
    op(1, 4, "LD E,L"), // 0x5D
    op(1, 8, "LD E,(HL)"), // 0x5E
    op(1, 4, "LD E,A"), // 0x5F
    op(1, 4, "LD H,B"), // 0x60
    op(1, 4, "LD H,C"), // 0x61
    op(1, 4, "LD H,D"), // 0x62
    op(1, 4, "LD H,E"), // 0x63
    op(1, 4, "LD H,H"), // 0x64
    op(1, 4, "LD H,L"), // 0x65
    op(1, 8, "LD H,(HL)"), // 0x66
    op(1, 4, "LD H,A"), // 0x67
    op(1, 4, "LD L,B"), // 0x68
    op(1, 4, "LD L,C"), // 0x69
    op(1, 4, "LD L,D"), // 0x6A
    op(1, 4, "LD L,E"), // 0x6B
    op(1, 4, "LD L,H"), // 0x6C
    op(1, 4, "LD L,L"), // 0x6D
    op(1, 8, "LD L,(HL)"), // 0x6E
    op(1, 4, "LD L,A"), // 0x6F
    op(1, 8, "LD (HL),B"), // 0x70
    op(1, 8, "LD (HL),C"), // 0x71
    op(1, 8, "LD (HL),D"), // 0x72
    op(1, 8, "LD (HL),E"), // 0x73
    op(1, 8, "LD (HL),H"), // 0x74
    op(1, 8, "LD (HL),L"), // 0x75
    op(1, 4, "HALT"), // 0x76
    op(1, 8, "LD (HL),A"), // 0x77
    op(1, 4, "LD A,B"), // 0x78
    op(1, 4, "LD A,C"), // 0x79
    op(1, 4, "LD A,D"), // 0x7A
    op(1, 4, "LD A,E"), // 0x7B
    op(1, 4, "LD A,H"), // 0x7C
    op(1, 4, "LD A,L"), // 0x7D
    op(1, 8, "LD A,(HL)"), // 0x7E
    op(1, 4, "LD A,A"), // 0x7F
    op(1, 4, "ADD A,B"), // 0x80
    op(1, 4, "ADD A,C"), // 0x81
    op(1, 4, "ADD A,D"), // 0x82
    op(1, 4, "ADD A,E"), // 0x83
    op(1, 4, "ADD A,H"), // 0x84
    op(1, 4, "ADD A,L"), // 0x85
    op(1, 8, "ADD A,(HL)"), // 0x86
    op(1, 4, "ADD A,A"), // 0x87
    op(1, 4, "ADC A,B"), // 0x88
    op(1, 4, "ADC A,C"), // 0x89
    op(1, 4, "ADC A,D"), // 0x8A
    op(1, 4, "ADC A,E"), // 0x8B
    op(1, 4, "ADC A,H"), // 0x8C
    op(1, 4, "ADC A,L"), // 0x8D
    op(1, 8, "ADC A,(HL)"), // 0x8E
    op(1, 4, "ADC A,A"), // 0x8F
    op(1, 4, "SUB B"), // 0x90
    op(1, 4, "SUB C"), // 0x91
    op(1, 4, "SUB D"), // 0x92
    op(1, 4, "SUB E"), // 0x93
    op(1, 4, "SUB H"), // 0x94
    op(1, 4, "SUB L"), // 0x95
    op(1, 8, "SUB (HL)"), // 0x96
    op(1, 4, "SUB A"), // 0x97
    op(1, 4, "SBC A,B"), // 0x98
    op(1, 4, "SBC A,C"), // 0x99
    op(1, 4, "SBC A,D"), // 0x9A
    op(1, 4, "SBC A,E"), // 0x9B
    op(1, 4, "SBC A,H"), // 0x9C
    op(1, 4, "SBC A,L"), // 0x9D
    op(1, 8, "SBC A,(HL)"), // 0x9E
    op(1, 4, "SBC A,A"), // 0x9F
    op(1, 4, "AND B"), // 0xA0
    op(1, 4, "AND C"), // 0xA1
    op(1, 4, "AND D"), // 0xA2
    op(1, 4, "AND E"), // 0xA3
    op(1, 4, "AND H"), // 0xA4
    op(1, 4, "AND L"), // 0xA5
    op(1, 8, "AND (HL)"), // 0xA6
    op(1, 4, "AND A"), // 0xA7
    op(1, 4, "XOR B"), // 0xA8
    op(1, 4, "XOR C"), // 0xA9
    op(1, 4, "XOR D"), // 0xAA
    op(1, 4, "XOR E"), // 0xAB
    op(1, 4, "XOR H"), // 0xAC
    op(1, 4, "XOR L"), // 0xAD
    op(1, 8, "XOR (HL)"), // 0xAE
    op(1, 4, "XOR A"), // 0xAF
    op(1, 4, "OR B"), // 0xB0
    op(1, 4, "OR C"), // 0xB1
    op(1, 4, "OR D"), // 0xB2
    op(1, 4, "OR E"), // 0xB3
    op(1, 4, "OR H"), // 0xB4
    op(1, 4, "OR L"), // 0xB5
    op(1, 8, "OR (HL)"), // 0xB6
    op(1, 4, "OR A"), // 0xB7
    op(1, 4, "CP B"), // 0xB8
    op(1, 4, "CP C"), // 0xB9
    op(1, 4, "CP D"), // 0xBA
    op(1, 4, "CP E"), // 0xBB
    op(1, 4, "CP H"), // 0xBC
    op(1, 4, "CP L"), // 0xBD
    op(1, 8, "CP (HL)"), // 0xBE
    op(1, 4, "CP A"), // 0xBF
    op(1, 8, "RET NZ"), // 0xC0
    op(1, 12, "POP BC"), // 0xC1
    op(3, 12, "JP NZ,a16"), // 0xC2
    op(3, 16, "JP a16"), // 0xC3
    op(3, 12, "CALL NZ,a16"), // 0xC4
    op(1, 16, "PUSH BC"), // 0xC5
    op(2, 8, "ADD A,d8"), // 0xC6
    op(1, 16, "RST 00H"), // 0xC7
    op(1, 8, "RET Z"), // 0xC8
    op(1, 16, "RET"), // 0xC9
    op(3, 12, "JP Z,a16"), // 0xCA
    op(1, 4, "PREFIX CB"), // 0xCB
    op(3, 12, "CALL Z,a16"), // 0xCC
    op(3, 24, "CALL a16"), // 0xCD
    op(2, 8, "ADC A,d8"), // 0xCE
    op(1, 16, "RST 08H"), // 0xCF
    op(1, 8, "RET NC"), // 0xD0
    op(1, 12, "POP DE"), // 0xD1
    op(3, 12, "JP NC,a16"), // 0xD2
    INVALID, // 0xD3
    op(3, 12, "CALL NC,a16"), // 0xD4
    op(1, 16, "PUSH DE"), // 0xD5
    op(2, 8, "SUB d8"), // 0xD6
    op(1, 16, "RST 10H"), // 0xD7
    op(1, 8, "RET C"), // 0xD8
    op(1, 16, "RETI"), // 0xD9
    op(3, 12, "JP C,a16"), // 0xDA
    INVALID, // 0xDB
    op(3, 12, "CALL C,a16"), // 0xDC
    INVALID, // 0xDD
    op(2, 8, "SBC A,d8"), // 0xDE
    op(1, 16, "RST 18H"), // 0xDF
    op(2, 12, "LDH (a8),A"), // 0xE0
    op(1, 12, "POP HL"), // 0xE1
    op(1, 8, "LD (FF00+C),A"), // 0xE2
    INVALID, // 0xE3
    INVALID, // 0xE4
    op(1, 16, "PUSH HL"), // 0xE5
    op(2, 8, "AND d8"), // 0xE6
    op(1, 16, "RST 20H"), // 0xE7
    op(2, 16, "ADD SP,r8"), // 0xE8
    op(1, 4, "JP (HL)"), // 0xE9
    op(3, 16, "LD (a16),A"), // 0xEA
    INVALID, // 0xEB
    INVALID, // 0xEC
    INVALID, // 0xED
    op(2, 8, "XOR d8"), // 0xEE
    op(1, 16, "RST 28H"), // 0xEF
    op(2, 12, "LDH A,(a8)"), // 0xF0
    op(1, 12, "POP AF"), // 0xF1
    op(1, 8, "LD A,(FF00+C)"), // 0xF2
    op(1, 4, "DI"), // 0xF3
    INVALID, // 0xF4
    op(1, 16, "PUSH AF"), // 0xF5
    op(2, 8, "OR d8"), // 0xF6
    op(1, 16, "RST 30H"), // 0xF7
    op(2, 12, "LD HL,SP+r8"), // 0xF8
    op(1, 8, "LD SP,HL"), // 0xF9
    op(3, 16, "LD A,(a16)"), // 0xFA
    op(1, 4, "EI"), // 0xFB
    INVALID, // 0xFC
    INVALID, // 0xFD
    op(2, 8, "CP d8"), // 0xFE
    op(1, 16, "RST 38H"), // 0xFF
];

/// `0xCB` suffix table. Costs exclude the 4 cycles of the prefix byte, which
/// `OPCODES[0xCB]` already accounts for.
pub static CB_OPCODES: [OpcodeDesc; 256] = [
    op(1, 4, "RLC B"), // 0x00
    op(1, 4, "RLC C"), // 0x01
    op(1, 4, "RLC D"), // 0x02
    op(1, 4, "RLC E"), // 0x03
    op(1, 4, "RLC H"), // 0x04
    op(1, 4, "RLC L"), // 0x05
    op(1, 12, "RLC (HL)"), // 0x06
    op(1, 4, "RLC A"), // 0x07
    op(1, 4, "RRC B"), // 0x08
    op(1, 4, "RRC C"), // 0x09
    op(1, 4, "RRC D"), // 0x0A
    op(1, 4, "RRC E"), // 0x0B
    op(1, 4, "RRC H"), // 0x0C
    op(1, 4, "RRC L"), // 0x0D
    op(1, 12, "RRC (HL)"), // 0x0E
    op(1, 4, "RRC A"), // 0x0F
    op(1, 4, "RL B"), // 0x10
    op(1, 4, "RL C"), // 0x11
    op(1, 4, "RL D"), // 0x12
    op(1, 4, "RL E"), // 0x13
    op(1, 4, "RL H"), // 0x14
    op(1, 4, "RL L"), // 0x15
    op(1, 12, "RL (HL)"), // 0x16
    op(1, 4, "RL A"), // 0x17
    op(1, 4, "RR B"), // 0x18
    op(1, 4, "RR C"), // 0x19
    op(1, 4, "RR D"), // 0x1A
    op(1, 4, "RR E"), // 0x1B
    op(1, 4, "RR H"), // 0x1C
    op(1, 4, "RR L"), // 0x1D
    op(1, 12, "RR (HL)"), // 0x1E
    op(1, 4, "RR A"), // 0x1F
    op(1, 4, "SLA B"), // 0x20
    op(1, 4, "SLA C"), // 0x21
    op(1, 4, "SLA D"), // 0x22
    op(1, 4, "SLA E"), // 0x23
    op(1, 4, "SLA H"), // 0x24
    op(1, 4, "SLA L"), // 0x25
    op(1, 12, "SLA (HL)"), // 0x26
    op(1, 4, "SLA A"), // 0x27
    op(1, 4, "SRA B"), // 0x28
    op(1, 4, "SRA C"), // 0x29
    op(1, 4, "SRA D"), // 0x2A
    op(1, 4, "SRA E"), // 0x2B
    op(1, 4, "SRA H"), // 0x2C
    op(1, 4, "SRA L"), // 0x2D
    op(1, 12, "SRA (HL)"), // 0x2E
    op(1, 4, "SRA A"), // 0x2F
    op(1, 4, "SWAP B"), // 0x30
    op(1, 4, "SWAP C"), // 0x31
    op(1, 4, "SWAP D"), // 0x32
    op(1, 4, "SWAP E"), // 0x33
    op(1, 4, "SWAP H"), // 0x34
    op(1, 4, "SWAP L"), // 0x35
    op(1, 12, "SWAP (HL)"), // 0x36
    op(1, 4, "SWAP A"), // 0x37
    op(1, 4, "SRL B"), // 0x38
    op(1, 4, "SRL C"), // 0x39
    op(1, 4, "SRL D"), // 0x3A
    op(1, 4, "SRL E"), // 0x3B
    op(1, 4, "SRL H"), // 0x3C
    op(1, 4, "SRL L"), // 0x3D
    op(1, 12, "SRL (HL)"), // 0x3E
    op(1, 4, "SRL A"), // 0x3F
    op(1, 4, "BIT 0,B"), // 0x40
    op(1, 4, "BIT 0,C"), // 0x41
    op(1, 4, "BIT 0,D"), // 0x42
    op(1, 4, "BIT 0,E"), // 0x43
    op(1, 4, "BIT 0,H"), // 0x44
    op(1, 4, "BIT 0,L"), // 0x45
    op(1, 8, "BIT 0,(HL)"), // 0x46
    op(1, 4, "BIT 0,A"), // 0x47
    op(1, 4, "BIT 1,B"), // 0x48
    op(1, 4, "BIT 1,C"), // 0x49
    op(1, 4, "BIT 1,D"), // 0x4A
    op(1, 4, "BIT 1,E"), // 0x4B
    op(1, 4, "BIT 1,H"), // 0x4C
    op(1, 4, "BIT 1,L"), // 0x4D
    op(1, 8, "BIT 1,(HL)"), // 0x4E
    op(1, 4, "BIT 1,A"), // 0x4F
    op(1, 4, "BIT 2,B"), // 0x50
    op(1, 4, "BIT 2,C"), // 0x51
    op(1, 4, "BIT 2,D"), // 0x52
    op(1, 4, "BIT 2,E"), // 0x53
    op(1, 4, "BIT 2,H"), // 0x54
    op(1, 4, "BIT 2,L"), // 0x55
    op(1, 8, "BIT 2,(HL)"), // 0x56
    op(1, 4, "BIT 2,A"), // 0x57
    op(1, 4, "BIT 3,B"), // 0x58
    op(1, 4, "BIT 3,C"), // 0x59
    op(1, 4, "BIT 3,D"), // 0x5A
    op(1, 4, "BIT 3,E"), // 0x5B
    op(1, 4, "BIT 3,H"), // 0x5C
    op(1, 4, "BIT 3,L"), // 0x5D
    op(1, 8, "BIT 3,(HL)"), // 0x5E
    op(1, 4, "BIT 3,A"), // 0x5F
    op(1, 4, "BIT 4,B"), // 0x60
    op(1, 4, "BIT 4,C"), // 0x61
    op(1, 4, "BIT 4,D"), // 0x62
    op(1, 4, "BIT 4,E"), // 0x63
    op(1, 4, "BIT 4,H"), // 0x64
    op(1, 4, "BIT 4,L"), // 0x65
    op(1, 8, "BIT 4,(HL)"), // 0x66
    op(1, 4, "BIT 4,A"), // 0x67
    op(1, 4, "BIT 5,B"), // 0x68
    op(1, 4, "BIT 5,C"), // 0x69
    op(1, 4, "BIT 5,D"), // 0x6A
    op(1, 4, "BIT 5,E"), // 0x6B
    op(1, 4, "BIT 5,H"), // 0x6C
    op(1, 4, "BIT 5,L"), // 0x6D
    op(1, 8, "BIT 5,(HL)"), // 0x6E
    op(1, 4, "BIT 5,A"), // 0x6F
    op(1, 4, "BIT 6,B"), // 0x70
    op(1, 4, "BIT 6,C"), // 0x71
    op(1, 4, "BIT 6,D"), // 0x72
    op(1, 4, "BIT 6,E"), // 0x73
    op(1, 4, "BIT 6,H"), // 0x74
    op(1, 4, "BIT 6,L"), // 0x75
    op(1, 8, "BIT 6,(HL)"), // 0x76
    op(1, 4, "BIT 6,A"), // 0x77
    op(1, 4, "BIT 7,B"), // 0x78
    op(1, 4, "BIT 7,C"), // 0x79
    op(1, 4, "BIT 7,D"), // 0x7A
    op(1, 4, "BIT 7,E"), // 0x7B
    op(1, 4, "BIT 7,H"), // 0x7C
    op(1, 4, "BIT 7,L"), // 0x7D
    op(1, 8, "BIT 7,(HL)"), // 0x7E
    op(1, 4, "BIT 7,A"), // 0x7F
    op(1, 4, "RES 0,B"), // 0x80
    op(1, 4, "RES 0,C"), // 0x81
    op(1, 4, "RES 0,D"), // 0x82
    op(1, 4, "RES 0,E"), // 0x83
    op(1, 4, "RES 0,H"), // 0x84
    op(1, 4, "RES 0,L"), // 0x85
    op(1, 12, "RES 0,(HL)"), // 0x86
    op(1, 4, "RES 0,A"), // 0x87
    op(1, 4, "RES 1,B"), // 0x88
    op(1, 4, "RES 1,C"), // 0x89
    op(1, 4, "RES 1,D"), // 0x8A
    op(1, 4, "RES 1,E"), // 0x8B
    op(1, 4, "RES 1,H"), // 0x8C
    op(1, 4, "RES 1,L"), // 0x8D
    op(1, 12, "RES 1,(HL)"), // 0x8E
    op(1, 4, "RES 1,A"), // 0x8F
    op(1, 4, "RES 2,B"), // 0x90
    op(1, 4, "RES 2,C"), // 0x91
    op(1, 4, "RES 2,D"), // 0x92
    op(1, 4, "RES 2,E"), // 0x93
    op(1, 4, "RES 2,H"), // 0x94
    op(1, 4, "RES 2,L"), // 0x95
    op(1, 12, "RES 2,(HL)"), // 0x96
    op(1, 4, "RES 2,A"), // 0x97
    op(1, 4, "RES 3,B"), // 0x98
    op(1, 4, "RES 3,C"), // 0x99
    op(1, 4, "RES 3,D"), // 0x9A
    op(1, 4, "RES 3,E"), // 0x9B
    op(1, 4, "RES 3,H"), // 0x9C
    op(1, 4, "RES 3,L"), // 0x9D
    op(1, 12, "RES 3,(HL)"), // 0x9E
    op(1, 4, "RES 3,A"), // 0x9F
    op(1, 4, "RES 4,B"), // 0xA0
    op(1, 4, "RES 4,C"), // 0xA1
    op(1, 4, "RES 4,D"), // 0xA2
    op(1, 4, "RES 4,E"), // 0xA3
    op(1, 4, "RES 4,H"), // 0xA4
    op(1, 4, "RES 4,L"), // 0xA5
    op(1, 12, "RES 4,(HL)"), // 0xA6
    op(1, 4, "RES 4,A"), // 0xA7
    op(1, 4, "RES 5,B"), // 0xA8
    op(1, 4, "RES 5,C"), // 0xA9
    op(1, 4, "RES 5,D"), // 0xAA
    op(1, 4, "RES 5,E"), // 0xAB
    op(1, 4, "RES 5,H"), // 0xAC
    op(1, 4, "RES 5,L"), // 0xAD
    op(1, 12, "RES 5,(HL)"), // 0xAE
    op(1, 4, "RES 5,A"), // 0xAF
    op(1, 4, "RES 6,B"), // 0xB0
    op(1, 4, "RES 6,C"), // 0xB1
    op(1, 4, "RES 6,D"), // 0xB2
    op(1, 4, "RES 6,E"), // 0xB3
    op(1, 4, "RES 6,H"), // 0xB4
    op(1, 4, "RES 6,L"), // 0xB5
    op(1, 12, "RES 6,(HL)"), // 0xB6
    op(1, 4, "RES 6,A"), // 0xB7
    op(1, 4, "RES 7,B"), // 0xB8
    op(1, 4, "RES 7,C"), // 0xB9
    op(1, 4, "RES 7,D"), // 0xBA
    op(1, 4, "RES 7,E"), // 0xBB
    op(1, 4, "RES 7,H"), // 0xBC
    op(1, 4, "RES 7,L"), // 0xBD
    op(1, 12, "RES 7,(HL)"), // 0xBE
    op(1, 4, "RES 7,A"), // 0xBF
    op(1, 4, "SET 0,B"), // 0xC0
    op(1, 4, "SET 0,C"), // 0xC1
    op(1, 4, "SET 0,D"), // 0xC2
    op(1, 4, "SET 0,E"), // 0xC3
    op(1, 4, "SET 0,H"), // 0xC4
    op(1, 4, "SET 0,L"), // 0xC5
    op(1, 12, "SET 0,(HL)"), // 0xC6
    op(1, 4, "SET 0,A"), // 0xC7
    op(1, 4, "SET 1,B"), // 0xC8
    op(1, 4, "SET 1,C"), // 0xC9
    op(1, 4, "SET 1,D"), // 0xCA
    op(1, 4, "SET 1,E"), // 0xCB
    op(1, 4, "SET 1,H"), // 0xCC
    op(1, 4, "SET 1,L"), // 0xCD
    op(1, 12, "SET 1,(HL)"), // 0xCE
    op(1, 4, "SET 1,A"), // 0xCF
    op(1, 4, "SET 2,B"), // 0xD0
    op(1, 4, "SET 2,C"), // 0xD1
    op(1, 4, "SET 2,D"), // 0xD2
    op(1, 4, "SET 2,E"), // 0xD3
    op(1, 4, "SET 2,H"), // 0xD4
    op(1, 4, "SET 2,L"), // 0xD5
    op(1, 12, "SET 2,(HL)"), // 0xD6
    op(1, 4, "SET 2,A"), // 0xD7
    op(1, 4, "SET 3,B"), // 0xD8
    op(1, 4, "SET 3,C"), // 0xD9
    op(1, 4, "SET 3,D"), // 0xDA
    op(1, 4, "SET 3,E"), // 0xDB
    op(1, 4, "SET 3,H"), // 0xDC
    op(1, 4, "SET 3,L"), // 0xDD
    op(1, 12, "SET 3,(HL)"), // 0xDE
    op(1, 4, "SET 3,A"), // 0xDF
    op(1, 4, "SET 4,B"), // 0xE0
    op(1, 4, "SET 4,C"), // 0xE1
    op(1, 4, "SET 4,D"), // 0xE2
    op(1, 4, "SET 4,E"), // 0xE3
    op(1, 4, "SET 4,H"), // 0xE4
    op(1, 4, "SET 4,L"), // 0xE5
    op(1, 12, "SET 4,(HL)"), // 0xE6
    op(1, 4, "SET 4,A"), // 0xE7
    op(1, 4, "SET 5,B"), // 0xE8
    op(1, 4, "SET 5,C"), // 0xE9
    op(1, 4, "SET 5,D"), // 0xEA
    op(1, 4, "SET 5,E"), // 0xEB
    op(1, 4, "SET 5,H"), // 0xEC
    op(1, 4, "SET 5,L"), // 0xED
    op(1, 12, "SET 5,(HL)"), // 0xEE
    op(1, 4, "SET 5,A"), // 0xEF
    op(1, 4, "SET 6,B"), // 0xF0
    op(1, 4, "SET 6,C"), // 0xF1
    op(1, 4, "SET 6,D"), // 0xF2
    op(1, 4, "SET 6,E"), // 0xF3
    op(1, 4, "SET 6,H"), // 0xF4
    op(1, 4, "SET 6,L"), // 0xF5
    op(1, 12, "SET 6,(HL)"), // 0xF6
    op(1, 4, "SET 6,A"), // 0xF7
    op(1, 4, "SET 7,B"), // 0xF8
    op(1, 4, "SET 7,C"), // 0xF9
    op(1, 4, "SET 7,D"), // 0xFA
    op(1, 4, "SET 7,E"), // 0xFB
    op(1, 4, "SET 7,H"), // 0xFC
    op(1, 4, "SET 7,L"), // 0xFD
    op(1, 12, "SET 7,(HL)"), // 0xFE
    op(1, 4, "SET 7,A"), // 0xFF
];
