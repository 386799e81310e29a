mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu, Instruction};

impl Cpu {
    /// Execute a decoded instruction. PC already points past it.
    ///
    /// Returns the extra cycles of a taken conditional branch, call or
    /// return; every other instruction costs exactly its table entry and
    /// returns 0.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, instr: &Instruction) -> u32 {
        if instr.prefixed {
            self.exec_cb(bus, instr.opcode);
            return 0;
        }

        let opcode = instr.opcode;
        match opcode {
            // JR cc, r8
            0x20 | 0x28 | 0x30 | 0x38 => return self.exec_jr_cc(instr),

            // JP cc, a16
            0xC2 | 0xCA | 0xD2 | 0xDA => return self.exec_jp_cc(instr),

            // CALL cc, a16
            0xC4 | 0xCC | 0xD4 | 0xDC => return self.exec_call_cc(bus, instr),

            // RET cc
            0xC0 | 0xC8 | 0xD0 | 0xD8 => return self.exec_ret_cc(bus, instr),

            // 0x00: NOP
            0x00 => {}

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(instr),

            // Rotate A instructions (unprefixed).
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            // 16-bit INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(bus, instr)
            }

            // HALT sits in the middle of the LD r, r block.
            0x76 => self.exec_halt(bus),

            // 8-bit register/memory transfers: LD r1, r2
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode),

            // LD (BC/DE/HL±), A
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(bus, opcode),

            // LD A, (BC/DE/HL±)
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(bus, opcode),

            // LD (a16), SP
            0x08 => self.exec_ld_a16_sp(bus, instr),

            // STOP
            0x10 => self.exec_stop(),

            // LDH (a8),A / LDH A,(a8)
            0xE0 | 0xF0 => self.exec_ldh_a8(bus, instr),

            // LD (FF00+C),A / LD A,(FF00+C)
            0xE2 | 0xF2 => self.exec_ldh_c(bus, opcode),

            // LD (a16),A / LD A,(a16)
            0xEA | 0xFA => self.exec_ld_a16_a(bus, instr),

            // ADD SP, r8
            0xE8 => self.exec_add_sp_r8(instr),

            // LD HL, SP+r8
            0xF8 => self.exec_ld_hl_sp_r8(instr),

            // LD SP, HL
            0xF9 => self.exec_ld_sp_hl(),

            // JR r8
            0x18 => self.jump_relative(instr.offset()),

            // ADD HL, rr (16-bit)
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            0x27 => self.alu_daa(),
            0x2F => self.exec_cpl(),
            0x37 => self.exec_scf(),
            0x3F => self.exec_ccf(),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP r
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode),

            // ADD/ADC/SUB/SBC/AND/XOR/OR/CP d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => self.exec_alu_imm(instr),

            // INC r / DEC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => {
                self.exec_inc8_reg(bus, opcode)
            }
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => {
                self.exec_dec8_reg(bus, opcode)
            }

            0xF3 => self.exec_di(),
            0xFB => self.exec_ei(),

            // JP a16 / JP (HL)
            0xC3 => self.regs.pc = instr.imm16(),
            0xE9 => self.regs.pc = self.regs.hl(),

            // CALL a16
            0xCD => self.call(bus, instr.imm16()),

            // PUSH rr / POP rr
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(bus, opcode),
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(bus, opcode),

            // RET / RETI
            0xC9 => self.ret(bus),
            0xD9 => self.exec_reti(bus),

            // RST nn
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            // Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
            _ => self.exec_invalid(instr),
        }

        0
    }

    /// Undefined opcodes are inert: their 1-byte length has already been
    /// skipped and they cost 0 cycles.
    fn exec_invalid(&mut self, instr: &Instruction) {
        debug_assert!(!instr.desc.is_defined());
        log::warn!(
            "GB CPU: undefined opcode 0x{opcode:02X} at PC=0x{pc:04X} treated as no-op (SP=0x{sp:04X} AF=0x{af:04X})",
            opcode = instr.opcode,
            pc = instr.address,
            sp = self.regs.sp,
            af = self.regs.af(),
        );
    }
}
