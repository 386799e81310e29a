use super::{Bus, Cpu, Instruction};
use crate::interrupt::{InterruptFlags, IF_ADDR};

/// Cost reported for one idle step while halted or stopped.
const IDLE_CYCLES: u32 = 4;

impl Cpu {
    /// Execute a single instruction (or interrupt dispatch, or idle step)
    /// and return the number of T-cycles taken.
    ///
    /// PC is moved past the instruction before its semantics run, so
    /// relative jumps and pushed return addresses see the next
    /// instruction's address.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        // STOP ends only on a joypad request. The request is left in IF so
        // the handler still runs if IME is set.
        if self.stopped {
            let iflags = InterruptFlags::from_bits_truncate(bus.read8(IF_ADDR));
            if !iflags.contains(InterruptFlags::JOYPAD) {
                return IDLE_CYCLES;
            }
            self.stopped = false;
        }

        if let Some(cycles) = self.handle_interrupts(bus) {
            return cycles;
        }

        if self.halted {
            return IDLE_CYCLES;
        }

        let instr = Instruction::decode(bus, self.regs.pc, self.halt_bug);
        let mut advance = instr.size_bytes();
        if self.halt_bug {
            self.halt_bug = false;
            advance -= 1;
        }
        self.regs.pc = self.regs.pc.wrapping_add(advance);

        if self.trace {
            log::trace!(
                "GB CPU 0x{:04X}: {} (AF=0x{:04X} BC=0x{:04X} DE=0x{:04X} HL=0x{:04X} SP=0x{:04X})",
                instr.address,
                instr,
                self.regs.af(),
                self.regs.bc(),
                self.regs.de(),
                self.regs.hl(),
                self.regs.sp,
            );
        }

        let taken = self.exec_opcode(bus, &instr);
        self.last_instruction = Some(instr);
        self.apply_ime_delay();

        instr.base_cycles() + taken
    }
}
