mod alu;
mod bus;
mod cb;
mod decode;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod opcodes;
mod regs;
mod step;

pub use alu::{half_borrow_sub8, half_carry_add16, half_carry_add8};
pub use bus::Bus;
pub use decode::Instruction;
pub use interrupts::INTERRUPT_DISPATCH_CYCLES;
pub use opcodes::{
    OpcodeDesc, CB_OPCODES, CB_PREFIX, INVALID_MNEMONIC, OPCODES, TAKEN_CALL_RET_CYCLES,
    TAKEN_JUMP_CYCLES,
};
pub use regs::{Flag, Reg8, Registers};

/// The LR35902 instruction engine.
///
/// Owns the register file and the interrupt/low-power state. Memory is
/// reached only through a [`Bus`] passed to each `step`.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    pub halted: bool,
    stopped: bool,
    /// Set when HALT executes with IME clear and an interrupt already
    /// pending: the next opcode byte is read twice.
    halt_bug: bool,
    /// EI was executed in the current instruction.
    ime_enable_pending: bool,
    /// EI was executed in the previous instruction; IME turns on after the
    /// current one completes.
    ime_enable_delay: bool,
    trace: bool,
    last_instruction: Option<Instruction>,
}

impl Cpu {
    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        (self.regs.f & flag.mask()) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.regs.f |= flag.mask();
        } else {
            self.regs.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn clear_flags(&mut self) {
        self.regs.f = 0;
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Emit a `trace`-level log line for every executed instruction.
    pub fn set_trace(&mut self, enabled: bool) {
        self.trace = enabled;
    }

    /// The instruction executed by the most recent `step`, if any.
    pub fn last_instruction(&self) -> Option<&Instruction> {
        self.last_instruction.as_ref()
    }

    /// Decode the instruction at PC without executing it.
    pub fn peek_instruction<B: Bus>(&self, bus: &mut B) -> Instruction {
        Instruction::decode(bus, self.regs.pc, self.halt_bug)
    }
}
