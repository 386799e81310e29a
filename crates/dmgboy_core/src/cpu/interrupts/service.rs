use super::super::{Bus, Cpu};
use super::INTERRUPT_DISPATCH_CYCLES;
use crate::interrupt::{InterruptFlags, IE_ADDR, IF_ADDR};

impl Cpu {
    /// Requested-and-enabled interrupt lines.
    #[inline]
    pub(in crate::cpu) fn pending_interrupts<B: Bus>(&self, bus: &mut B) -> InterruptFlags {
        let ie = bus.read8(IE_ADDR);
        let iflags = bus.read8(IF_ADDR);
        InterruptFlags::from_bits_truncate(ie & iflags)
    }

    /// Wake from HALT/STOP and service the highest-priority interrupt when
    /// IME allows it.
    ///
    /// Returns `Some(cycles)` if an interrupt was taken. A pending interrupt
    /// always ends HALT, even when IME is clear and nothing is serviced.
    pub(in crate::cpu) fn handle_interrupts<B: Bus>(&mut self, bus: &mut B) -> Option<u32> {
        let pending = self.pending_interrupts(bus);
        let line = pending.highest_priority()?;

        self.halted = false;
        if !self.ime {
            return None;
        }

        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;

        let iflags = bus.read8(IF_ADDR);
        bus.write8(IF_ADDR, iflags & !line.bits());

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = line.vector();

        log::debug!(
            "GB CPU interrupt: line={:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
            line,
            line.vector(),
            pc,
            self.regs.sp,
            iflags & 0x1F,
            bus.read8(IE_ADDR),
        );

        Some(INTERRUPT_DISPATCH_CYCLES)
    }
}
