use super::super::Cpu;

impl Cpu {
    /// Move an EI request one instruction boundary closer to setting IME.
    ///
    /// Called after every executed instruction. EI arms `pending`; the end
    /// of EI itself turns that into `delay`; the end of the following
    /// instruction sets IME.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        match (self.ime_enable_delay, self.ime_enable_pending) {
            (true, _) => {
                self.ime_enable_delay = false;
                self.ime = true;
            }
            (false, true) => {
                self.ime_enable_pending = false;
                self.ime_enable_delay = true;
            }
            (false, false) => {}
        }
    }
}
