macro_rules! audio_registers {
    ($($addr:literal => $field:ident),* $(,)?) => {
        /// Sound registers (NR10..NR52).
        ///
        /// Audio synthesis is not modelled: these are plain storage so
        /// software can read back what it wrote. The wave pattern RAM lives
        /// next to them in `HardwareRegisters`.
        #[derive(Clone, Debug, Default, PartialEq, Eq)]
        pub struct AudioRegisters {
            $(pub $field: u8,)*
        }

        impl AudioRegisters {
            /// `None` for addresses in the sound range with no register
            /// behind them (0xFF15, 0xFF1F, 0xFF27..=0xFF2F).
            pub(super) fn read(&self, addr: u16) -> Option<u8> {
                match addr {
                    $($addr => Some(self.$field),)*
                    _ => None,
                }
            }

            pub(super) fn register_mut(&mut self, addr: u16) -> Option<&mut u8> {
                match addr {
                    $($addr => Some(&mut self.$field),)*
                    _ => None,
                }
            }
        }
    };
}

audio_registers! {
    0xFF10 => nr10,
    0xFF11 => nr11,
    0xFF12 => nr12,
    0xFF13 => nr13,
    0xFF14 => nr14,
    0xFF16 => nr21,
    0xFF17 => nr22,
    0xFF18 => nr23,
    0xFF19 => nr24,
    0xFF1A => nr30,
    0xFF1B => nr31,
    0xFF1C => nr32,
    0xFF1D => nr33,
    0xFF1E => nr34,
    0xFF20 => nr41,
    0xFF21 => nr42,
    0xFF22 => nr43,
    0xFF23 => nr44,
    0xFF24 => nr50,
    0xFF25 => nr51,
    0xFF26 => nr52,
}
