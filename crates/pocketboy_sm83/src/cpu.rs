pub mod alu;
mod bus;
pub mod decode;
mod exec;
mod helpers;
mod interrupts;
mod regs;
mod step;


pub use bus::{Bus, FlatBus, IE_ADDR, IF_ADDR};
pub use interrupts::Interrupt;
pub use regs::{Flag, Flags, Registers};

/// Sharp SM83 CPU core (the Game Boy's LR35902-style processor).
///
/// The core owns the register file and the interrupt/halt latches; memory
/// and IO live behind the [`Bus`] trait. Driving code calls [`Cpu::step`]
/// once per instruction (or interrupt dispatch, or halted no-op).
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Master interrupt enable (IME). Cleared on interrupt entry and DI,
    /// set by RETI immediately and by EI with one instruction of latency.
    pub ime: bool,
    /// HALT/STOP latch. While set, `step` idles until an interrupt line
    /// becomes pending.
    pub halted: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// Create a CPU in the skip-boot-ROM state: SP at 0xFFFE, PC at 0,
    /// flags clear, IME off.
    pub fn new() -> Self {
        let mut regs = Registers::default();
        regs.sp = 0xFFFE;
        Self {
            regs,
            ime: false,
            halted: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
        }
    }

    /// Reset the CPU to its initial state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn get_flag(&self, flag: Flag) -> bool {
        let bit = flag as u8;
        (self.regs.f & (1 << bit)) != 0
    }

    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let bit = flag as u8;
        if value {
            self.regs.f |= 1 << bit;
        } else {
            self.regs.f &= !(1 << bit);
        }
    }

    /// Decode the F register into a [`Flags`] view.
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_byte(self.regs.f)
    }

    /// Overwrite the F register from a [`Flags`] view.
    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.regs.f = flags.to_byte();
    }
}
