use anyhow::{anyhow, Result};

use super::{Bus, Cpu};

/// The five SM83 interrupt sources, in priority order (V-Blank first).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// Bit position in IF/IE.
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Interrupt::VBlank => 0,
            Interrupt::LcdStat => 1,
            Interrupt::Timer => 2,
            Interrupt::Serial => 3,
            Interrupt::Joypad => 4,
        }
    }

    /// Fixed dispatch vector.
    #[inline]
    pub const fn vector(self) -> u16 {
        0x0040 + (self.bit() as u16) * 8
    }

    /// Highest-priority source in a pending mask (lowest set bit).
    ///
    /// Returns `None` for an empty mask, and for masks with only bits 5-7
    /// set — those bits are architecturally unused and a correctly
    /// computed mask (`IE & IF & 0x1F`) never contains them.
    pub fn highest_priority(mask: u8) -> Option<Self> {
        match mask.trailing_zeros() {
            0 => Some(Interrupt::VBlank),
            1 => Some(Interrupt::LcdStat),
            2 => Some(Interrupt::Timer),
            3 => Some(Interrupt::Serial),
            4 => Some(Interrupt::Joypad),
            _ => None,
        }
    }
}

impl Cpu {
    /// Dispatch the highest-priority pending interrupt: clear IME and the
    /// IF bit, push PC, and jump to the vector.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> Result<()> {
        let mask = bus.interrupt_pending_mask();
        let interrupt = Interrupt::highest_priority(mask).ok_or_else(|| {
            anyhow!("interrupt dispatch entered with empty pending mask (IE&IF&0x1F = {mask:#04X})")
        })?;

        self.ime = false;
        bus.set_interrupt_flag_bit(interrupt.bit(), false);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "SM83 interrupt: {:?} vector={:#06X} from pc={:#06X} sp={:#06X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
        );
        Ok(())
    }

    /// Apply the delayed IME change requested by EI.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            // Second step after EI: actually enable IME.
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            // First step after EI: arm the delayed enable.
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }
}
