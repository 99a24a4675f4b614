use anyhow::{anyhow, Result};

use super::decode;
use super::{Bus, Cpu};

impl Cpu {
    /// Run one step: exactly one interrupt dispatch, one halted no-op, or
    /// one fetched-and-executed instruction.
    ///
    /// The only error paths are fatal: an undecodable opcode, or an
    /// internal invariant violation. Execution cannot meaningfully
    /// continue after either.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> Result<()> {
        // Interrupts are considered before any fetch.
        if self.ime && bus.any_interrupt_pending() {
            self.halted = false;
            return self.service_interrupt(bus);
        }

        if self.halted {
            if bus.any_interrupt_pending() {
                // A pending-but-masked interrupt wakes the CPU without
                // being dispatched; execution resumes below.
                self.halted = false;
            } else {
                return Ok(());
            }
        }

        let first = self.fetch8(bus);
        let (byte, prefixed) = if first == 0xCB {
            (self.fetch8(bus), true)
        } else {
            (first, false)
        };

        let instruction = match decode::decode(byte, prefixed) {
            Some(instruction) => instruction,
            None => {
                let length = if prefixed { 2 } else { 1 };
                let opcode_addr = self.regs.pc.wrapping_sub(length);
                log::error!(
                    "SM83 illegal opcode {byte:#04X} (prefixed={prefixed}) at PC={pc:#06X} \
                     (SP={sp:#06X} AF={af:#06X} BC={bc:#06X} DE={de:#06X} HL={hl:#06X})",
                    pc = opcode_addr,
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                return Err(anyhow!(
                    "illegal opcode {byte:#04X} at {opcode_addr:#06X}"
                ));
            }
        };

        if let Some(pc) = self.execute(bus, instruction)? {
            self.regs.pc = pc;
        }

        // EI commits here, after the instruction body, so it takes effect
        // only once the instruction *following* EI has completed.
        self.apply_ime_delay();
        Ok(())
    }
}
