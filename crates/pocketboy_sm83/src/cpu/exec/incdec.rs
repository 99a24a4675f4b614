use anyhow::Result;

use crate::cpu::decode::Operand;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// INC: 16-bit targets wrap and leave all flags alone; 8-bit targets
    /// (registers and (HL)) update Z/N/H and preserve carry.
    pub(super) fn exec_inc<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        match operand {
            Operand::Reg16(pair) => {
                let value = self.reg16(pair).wrapping_add(1);
                self.set_reg16(pair, value);
                Ok(())
            }
            _ => {
                let value = self.read_operand8(bus, operand)?;
                let result = self.alu_inc8(value);
                self.write_operand8(bus, operand, result)
            }
        }
    }

    /// DEC: same flag split as INC.
    pub(super) fn exec_dec<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        match operand {
            Operand::Reg16(pair) => {
                let value = self.reg16(pair).wrapping_sub(1);
                self.set_reg16(pair, value);
                Ok(())
            }
            _ => {
                let value = self.read_operand8(bus, operand)?;
                let result = self.alu_dec8(value);
                self.write_operand8(bus, operand, result)
            }
        }
    }
}
