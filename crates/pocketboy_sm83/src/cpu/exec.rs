mod alu;
mod control;
mod incdec;
mod ld;
mod shift;
mod stack;
mod system;

use anyhow::Result;

use super::decode::Instruction;
use super::{Bus, Cpu};

impl Cpu {
    /// Execute one decoded instruction.
    ///
    /// Returns `Some(pc)` when a taken jump/call decided the next PC;
    /// `None` leaves PC wherever operand fetching advanced it. RET and
    /// RETI write PC directly. An operand combination the decoder can
    /// never produce is a hard error.
    pub fn execute<B: Bus>(
        &mut self,
        bus: &mut B,
        instruction: Instruction,
    ) -> Result<Option<u16>> {
        match instruction {
            Instruction::Add(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_add(value, false);
            }
            Instruction::Adc(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_add(value, true);
            }
            Instruction::Sub(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_sub(value, false);
            }
            Instruction::Sbc(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_sub(value, true);
            }
            Instruction::And(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_and(value);
            }
            Instruction::Or(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_or(value);
            }
            Instruction::Xor(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_xor(value);
            }
            Instruction::Cp(operand) => {
                let value = self.read_operand8(bus, operand)?;
                self.alu_cp(value);
            }
            Instruction::AddHl(pair) => {
                let value = self.reg16(pair);
                self.alu_add16_hl(value);
            }

            Instruction::Inc(operand) => self.exec_inc(bus, operand)?,
            Instruction::Dec(operand) => self.exec_dec(bus, operand)?,

            Instruction::Daa => self.alu_daa(),
            Instruction::Cpl => self.exec_cpl(),
            Instruction::Scf => self.exec_scf(),
            Instruction::Ccf => self.exec_ccf(),

            Instruction::Rra => self.exec_rra(),
            Instruction::Rla => self.exec_rla(),
            Instruction::Rrca => self.exec_rrca(),
            Instruction::Rlca => self.exec_rlca(),

            Instruction::Rr(operand) => self.exec_rr(bus, operand)?,
            Instruction::Rl(operand) => self.exec_rl(bus, operand)?,
            Instruction::Rrc(operand) => self.exec_rrc(bus, operand)?,
            Instruction::Rlc(operand) => self.exec_rlc(bus, operand)?,
            Instruction::Srl(operand) => self.exec_srl(bus, operand)?,
            Instruction::Sra(operand) => self.exec_sra(bus, operand)?,
            Instruction::Sla(operand) => self.exec_sla(bus, operand)?,
            Instruction::Swap(operand) => self.exec_swap(bus, operand)?,

            Instruction::Bit(index, operand) => self.exec_bit(bus, index, operand)?,
            Instruction::Res(index, operand) => self.exec_res(bus, index, operand)?,
            Instruction::Set(index, operand) => self.exec_set(bus, index, operand)?,

            Instruction::Nop => {}

            Instruction::Jp(condition) => return Ok(self.exec_jp(bus, condition)),
            Instruction::JpHl => return Ok(Some(self.regs.hl())),
            Instruction::Jr(condition) => return Ok(self.exec_jr(bus, condition)),
            Instruction::Call(condition) => return Ok(self.exec_call(bus, condition)),
            Instruction::Ret(condition) => self.exec_ret(bus, condition),
            Instruction::RetI => self.exec_reti(bus),
            Instruction::Rst(address) => return Ok(Some(self.exec_rst(bus, address))),

            Instruction::Ld { dst, src } => self.exec_ld(bus, dst, src)?,
            Instruction::LdHlIncA => self.exec_ld_hl_step_a(bus, 1),
            Instruction::LdHlDecA => self.exec_ld_hl_step_a(bus, -1),
            Instruction::LdAHlInc => self.exec_ld_a_hl_step(bus, 1),
            Instruction::LdAHlDec => self.exec_ld_a_hl_step(bus, -1),
            Instruction::LdSpHl => self.regs.sp = self.regs.hl(),
            Instruction::LdMemD16Sp => self.exec_ld_mem_d16_sp(bus),
            Instruction::LdHlSpOffset => self.exec_ld_hl_sp_offset(bus),
            Instruction::AddSp => self.exec_add_sp(bus),

            Instruction::Push(pair) => {
                let value = self.reg16(pair);
                self.push_u16(bus, value);
            }
            Instruction::Pop(pair) => {
                let value = self.pop_u16(bus);
                // POP AF goes through set_af, which zeroes F's low nibble.
                self.set_reg16(pair, value);
            }

            Instruction::Halt => self.halted = true,
            Instruction::Stop => self.exec_stop(bus),
            Instruction::Di => self.exec_di(),
            Instruction::Ei => self.exec_ei(),
        }

        Ok(None)
    }
}
