use anyhow::Result;

use crate::cpu::decode::{BitIndex, Operand};
use crate::cpu::{Bus, Cpu, Flag, Flags};

/// Rotates, shifts, and single-bit operations.
///
/// The accumulator-only rotates (RRA/RLA/RRCA/RLCA) touch nothing but the
/// carry flag; the CB-table register forms set Z from the result. The
/// asymmetry matches hardware and is intentional.
impl Cpu {
    pub(super) fn exec_rra(&mut self) {
        let a = self.regs.a;
        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
        self.regs.a = (a >> 1) | carry_in;
        self.set_flag(Flag::C, a & 0x01 != 0);
    }

    pub(super) fn exec_rla(&mut self) {
        let a = self.regs.a;
        let carry_in = u8::from(self.get_flag(Flag::C));
        self.regs.a = (a << 1) | carry_in;
        self.set_flag(Flag::C, a & 0x80 != 0);
    }

    pub(super) fn exec_rrca(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_right(1);
        self.set_flag(Flag::C, a & 0x01 != 0);
    }

    pub(super) fn exec_rlca(&mut self) {
        let a = self.regs.a;
        self.regs.a = a.rotate_left(1);
        self.set_flag(Flag::C, a & 0x80 != 0);
    }

    pub(super) fn exec_rr<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let carry_in = if self.get_flag(Flag::C) { 0x80 } else { 0 };
        let result = (value >> 1) | carry_in;
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x01 != 0);
        Ok(())
    }

    pub(super) fn exec_rl<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let carry_in = u8::from(self.get_flag(Flag::C));
        let result = (value << 1) | carry_in;
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x80 != 0);
        Ok(())
    }

    pub(super) fn exec_rrc<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = value.rotate_right(1);
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x01 != 0);
        Ok(())
    }

    pub(super) fn exec_rlc<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = value.rotate_left(1);
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x80 != 0);
        Ok(())
    }

    /// Logical shift right: bit 0 into carry, zero into bit 7.
    pub(super) fn exec_srl<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = value >> 1;
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x01 != 0);
        Ok(())
    }

    /// Arithmetic shift right: bit 0 into carry, bit 7 copied.
    pub(super) fn exec_sra<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = (value >> 1) | (value & 0x80);
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x01 != 0);
        Ok(())
    }

    /// Shift left: bit 7 into carry, zero into bit 0.
    pub(super) fn exec_sla<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = value << 1;
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, value & 0x80 != 0);
        Ok(())
    }

    pub(super) fn exec_swap<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let result = (value << 4) | (value >> 4);
        self.write_operand8(bus, operand, result)?;
        self.set_rotate_flags(result, false);
        Ok(())
    }

    /// BIT b,r: Z from the inverted bit test; N=0, H=1, C preserved.
    pub(super) fn exec_bit<B: Bus>(
        &mut self,
        bus: &mut B,
        index: BitIndex,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        let mut flags = self.flags();
        flags.zero = value & (1 << index.get()) == 0;
        flags.subtract = false;
        flags.half_carry = true;
        self.set_flags(flags);
        Ok(())
    }

    /// RES b,r: clear one bit, no flag effect.
    pub(super) fn exec_res<B: Bus>(
        &mut self,
        bus: &mut B,
        index: BitIndex,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        self.write_operand8(bus, operand, value & !(1 << index.get()))
    }

    /// SET b,r: set one bit, no flag effect.
    pub(super) fn exec_set<B: Bus>(
        &mut self,
        bus: &mut B,
        index: BitIndex,
        operand: Operand,
    ) -> Result<()> {
        let value = self.read_operand8(bus, operand)?;
        self.write_operand8(bus, operand, value | (1 << index.get()))
    }

    #[inline]
    fn set_rotate_flags(&mut self, result: u8, carry: bool) {
        self.set_flags(Flags {
            zero: result == 0,
            subtract: false,
            half_carry: false,
            carry,
        });
    }
}
