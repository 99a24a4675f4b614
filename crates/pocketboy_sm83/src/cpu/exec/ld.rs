use anyhow::Result;

use crate::cpu::decode::Operand;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// The polymorphic LD: resolve source, then destination.
    ///
    /// `LD rr,d16` is the single 16-bit pairing the decoder produces; every
    /// other combination moves one byte.
    pub(super) fn exec_ld<B: Bus>(
        &mut self,
        bus: &mut B,
        dst: Operand,
        src: Operand,
    ) -> Result<()> {
        if let (Operand::Reg16(pair), Operand::D16) = (dst, src) {
            let value = self.fetch16(bus);
            self.set_reg16(pair, value);
            return Ok(());
        }

        let value = self.read_operand8(bus, src)?;
        self.write_operand8(bus, dst, value)
    }

    /// LD (HL±),A: store A at HL, then step HL by `step` (wrapping).
    pub(super) fn exec_ld_hl_step_a<B: Bus>(&mut self, bus: &mut B, step: i16) {
        let hl = self.regs.hl();
        bus.write8(hl, self.regs.a);
        self.regs.set_hl(hl.wrapping_add_signed(step));
    }

    /// LD A,(HL±): load A from HL, then step HL by `step` (wrapping).
    pub(super) fn exec_ld_a_hl_step<B: Bus>(&mut self, bus: &mut B, step: i16) {
        let hl = self.regs.hl();
        self.regs.a = bus.read8(hl);
        self.regs.set_hl(hl.wrapping_add_signed(step));
    }

    /// LD (a16),SP: low byte at the address, high byte at address+1.
    pub(super) fn exec_ld_mem_d16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let sp = self.regs.sp;
        bus.write8(addr, sp as u8);
        bus.write8(addr.wrapping_add(1), (sp >> 8) as u8);
    }
}
