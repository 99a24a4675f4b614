use anyhow::{bail, Result};

use super::decode::{Operand, Reg16, Reg8};
use super::{Bus, Cpu};

impl Cpu {
    /// Fetch one byte at PC and advance PC.
    #[inline]
    pub(super) fn fetch8<B: Bus>(&mut self, bus: &mut B) -> u8 {
        let value = bus.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    /// Fetch a little-endian 16-bit value at PC and advance PC twice.
    #[inline]
    pub(super) fn fetch16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = self.fetch8(bus) as u16;
        let hi = self.fetch8(bus) as u16;
        (hi << 8) | lo
    }

    /// Push a 16-bit value: high byte at SP-1, low byte at SP-2.
    #[inline]
    pub(super) fn push_u16<B: Bus>(&mut self, bus: &mut B, value: u16) {
        let lo = value as u8;
        let hi = (value >> 8) as u8;
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop a 16-bit value: low byte at SP, high byte at SP+1.
    #[inline]
    pub(super) fn pop_u16<B: Bus>(&mut self, bus: &mut B) -> u16 {
        let lo = bus.read8(self.regs.sp) as u16;
        let hi = bus.read8(self.regs.sp.wrapping_add(1)) as u16;
        self.regs.sp = self.regs.sp.wrapping_add(2);
        (hi << 8) | lo
    }

    #[inline]
    pub(super) fn reg8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::A => self.regs.a,
            Reg8::B => self.regs.b,
            Reg8::C => self.regs.c,
            Reg8::D => self.regs.d,
            Reg8::E => self.regs.e,
            Reg8::H => self.regs.h,
            Reg8::L => self.regs.l,
        }
    }

    #[inline]
    pub(super) fn set_reg8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::A => self.regs.a = value,
            Reg8::B => self.regs.b = value,
            Reg8::C => self.regs.c = value,
            Reg8::D => self.regs.d = value,
            Reg8::E => self.regs.e = value,
            Reg8::H => self.regs.h = value,
            Reg8::L => self.regs.l = value,
        }
    }

    #[inline]
    pub(super) fn reg16(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.regs.af(),
            Reg16::BC => self.regs.bc(),
            Reg16::DE => self.regs.de(),
            Reg16::HL => self.regs.hl(),
            Reg16::SP => self.regs.sp,
        }
    }

    #[inline]
    pub(super) fn set_reg16(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::AF => self.regs.set_af(value),
            Reg16::BC => self.regs.set_bc(value),
            Reg16::DE => self.regs.set_de(value),
            Reg16::HL => self.regs.set_hl(value),
            Reg16::SP => self.regs.sp = value,
        }
    }

    /// Resolve an 8-bit operand to its value.
    ///
    /// Immediate and immediate-addressed modes fetch their bytes through
    /// PC, so untaken paths still account for the full instruction length.
    pub(super) fn read_operand8<B: Bus>(&mut self, bus: &mut B, operand: Operand) -> Result<u8> {
        let value = match operand {
            Operand::Reg8(reg) => self.reg8(reg),
            Operand::D8 => self.fetch8(bus),
            Operand::MemHl => bus.read8(self.regs.hl()),
            Operand::MemReg16(reg) => bus.read8(self.reg16(reg)),
            Operand::MemD16 => {
                let addr = self.fetch16(bus);
                bus.read8(addr)
            }
            Operand::HighD8 => {
                let offset = self.fetch8(bus) as u16;
                bus.read8(0xFF00 | offset)
            }
            Operand::HighC => bus.read8(0xFF00 | self.regs.c as u16),
            Operand::Reg16(_) | Operand::D16 => {
                bail!("16-bit operand {operand:?} used as an 8-bit source")
            }
        };
        Ok(value)
    }

    /// Resolve an 8-bit operand as a destination and store `value` there.
    pub(super) fn write_operand8<B: Bus>(
        &mut self,
        bus: &mut B,
        operand: Operand,
        value: u8,
    ) -> Result<()> {
        match operand {
            Operand::Reg8(reg) => self.set_reg8(reg, value),
            Operand::MemHl => bus.write8(self.regs.hl(), value),
            Operand::MemReg16(reg) => {
                let addr = self.reg16(reg);
                bus.write8(addr, value);
            }
            Operand::MemD16 => {
                let addr = self.fetch16(bus);
                bus.write8(addr, value);
            }
            Operand::HighD8 => {
                let offset = self.fetch8(bus) as u16;
                bus.write8(0xFF00 | offset, value);
            }
            Operand::HighC => bus.write8(0xFF00 | self.regs.c as u16, value),
            Operand::Reg16(_) | Operand::D16 | Operand::D8 => {
                bail!("operand {operand:?} is not an 8-bit destination")
            }
        }
        Ok(())
    }
}
