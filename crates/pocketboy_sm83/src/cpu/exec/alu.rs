use crate::cpu::alu;
use crate::cpu::{Bus, Cpu, Flag, Flags};

impl Cpu {
    /// Core 8-bit ADD/ADC on A. `use_carry` selects ADC.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let carry_in = use_carry && self.get_flag(Flag::C);
        let result = alu::add8(self.regs.a, value, carry_in);

        self.regs.a = result.value;
        self.set_flags(Flags {
            zero: result.value == 0,
            subtract: false,
            half_carry: result.half_carry,
            carry: result.carry,
        });
    }

    /// Core 8-bit SUB/SBC on A. `use_carry` selects SBC.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let borrow_in = use_carry && self.get_flag(Flag::C);
        let result = alu::sub8(self.regs.a, value, borrow_in);

        self.regs.a = result.value;
        self.set_flags(Flags {
            zero: result.value == 0,
            subtract: true,
            half_carry: result.half_borrow,
            carry: result.borrow,
        });
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            subtract: false,
            half_carry: true,
            carry: false,
        });
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            ..Flags::default()
        });
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.set_flags(Flags {
            zero: result == 0,
            ..Flags::default()
        });
    }

    /// Compare A with `value`: flags as if `A - value`, A unchanged.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        let result = alu::sub8(self.regs.a, value, false);
        self.set_flags(Flags {
            zero: result.value == 0,
            subtract: true,
            half_carry: result.half_borrow,
            carry: result.borrow,
        });
    }

    /// 8-bit increment used by INC r and INC (HL). Carry is preserved.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = alu::add8(value, 1, false);
        let mut flags = self.flags();
        flags.zero = result.value == 0;
        flags.subtract = false;
        flags.half_carry = result.half_carry;
        self.set_flags(flags);
        result.value
    }

    /// 8-bit decrement used by DEC r and DEC (HL). Carry is preserved.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = alu::sub8(value, 1, false);
        let mut flags = self.flags();
        flags.zero = result.value == 0;
        flags.subtract = true;
        flags.half_carry = result.half_borrow;
        self.set_flags(flags);
        result.value
    }

    /// ADD HL,rr. Z is untouched; H/C from bits 11/15.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let result = alu::add16(self.regs.hl(), value);
        self.regs.set_hl(result.value);

        let mut flags = self.flags();
        flags.subtract = false;
        flags.half_carry = result.half_carry;
        flags.carry = result.carry;
        self.set_flags(flags);
    }

    /// Decimal adjust A after a BCD addition or subtraction.
    ///
    /// In add mode the correction conditions are evaluated against the
    /// pre-adjustment value; adding 0x60 first keeps the low nibble intact
    /// for the 0x06 check.
    pub(super) fn alu_daa(&mut self) {
        let mut flags = self.flags();
        let mut a = self.regs.a;

        if flags.subtract {
            if flags.half_carry {
                a = a.wrapping_sub(0x06);
            }
            if flags.carry {
                a = a.wrapping_sub(0x60);
            }
        } else {
            if flags.carry || a > 0x99 {
                a = a.wrapping_add(0x60);
                flags.carry = true;
            }
            if flags.half_carry || (a & 0x0F) > 0x09 {
                a = a.wrapping_add(0x06);
            }
        }

        flags.zero = a == 0;
        flags.half_carry = false;
        self.regs.a = a;
        self.set_flags(flags);
    }

    /// ADD SP,e8: signed displacement, unsigned low-byte flag rule.
    pub(super) fn exec_add_sp<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let result = alu::add_signed16(self.regs.sp, imm);
        self.regs.sp = result.value;
        self.set_flags(Flags {
            zero: false,
            subtract: false,
            half_carry: result.half_carry,
            carry: result.carry,
        });
    }

    /// LD HL,SP+e8: same arithmetic and flag rule as ADD SP,e8.
    pub(super) fn exec_ld_hl_sp_offset<B: Bus>(&mut self, bus: &mut B) {
        let imm = self.fetch8(bus);
        let result = alu::add_signed16(self.regs.sp, imm);
        self.regs.set_hl(result.value);
        self.set_flags(Flags {
            zero: false,
            subtract: false,
            half_carry: result.half_carry,
            carry: result.carry,
        });
    }

    pub(super) fn exec_cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
    }

    pub(super) fn exec_scf(&mut self) {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
    }

    pub(super) fn exec_ccf(&mut self) {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
    }
}
