use crate::cpu::decode::JumpCondition;
use crate::cpu::{Bus, Cpu, Flag};

impl Cpu {
    #[inline]
    pub(super) fn condition_met(&self, condition: JumpCondition) -> bool {
        match condition {
            JumpCondition::Always => true,
            JumpCondition::Zero => self.get_flag(Flag::Z),
            JumpCondition::NotZero => !self.get_flag(Flag::Z),
            JumpCondition::Carry => self.get_flag(Flag::C),
            JumpCondition::NotCarry => !self.get_flag(Flag::C),
        }
    }

    /// JP cc,a16. The address bytes are always consumed, so an untaken
    /// jump still leaves PC past the full 3-byte instruction.
    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, condition: JumpCondition) -> Option<u16> {
        let target = self.fetch16(bus);
        self.condition_met(condition).then_some(target)
    }

    /// JR cc,e8: signed displacement relative to the address after the
    /// operand byte.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, condition: JumpCondition) -> Option<u16> {
        let offset = self.fetch8(bus) as i8;
        self.condition_met(condition)
            .then(|| self.regs.pc.wrapping_add_signed(offset as i16))
    }
}
