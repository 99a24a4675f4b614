use crate::cpu::decode::JumpCondition;
use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// CALL cc,a16: push the PC after the operand bytes, then jump. An
    /// untaken call still consumes the two address bytes.
    pub(super) fn exec_call<B: Bus>(
        &mut self,
        bus: &mut B,
        condition: JumpCondition,
    ) -> Option<u16> {
        let target = self.fetch16(bus);
        if !self.condition_met(condition) {
            return None;
        }
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        Some(target)
    }

    /// RET cc: pop the return address into PC when the condition holds.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, condition: JumpCondition) {
        if self.condition_met(condition) {
            let addr = self.pop_u16(bus);
            self.regs.pc = addr;
        }
    }

    /// RETI: RET plus an immediate (no latency) IME enable.
    pub(super) fn exec_reti<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.pop_u16(bus);
        self.regs.pc = addr;
        self.ime = true;
    }

    /// RST: push PC and jump to the fixed vector.
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, address: u8) -> u16 {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        address as u16
    }
}
