use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// STOP shares the HALT latch here. It is encoded as two bytes; the
    /// padding byte is consumed so PC bookkeeping matches hardware.
    pub(super) fn exec_stop<B: Bus>(&mut self, bus: &mut B) {
        let _padding = self.fetch8(bus);
        self.halted = true;
    }

    /// DI: IME off immediately, and any armed EI latch is cancelled.
    pub(super) fn exec_di(&mut self) {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
    }

    /// EI: IME becomes 1 only after the *next* instruction completes.
    pub(super) fn exec_ei(&mut self) {
        self.ime_enable_pending = true;
    }
}
