/// Address of the interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;

/// Only bits 0-4 of IF/IE are wired to interrupt sources.
const INTERRUPT_MASK: u8 = 0x1F;

/// Abstraction over the 64 KiB address space and its IO registers.
///
/// The core reads opcodes and operands, pushes and pops the stack, and
/// touches arbitrary addresses through this trait. The provided methods
/// expose the IF/IE interrupt registers the way the core (and peripherals
/// requesting interrupts) consume them.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Combined pending mask: `IE & IF & 0x1F`.
    fn interrupt_pending_mask(&mut self) -> u8 {
        self.read8(IE_ADDR) & self.read8(IF_ADDR) & INTERRUPT_MASK
    }

    fn any_interrupt_pending(&mut self) -> bool {
        self.interrupt_pending_mask() != 0
    }

    /// Set or clear one bit of IF. Peripherals use this to request an
    /// interrupt; the core uses it to acknowledge one.
    fn set_interrupt_flag_bit(&mut self, bit: u8, value: bool) {
        let current = self.read8(IF_ADDR);
        let mask = 1u8 << bit;
        let new = if value { current | mask } else { current & !mask };
        self.write8(IF_ADDR, new);
    }

    /// Set or clear one bit of IE.
    fn set_interrupt_enable_bit(&mut self, bit: u8, value: bool) {
        let current = self.read8(IE_ADDR);
        let mask = 1u8 << bit;
        let new = if value { current | mask } else { current & !mask };
        self.write8(IE_ADDR, new);
    }
}

/// Flat 64 KiB backing store with no IO side effects.
///
/// Used by the test suite and the trace runner; a real machine would hang
/// cartridge/PPU/APU/timer mappings behind its own [`Bus`] implementation.
pub struct FlatBus {
    pub memory: [u8; 0x10000],
}

impl Default for FlatBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl FlatBus {
    /// Copy `bytes` into memory starting at `base`. Data past the end of
    /// the address space is ignored.
    pub fn load(&mut self, base: u16, bytes: &[u8]) {
        let base = base as usize;
        let len = bytes.len().min(self.memory.len() - base);
        self.memory[base..base + len].copy_from_slice(&bytes[..len]);
    }
}

impl Bus for FlatBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}
