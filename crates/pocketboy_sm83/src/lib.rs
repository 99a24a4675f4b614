pub mod cpu;

pub use cpu::{Bus, Cpu, FlatBus, Flag, Flags, Interrupt, Registers};
pub use cpu::{IE_ADDR, IF_ADDR};
