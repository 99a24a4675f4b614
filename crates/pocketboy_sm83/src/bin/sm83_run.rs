use std::path::PathBuf;

use anyhow::{Context, Result};
use pocketboy_sm83::{Cpu, FlatBus};

/// Load a raw memory image at address 0, step the CPU a bounded number of
/// times, and dump the final register state. Useful for poking at small
/// hand-assembled programs without a full machine around the core.
fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image_path: PathBuf = args.next().map(PathBuf::from).unwrap_or_else(|| {
        eprintln!("Usage: sm83_run <image_path> [steps]");
        std::process::exit(2);
    });
    let steps: u64 = args
        .next()
        .unwrap_or_else(|| "1000".to_string())
        .parse()
        .unwrap_or_else(|_| {
            eprintln!("Invalid step count; expected an integer.");
            std::process::exit(2);
        });

    let image = std::fs::read(&image_path)
        .with_context(|| format!("failed to read image '{}'", image_path.display()))?;

    let mut bus = FlatBus::default();
    bus.load(0x0000, &image);

    let mut cpu = Cpu::new();
    for executed in 0..steps {
        if let Err(err) = cpu.step(&mut bus) {
            eprintln!("stopped after {executed} steps: {err:#}");
            break;
        }
    }

    let regs = &cpu.regs;
    println!(
        "AF={af:04X} BC={bc:04X} DE={de:04X} HL={hl:04X} SP={sp:04X} PC={pc:04X} IME={ime} HALT={halted}",
        af = regs.af(),
        bc = regs.bc(),
        de = regs.de(),
        hl = regs.hl(),
        sp = regs.sp,
        pc = regs.pc,
        ime = cpu.ime,
        halted = cpu.halted,
    );

    Ok(())
}
