use anyhow::Result;
use dmgboy::RunOptions;

fn main() -> Result<()> {
    env_logger::init();

    let options = RunOptions::from_args(std::env::args().skip(1))?;
    let report = dmgboy::run(&options)?;

    if !report.serial_output.is_empty() {
        println!("{}", String::from_utf8_lossy(&report.serial_output));
    }
    let regs = report.registers;
    println!(
        "{} frames, {} cycles: AF={:04X} BC={:04X} DE={:04X} HL={:04X} SP={:04X} PC={:04X}",
        report.frames,
        report.cycles,
        regs.af(),
        regs.bc(),
        regs.de(),
        regs.hl(),
        regs.sp,
        regs.pc
    );
    Ok(())
}
