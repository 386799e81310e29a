use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dmgboy_core::cpu::Registers;
use dmgboy_core::{BootRom, GameBoy, MachineConfig};
use typed_builder::TypedBuilder;

pub const DEFAULT_FRAMES: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq, TypedBuilder)]
pub struct RunOptions {
    #[builder(setter(into))]
    pub rom_path: PathBuf,
    #[builder(default, setter(strip_option, into))]
    pub boot_rom_path: Option<PathBuf>,
    #[builder(default = DEFAULT_FRAMES)]
    pub frames: u64,
    #[builder(default = false)]
    pub trace: bool,
}

impl RunOptions {
    /// Parse `ROM [--boot PATH] [--frames N] [--trace]`.
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self> {
        let mut rom_path = None;
        let mut boot_rom_path = None;
        let mut frames = DEFAULT_FRAMES;
        let mut trace = false;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--boot" => {
                    let path = args.next().context("--boot needs a path")?;
                    boot_rom_path = Some(PathBuf::from(path));
                }
                "--frames" => {
                    let value = args.next().context("--frames needs a count")?;
                    frames = value
                        .parse()
                        .with_context(|| format!("invalid frame count '{value}'"))?;
                }
                "--trace" => trace = true,
                flag if flag.starts_with("--") => bail!("unknown option '{flag}'"),
                _ if rom_path.is_none() => rom_path = Some(PathBuf::from(arg)),
                _ => bail!("unexpected argument '{arg}'"),
            }
        }

        let Some(rom_path) = rom_path else {
            bail!("usage: dmgboy ROM [--boot PATH] [--frames N] [--trace]");
        };
        Ok(Self {
            rom_path,
            boot_rom_path,
            frames,
            trace,
        })
    }
}

/// State of the machine when the run ended.
#[derive(Clone, Debug)]
pub struct RunReport {
    pub frames: u64,
    pub cycles: u64,
    pub registers: Registers,
    pub serial_output: Vec<u8>,
}

pub fn run(options: &RunOptions) -> Result<RunReport> {
    let rom = std::fs::read(&options.rom_path)
        .with_context(|| format!("failed to read ROM '{}'", options.rom_path.display()))?;
    log::info!("Loaded ROM '{}' ({} bytes)", options.rom_path.display(), rom.len());

    let mut config = MachineConfig::builder()
        .trace_instructions(options.trace)
        .build();
    if let Some(path) = &options.boot_rom_path {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read boot ROM '{}'", path.display()))?;
        config.boot_rom = Some(BootRom::from_bytes(&bytes)?);
    }

    let mut gb = GameBoy::new(&rom, config)?;
    for frame in 0..options.frames {
        gb.run_frame()
            .with_context(|| format!("emulation stopped during frame {frame}"))?;
    }

    Ok(RunReport {
        frames: gb.frame_count(),
        cycles: gb.total_cycles(),
        registers: *gb.registers(),
        serial_output: gb.serial_output().to_vec(),
    })
}
