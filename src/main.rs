//! disasm816 - LoROM 65816 disassembler
//!
//! ```text
//! disasm816 game.cfg
//! disasm816 --rom game.sfc --vectors vectors.txt --output -
//! ```

use clap::Parser;
use disasm816::config::STDOUT_PATH;
use disasm816::{formatter, Config, ConfigError, Disassembler, LoRom, RomImage, VectorList};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Disassemble 65816 code in a LoROM cartridge image
#[derive(Parser, Debug)]
#[command(name = "disasm816")]
#[command(version)]
#[command(about = "Disassemble 65816 code in a LoROM cartridge image", long_about = None)]
struct Args {
    /// Configuration file (RomPath, VectorsPath, OutputPath, Verbose)
    config: Option<PathBuf>,

    /// ROM image (overrides RomPath)
    #[arg(long)]
    rom: Option<PathBuf>,

    /// Vector list (overrides VectorsPath)
    #[arg(long)]
    vectors: Option<PathBuf>,

    /// Listing output, `-` for stdout (overrides OutputPath)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Only report warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Load the config before the logger so Verbose can pick the level
    let config = args.config.as_ref().map(Config::load).transpose();
    let verbose = matches!(&config, Ok(Some(config)) if config.verbose);

    let level = if args.quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match config.and_then(|config| run(&args, config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: Option<Config>) -> disasm816::Result<()> {
    let pick = |flag: &Option<PathBuf>, from_config: Option<&PathBuf>, key: &'static str| {
        flag.clone()
            .or_else(|| from_config.cloned())
            .ok_or_else(|| ConfigError::MissingKey {
                file: "command line".to_string(),
                key,
            })
    };

    let rom_path = pick(&args.rom, config.as_ref().map(|c| &c.rom_path), "RomPath")?;
    let vectors_path = pick(
        &args.vectors,
        config.as_ref().map(|c| &c.vectors_path),
        "VectorsPath",
    )?;
    let output_path = pick(
        &args.output,
        config.as_ref().map(|c| &c.output_path),
        "OutputPath",
    )?;

    log::info!("reading ROM {}", rom_path.display());
    let mut rom = RomImage::from_file(&rom_path)?;
    rom.strip_copier_header();

    log::info!("reading vectors {}", vectors_path.display());
    let vectors = VectorList::load(&vectors_path)?;

    let mut disassembler = Disassembler::new(LoRom::new(rom), vectors);
    disassembler.disassemble()?;
    let (instructions, labels) = disassembler.into_parts();

    if output_path.as_os_str() == STDOUT_PATH {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        formatter::write_to(&mut out, &instructions, &labels)?;
        out.flush()?;
    } else {
        log::info!("writing {}", output_path.display());
        let mut out = BufWriter::new(File::create(&output_path)?);
        formatter::write_to(&mut out, &instructions, &labels)?;
        out.flush()?;
    }

    Ok(())
}
