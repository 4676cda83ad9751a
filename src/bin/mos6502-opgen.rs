use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use mos6502_opgen::{generate, logging, DuplicatePolicy, GenConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Generate dense 6502 opcode tables from an instruction list"
)]
struct Opts {
    /// JSON config file; flags below override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Instruction list (default: bundled 6502 list)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
    /// Policy for two lines sharing one opcode byte
    #[arg(long, value_enum)]
    on_duplicate: Option<DuplicatePolicy>,
    /// Skip the length/addressing-mode consistency check
    #[arg(long)]
    no_lint: bool,
    /// Write output to file instead of stdout
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
}

fn main() -> Result<()> {
    logging::init();

    let opts = Opts::parse();
    let mut cfg = match &opts.config {
        Some(path) => GenConfig::from_json_file(path)?,
        None => GenConfig::default(),
    };
    if opts.input.is_some() {
        cfg.input = opts.input;
    }
    if let Some(f) = opts.format {
        cfg.format = f;
    }
    if let Some(p) = opts.on_duplicate {
        cfg.on_duplicate = p;
    }
    if opts.no_lint {
        cfg.lint = false;
    }

    let text = generate(&cfg)?;
    if let Some(path) = opts.out {
        std::fs::write(path, text)?;
    } else {
        std::io::stdout().lock().write_all(text.as_bytes())?;
    }

    Ok(())
}
