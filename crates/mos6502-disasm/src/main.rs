use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use mos6502_disasm::{load_raw_bin, render_range};
use mos6502_opgen::{logging, Catalog, DuplicatePolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "6502 disassembler CLI", long_about=None)]
struct Cli {
    /// Load address for the binary in target address space
    #[arg(long, default_value = "0", value_parser = parse_u16)]
    base: u16,
    /// Skip N bytes at start of file before loading
    #[arg(long, default_value_t = 0usize)]
    skip: usize,
    /// Input binary path
    #[arg(value_name = "BINFILE")]
    input: PathBuf,
    /// Limit bytes loaded (default: to EOF after --skip)
    #[arg(long)]
    len: Option<usize>,
    /// Instruction list to decode with (default: bundled 6502 list)
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,
    /// Subcommand
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List loaded segments (simple single-segment for raw .bin)
    Sections,
    /// Disassemble a range [start, end) in bytes
    Range {
        /// Start address (hex with 0x or $, or dec)
        #[arg(value_parser = parse_u16)]
        start: u16,
        /// End address (exclusive, may be 0x10000)
        #[arg(value_parser = parse_u32)]
        end: u32,
        /// Show instruction bytes
        #[arg(long)]
        show_bytes: bool,
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat { Text, Json }

fn parse_u32(s: &str) -> Result<u32> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).or_else(|| s.strip_prefix('$')) {
        Ok(u32::from_str_radix(hex, 16)?)
    } else {
        Ok(s.parse::<u32>()?)
    }
}

fn parse_u16(s: &str) -> Result<u16> {
    let v = parse_u32(s)?;
    u16::try_from(v).with_context(|| format!("{s} is outside the 16-bit address space"))
}

fn load_catalog(table: Option<&Path>) -> Result<Catalog> {
    match table {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading instruction list {}", path.display()))?;
            Ok(Catalog::from_text(&text, DuplicatePolicy::Error)?)
        }
        None => Ok(Catalog::embedded()?),
    }
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let img = load_raw_bin(&cli.input, cli.base, cli.skip, cli.len)?;

    match cli.cmd {
        Command::Sections => {
            println!("{:<10} {:<8} {:<8} {:<6} {:<6}", "name", "start", "end", "perms", "kind");
            for s in &img.segments {
                println!("{:<10} {:#06x}   {:#07x}  {:<6} {:<6}", s.name, s.base, s.end(), s.perms, s.kind);
            }
        }
        Command::Range { start, end, show_bytes, format, out } => {
            anyhow::ensure!(end >= start as u32, "end must be >= start");
            let catalog = load_catalog(cli.table.as_deref())?;
            let lines = render_range(&catalog, &img, start, end, show_bytes);

            let buf = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&lines)? + "\n",
                OutputFormat::Text => {
                    let mut buf = String::new();
                    for l in &lines {
                        let _ = writeln!(buf, "{:04X}: {}", l.addr, l.text);
                    }
                    buf
                }
            };
            if let Some(path) = out { std::fs::write(path, buf)?; } else { print!("{}", buf); }
        }
    }

    Ok(())
}
