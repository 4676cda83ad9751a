pub mod config;
pub mod disasm;
pub mod emit;
pub mod error;
pub mod lint;
pub mod logging;
pub mod mode;
pub mod record;
pub mod registry;
pub mod table;

pub use config::GenConfig;
pub use emit::{render, OutputFormat};
pub use error::TableError;
pub use mode::AddressingMode;
pub use record::{parse_table, InstructionRecord, EMBEDDED_TABLE};
pub use registry::{MnemonicRegistry, UNKNOWN_MNEMONIC};
pub use table::{Catalog, DenseOpcodeTable, DuplicatePolicy, OpcodeEntry};

/// Parse, check and render in one go, as the CLI does.
pub fn generate(cfg: &GenConfig) -> anyhow::Result<String> {
    let text = cfg.load_table_text()?;
    let records = parse_table(&text)?;
    if cfg.lint {
        lint::check_lengths(&records);
    }
    let catalog = Catalog::from_records(&records, cfg.on_duplicate)?;
    Ok(render(&catalog, cfg.format)?)
}
