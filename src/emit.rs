use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::mode::AddressingMode;
use crate::table::Catalog;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// C/C++ declarations for a table-driven disassembler.
    #[default]
    C,
    Json,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableRow<'a> {
    pub opcode: u8,
    pub mnemonic: &'a str,
    pub mnemonic_index: usize,
    pub length: u8,
    pub mode: AddressingMode,
    pub authored: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report<'a> {
    pub mnemonics: &'a [String],
    pub addressing_modes: Vec<&'static str>,
    pub table: Vec<TableRow<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        let table = catalog
            .table
            .rows()
            .iter()
            .map(|row| TableRow {
                opcode: row.opcode,
                mnemonic: catalog.mnemonic(row.opcode),
                mnemonic_index: row.mnemonic_index,
                length: row.length,
                mode: row.mode,
                authored: catalog.table.is_authored(row.opcode),
            })
            .collect();
        Self {
            mnemonics: catalog.registry.names(),
            addressing_modes: AddressingMode::ALL.iter().map(|m| m.symbol()).collect(),
            table,
        }
    }
}

/// Render the whole output in memory; nothing is written on failure.
pub fn render(catalog: &Catalog, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::C => Ok(render_c(catalog)),
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(&Report::new(catalog))?;
            s.push('\n');
            Ok(s)
        }
    }
}

fn pretty(name: &str) -> String {
    format!("{name}_Pretty")
}

pub fn render_c(catalog: &Catalog) -> String {
    let names = catalog.registry.names();
    let mut out = String::new();

    let quoted: Vec<String> = names.iter().map(|n| format!("\"{n}\"")).collect();
    let _ = writeln!(out, "const char prettyOpcodeName[][4] = {{");
    let _ = writeln!(out, "{}", quoted.join(","));
    let _ = writeln!(out, "}};\n");

    let variants: Vec<String> = names.iter().enumerate().map(|(i, n)| format!("{} = {i}", pretty(n))).collect();
    let _ = writeln!(out, "enum PrettyOpcodeIndex {{");
    let _ = writeln!(out, "{}", variants.join(",\n"));
    let _ = writeln!(out, "}};\n");

    let modes: Vec<&str> = AddressingMode::ALL.iter().map(|m| m.symbol()).collect();
    let _ = writeln!(out, "enum AddressingMode {{");
    let _ = writeln!(out, "{}", modes.join(",\n"));
    let _ = writeln!(out, "}};\n");

    let rows: Vec<String> = catalog
        .table
        .rows()
        .iter()
        .map(|row| {
            format!(
                "DisassemblerEntry({:#x}, {}, {}, {})",
                row.opcode,
                pretty(catalog.mnemonic(row.opcode)),
                row.length,
                row.mode.symbol()
            )
        })
        .collect();
    let _ = writeln!(out, "DisassemblerEntry disassemblerTable[256] = {{");
    let _ = writeln!(out, "{}", rows.join(",\n"));
    let _ = writeln!(out, "}};");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DuplicatePolicy;

    fn small() -> Catalog {
        Catalog::from_text("Implied|NOP|EA|1\nImplied|NOP|1A|1\nImmediate|ADC|69|2", DuplicatePolicy::Error).unwrap()
    }

    #[test]
    fn c_blocks_appear_in_order() {
        let text = render_c(&small());
        let a = text.find("prettyOpcodeName").unwrap();
        let b = text.find("enum PrettyOpcodeIndex").unwrap();
        let c = text.find("enum AddressingMode").unwrap();
        let d = text.find("disassemblerTable[256]").unwrap();
        assert!(a < b && b < c && c < d);
        assert!(text.contains("\"ADC\",\"NOP\",\"UNK\"\n"));
        assert!(text.contains("ADC_Pretty = 0,\nNOP_Pretty = 1,\nUNK_Pretty = 2\n"));
    }

    #[test]
    fn c_rows_use_symbols() {
        let text = render_c(&small());
        assert!(text.contains("DisassemblerEntry(0x69, ADC_Pretty, 2, AddressingMode_Immediate),\n"));
        assert!(text.contains("DisassemblerEntry(0x0, UNK_Pretty, 1, AddressingMode_Implied),\n"));
        assert!(text.ends_with("DisassemblerEntry(0xff, UNK_Pretty, 1, AddressingMode_Implied)\n};\n"));
        assert_eq!(text.matches("DisassemblerEntry(").count(), 256);
    }

    #[test]
    fn json_report_has_all_blocks() {
        let text = render(&small(), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["mnemonics"], serde_json::json!(["ADC", "NOP", "UNK"]));
        assert_eq!(v["addressing_modes"].as_array().unwrap().len(), 14);
        assert_eq!(v["table"].as_array().unwrap().len(), 256);
        assert_eq!(v["table"][0x69]["mnemonic"], "ADC");
        assert_eq!(v["table"][0x69]["mode"], "Immediate");
        assert_eq!(v["table"][0x03]["authored"], false);
    }
}
