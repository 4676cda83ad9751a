use serde::{Deserialize, Serialize};

use crate::error::TableError;
use crate::mode::AddressingMode;

/// Instruction list bundled with the crate.
pub const EMBEDDED_TABLE: &str = include_str!("../data/opcodes_6502.txt");

/// One authored line of the instruction list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionRecord {
    pub opcode: u8,
    pub mnemonic: String,
    pub mode: AddressingMode,
    pub length: u8,
    /// 1-based source line, for diagnostics.
    pub line: usize,
}

/// Parse `mode | mnemonic | opcode | length` lines into records, in file order.
///
/// Blank lines and lines starting with `#` are skipped. Any malformed line
/// aborts the whole parse.
pub fn parse_table(text: &str) -> Result<Vec<InstructionRecord>, TableError> {
    let mut out = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        out.push(parse_line(line, trimmed)?);
    }
    Ok(out)
}

fn parse_line(line: usize, text: &str) -> Result<InstructionRecord, TableError> {
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();
    let [mode, mnemonic, opcode, length] = fields[..] else {
        return Err(TableError::FieldCount { line, found: fields.len(), text: text.to_string() });
    };

    let mode = AddressingMode::from_label(mode)
        .ok_or_else(|| TableError::UnknownMode { line, label: mode.to_string() })?;

    if mnemonic.is_empty() || mnemonic.len() > 3 || !mnemonic.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(TableError::BadMnemonic { line, text: mnemonic.to_string() });
    }

    let hex = opcode
        .strip_prefix("0x")
        .or_else(|| opcode.strip_prefix("0X"))
        .or_else(|| opcode.strip_prefix('$'))
        .unwrap_or(opcode);
    let opcode = u8::from_str_radix(hex, 16)
        .map_err(|_| TableError::BadOpcode { line, text: opcode.to_string() })?;

    let length = match length.parse::<u8>() {
        Ok(n @ 1..=3) => n,
        _ => return Err(TableError::BadLength { line, text: length.to_string() }),
    };

    Ok(InstructionRecord { opcode, mnemonic: mnemonic.to_string(), mode, length, line })
}
