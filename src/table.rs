use bitvec::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TableError;
use crate::mode::AddressingMode;
use crate::record::{parse_table, InstructionRecord, EMBEDDED_TABLE};
use crate::registry::MnemonicRegistry;

/// What to do when two authored lines claim the same opcode byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicatePolicy {
    /// Abort with [`TableError::Collision`].
    #[default]
    Error,
    /// Keep the line declared last, logging a warning.
    LastWins,
}

/// One row of the dense table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpcodeEntry {
    pub opcode: u8,
    pub mnemonic_index: usize,
    pub length: u8,
    pub mode: AddressingMode,
}

/// Lookup table with exactly one row per opcode byte 0x00..=0xFF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseOpcodeTable {
    rows: Vec<OpcodeEntry>,
    authored: BitArr!(for 256, in u64),
}

impl DenseOpcodeTable {
    pub fn build(
        records: &[InstructionRecord],
        registry: &MnemonicRegistry,
        policy: DuplicatePolicy,
    ) -> Result<Self, TableError> {
        let mut slots: [Option<&InstructionRecord>; 256] = [None; 256];
        for rec in records {
            let slot = &mut slots[rec.opcode as usize];
            if let Some(prev) = slot.replace(rec) {
                match policy {
                    DuplicatePolicy::Error => {
                        return Err(TableError::Collision {
                            opcode: rec.opcode,
                            first: prev.mnemonic.clone(),
                            first_line: prev.line,
                            second: rec.mnemonic.clone(),
                            second_line: rec.line,
                        });
                    }
                    DuplicatePolicy::LastWins => warn!(
                        opcode = rec.opcode,
                        dropped = %prev.mnemonic,
                        dropped_line = prev.line,
                        kept = %rec.mnemonic,
                        kept_line = rec.line,
                        "duplicate opcode, keeping the later definition"
                    ),
                }
            }
        }

        let unknown = registry.unknown_index();
        let mut authored = bitarr![u64, Lsb0; 0; 256];
        let mut rows = Vec::with_capacity(256);
        for (byte, slot) in slots.iter().enumerate() {
            let row = match slot {
                Some(rec) => {
                    authored.set(byte, true);
                    OpcodeEntry {
                        opcode: byte as u8,
                        mnemonic_index: registry
                            .index_of(&rec.mnemonic)
                            .ok_or_else(|| TableError::Unregistered(rec.mnemonic.clone()))?,
                        length: rec.length,
                        mode: rec.mode,
                    }
                }
                None => OpcodeEntry {
                    opcode: byte as u8,
                    mnemonic_index: unknown,
                    length: 1,
                    mode: AddressingMode::Implied,
                },
            };
            rows.push(row);
        }
        debug!(fallback = 256 - authored.count_ones(), "filled unauthored opcodes with UNK");

        Ok(Self { rows, authored })
    }

    pub fn get(&self, opcode: u8) -> &OpcodeEntry {
        &self.rows[opcode as usize]
    }

    pub fn rows(&self) -> &[OpcodeEntry] {
        &self.rows
    }

    /// Whether `opcode` came from an authored line rather than the fallback.
    pub fn is_authored(&self, opcode: u8) -> bool {
        self.authored[opcode as usize]
    }

    pub fn authored_count(&self) -> usize {
        self.authored.count_ones()
    }
}

/// Registry and dense table built together from one instruction list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub registry: MnemonicRegistry,
    pub table: DenseOpcodeTable,
}

impl Catalog {
    pub fn from_records(records: &[InstructionRecord], policy: DuplicatePolicy) -> Result<Self, TableError> {
        let registry = MnemonicRegistry::from_records(records);
        let table = DenseOpcodeTable::build(records, &registry, policy)?;
        info!(
            records = records.len(),
            mnemonics = registry.len(),
            authored = table.authored_count(),
            "built opcode catalog"
        );
        Ok(Self { registry, table })
    }

    pub fn from_text(text: &str, policy: DuplicatePolicy) -> Result<Self, TableError> {
        Self::from_records(&parse_table(text)?, policy)
    }

    /// Catalog for the bundled 6502 instruction list.
    pub fn embedded() -> Result<Self, TableError> {
        Self::from_text(EMBEDDED_TABLE, DuplicatePolicy::Error)
    }

    pub fn mnemonic(&self, opcode: u8) -> &str {
        self.registry
            .name(self.table.get(opcode).mnemonic_index)
            .unwrap_or(crate::registry::UNKNOWN_MNEMONIC)
    }
}
