use tracing::warn;

use crate::record::InstructionRecord;

/// A record whose declared length disagrees with its addressing mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthMismatch {
    pub line: usize,
    pub opcode: u8,
    pub mnemonic: String,
    pub declared: u8,
    pub expected: u8,
}

pub fn check_lengths(records: &[InstructionRecord]) -> Vec<LengthMismatch> {
    let found: Vec<LengthMismatch> = records
        .iter()
        .filter_map(|r| {
            let expected = 1 + r.mode.operand_len();
            (r.length != expected).then(|| LengthMismatch {
                line: r.line,
                opcode: r.opcode,
                mnemonic: r.mnemonic.clone(),
                declared: r.length,
                expected,
            })
        })
        .collect();
    for m in &found {
        warn!(
            line = m.line,
            opcode = m.opcode,
            mnemonic = %m.mnemonic,
            declared = m.declared,
            expected = m.expected,
            "instruction length does not match addressing mode"
        );
    }
    found
}
