#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("line {line}: expected 4 '|'-separated fields, found {found}: {text:?}")]
    FieldCount { line: usize, found: usize, text: String },
    #[error("line {line}: unknown addressing mode {label:?}")]
    UnknownMode { line: usize, label: String },
    #[error("line {line}: invalid opcode byte {text:?}")]
    BadOpcode { line: usize, text: String },
    #[error("line {line}: invalid instruction length {text:?} (expected 1-3)")]
    BadLength { line: usize, text: String },
    #[error("line {line}: invalid mnemonic {text:?} (expected 1-3 ASCII alphanumerics)")]
    BadMnemonic { line: usize, text: String },
    #[error("opcode {opcode:#04x} defined twice: {first} (line {first_line}) and {second} (line {second_line})")]
    Collision {
        opcode: u8,
        first: String,
        first_line: usize,
        second: String,
        second_line: usize,
    },
    #[error("mnemonic {0:?} is not in the registry")]
    Unregistered(String),
}
