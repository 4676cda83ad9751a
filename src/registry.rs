use std::collections::{HashMap, HashSet};

use crate::record::InstructionRecord;

/// Mnemonic used for bytes with no authored instruction.
pub const UNKNOWN_MNEMONIC: &str = "UNK";

/// Sorted, deduplicated mnemonic names with dense zero-based indices.
///
/// Indices depend only on the set of names, never on the order they were
/// first seen, so regenerating from the same list yields the same numbering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl MnemonicRegistry {
    pub fn from_records(records: &[InstructionRecord]) -> Self {
        Self::from_names(records.iter().map(|r| r.mnemonic.as_str()))
    }

    pub fn from_names<'a, I: IntoIterator<Item = &'a str>>(names: I) -> Self {
        // collect and dedupe
        let mut set: HashSet<&str> = names.into_iter().collect();
        set.insert(UNKNOWN_MNEMONIC);

        // sort and index
        let mut names: Vec<String> = set.into_iter().map(str::to_string).collect();
        names.sort_unstable();
        let index = names.iter().enumerate().map(|(i, n)| (n.clone(), i)).collect();
        Self { names, index }
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn unknown_index(&self) -> usize {
        self.index[UNKNOWN_MNEMONIC]
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
