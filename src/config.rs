use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::emit::OutputFormat;
use crate::table::DuplicatePolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenConfig {
    /// Instruction list to read instead of the bundled one.
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub on_duplicate: DuplicatePolicy,
    /// Warn about lengths that disagree with the addressing mode.
    pub lint: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            input: None,
            format: OutputFormat::C,
            on_duplicate: DuplicatePolicy::Error,
            lint: true,
        }
    }
}

impl GenConfig {
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let txt = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&txt).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Text of the instruction list this config points at.
    pub fn load_table_text(&self) -> Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("reading instruction list {}", path.display())),
            None => Ok(crate::record::EMBEDDED_TABLE.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg: GenConfig = serde_json::from_str(r#"{ "on_duplicate": "last-wins" }"#).unwrap();
        assert_eq!(cfg.on_duplicate, DuplicatePolicy::LastWins);
        assert_eq!(cfg.format, OutputFormat::C);
        assert!(cfg.lint);
        assert!(cfg.input.is_none());
    }

    #[test]
    fn format_names() {
        let cfg: GenConfig = serde_json::from_str(r#"{ "format": "json", "lint": false }"#).unwrap();
        assert_eq!(cfg.format, OutputFormat::Json);
        assert!(!cfg.lint);
    }

    #[test]
    fn default_reads_bundled_list() {
        let text = GenConfig::default().load_table_text().unwrap();
        assert!(text.contains("|ADC|69|2"));
    }
}
