//! FILENAME: core/converter/src/config.rs
//! PURPOSE: Converter settings, loaded from a JSON file or built in code.
//! CONTEXT: Only the two roots are required. Relative paths in a config
//! file are taken relative to the file's own directory.

use crate::error::ConfigError;
use codec::CellFormat;
use codegen::CodegenOptions;
use schema::HeaderLayout;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_PAYLOAD_EXTENSION: &str = "bytes";
pub const DEFAULT_RUNTIME_CRATE: &str = "runtime";

/// What happens to a row containing a cell that does not parse.
/// Either way the cell is listed in the conversion report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellErrorPolicy {
    /// Leave the whole row out of the payload.
    #[default]
    SkipRow,
    /// Write the column type's zero value in place of the bad cell.
    DefaultValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConverterConfig {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
    /// Where generated record sources go. No code is generated when unset.
    #[serde(default)]
    pub codegen_root: Option<PathBuf>,
    /// Tables to convert. Empty means every sheet found.
    #[serde(default)]
    pub tables: Vec<String>,
    #[serde(default = "default_payload_extension")]
    pub payload_extension: String,
    #[serde(default)]
    pub header: HeaderLayout,
    #[serde(default)]
    pub cells: CellFormat,
    #[serde(default)]
    pub cell_error_policy: CellErrorPolicy,
    /// Tables converted at once by `convert_all`.
    #[serde(default = "default_parallelism")]
    pub parallelism: usize,
    /// Crate path generated code imports the runtime from.
    #[serde(default = "default_runtime_crate")]
    pub runtime_crate: String,
}

fn default_payload_extension() -> String {
    DEFAULT_PAYLOAD_EXTENSION.to_string()
}

fn default_parallelism() -> usize {
    1
}

fn default_runtime_crate() -> String {
    DEFAULT_RUNTIME_CRATE.to_string()
}

impl ConverterConfig {
    pub fn new(source_root: impl Into<PathBuf>, output_root: impl Into<PathBuf>) -> Self {
        ConverterConfig {
            source_root: source_root.into(),
            output_root: output_root.into(),
            codegen_root: None,
            tables: Vec::new(),
            payload_extension: default_payload_extension(),
            header: HeaderLayout::default(),
            cells: CellFormat::default(),
            cell_error_policy: CellErrorPolicy::default(),
            parallelism: default_parallelism(),
            runtime_crate: default_runtime_crate(),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: ConverterConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(base) = path.parent() {
            config.rebase(base);
        }
        config.validate()?;
        Ok(config)
    }

    fn rebase(&mut self, base: &Path) {
        let rebase = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        rebase(&mut self.source_root);
        rebase(&mut self.output_root);
        if let Some(root) = self.codegen_root.as_mut() {
            rebase(root);
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.parallelism == 0 {
            return invalid("parallelism must be at least 1".to_string());
        }
        let ext = self.payload_extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return invalid(format!(
                "payload_extension '{}' is not a file extension",
                self.payload_extension
            ));
        }
        if self.runtime_crate.trim().is_empty() {
            return invalid("runtime_crate must not be empty".to_string());
        }

        let header = &self.header;
        if header.name_row == header.type_row {
            return invalid("header name_row and type_row must differ".to_string());
        }
        let last_header_row = header
            .name_row
            .max(header.type_row)
            .max(header.description_row.unwrap_or(0));
        if header.first_data_row <= last_header_row {
            return invalid("header first_data_row must come after every header row".to_string());
        }

        let cells = &self.cells;
        if cells.separators.is_empty() {
            return invalid("at least one array separator is required".to_string());
        }
        if cells.outer_separators.iter().any(|c| cells.separators.contains(c)) {
            return invalid("outer separators must differ from inner separators".to_string());
        }
        if let Some(word) = cells
            .true_words
            .iter()
            .find(|w| cells.false_words.iter().any(|f| f.eq_ignore_ascii_case(w)))
        {
            return invalid(format!("'{}' is both a true and a false word", word));
        }

        Ok(())
    }

    /// Payload file for `table` under the output root.
    pub fn payload_path(&self, table: &str) -> PathBuf {
        self.output_root.join(format!(
            "{}.{}",
            table,
            self.payload_extension.trim_start_matches('.')
        ))
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions {
            runtime_crate: self.runtime_crate.clone(),
            ..CodegenOptions::default()
        }
    }

    /// True when `table` is one of the configured tables, or no filter is set.
    pub fn wants(&self, table: &str) -> bool {
        self.tables.is_empty() || self.tables.iter().any(|t| t == table)
    }
}
