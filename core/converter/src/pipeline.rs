//! FILENAME: core/converter/src/pipeline.rs
//! PURPOSE: The convert-all and convert-one entry points.
//! CONTEXT: Each table runs read schema -> generate code -> encode ->
//! publish, strictly in that order. Tables are independent: a failure in
//! one is recorded and the rest carry on. `convert_all` may spread tables
//! over `parallelism` worker threads; results are collected back in
//! discovery order, so output and report do not depend on scheduling.
//!
//! Both entry points are deterministic. Converting the same sources twice
//! yields byte-identical payloads and generated files.

use crate::config::ConverterConfig;
use crate::error::ConvertError;
use crate::publish::{write_atomic, write_if_changed};
use crate::report::{ConversionReport, TableFailure, TableReport};
use crate::writer::encode_rows;
use codegen::naming::{module_ident, type_ident};
use codegen::{generate_module_index, generate_record, GeneratedSource};
use schema::{is_source_file, load_sheet, load_sheets, read_table, SheetGrid};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File name of the generated module index.
pub const MODULE_INDEX: &str = "mod.rs";

/// The command surface a host (CLI, editor plugin, build script) drives.
pub trait DataTableConverter {
    /// Converts every table under the source root.
    fn convert_all(&self) -> Result<ConversionReport, ConvertError>;

    /// Converts the single table `table` found in `source`, writing its
    /// payload to `dest`.
    fn convert(&self, source: &Path, table: &str, dest: &Path)
        -> Result<TableReport, ConvertError>;
}

/// Converter for spreadsheet and CSV sources.
#[derive(Debug, Clone)]
pub struct SheetConverter {
    config: ConverterConfig,
}

impl SheetConverter {
    pub fn new(config: ConverterConfig) -> Self {
        SheetConverter { config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    // ========================================================================
    // DISCOVERY
    // ========================================================================

    /// Source files under the source root, sorted by path.
    pub fn source_files(&self) -> Result<Vec<PathBuf>, ConvertError> {
        let mut files = Vec::new();
        collect_sources(&self.config.source_root, &mut files)?;
        files.sort();
        Ok(files)
    }

    /// Loads every wanted sheet. Unreadable files, tables defined twice,
    /// tables whose generated names collide and configured tables that do
    /// not exist come back as failures.
    fn discover(&self) -> Result<(Vec<SheetGrid>, Vec<TableFailure>), ConvertError> {
        let mut sheets: Vec<SheetGrid> = Vec::new();
        let mut failures = Vec::new();
        let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();
        // Generated module and type name -> owning table
        let mut claimed: BTreeMap<String, String> = BTreeMap::new();

        for file in self.source_files()? {
            log::debug!("Reading source {}", file.display());
            let grids = match load_sheets(&file) {
                Ok(grids) => grids,
                Err(err) => {
                    let table = file
                        .file_stem()
                        .map(|s| s.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    failures.push(TableFailure {
                        table,
                        source: Some(file.clone()),
                        error: err.into(),
                    });
                    continue;
                }
            };

            for grid in grids {
                if !self.config.wants(&grid.name) {
                    continue;
                }
                if let Some(first) = seen.get(&grid.name) {
                    failures.push(TableFailure {
                        table: grid.name.clone(),
                        source: Some(grid.source.clone()),
                        error: ConvertError::DuplicateTable {
                            table: grid.name.clone(),
                            first: first.clone(),
                            second: grid.source.clone(),
                        },
                    });
                    continue;
                }
                if let Some(error) = self.claim_generated_names(&grid.name, &mut claimed) {
                    failures.push(TableFailure {
                        table: grid.name.clone(),
                        source: Some(grid.source.clone()),
                        error,
                    });
                    continue;
                }
                seen.insert(grid.name.clone(), grid.source.clone());
                sheets.push(grid);
            }
        }

        for table in &self.config.tables {
            if !seen.contains_key(table) {
                failures.push(TableFailure {
                    table: table.clone(),
                    source: None,
                    error: ConvertError::TableNotFound(table.clone()),
                });
            }
        }

        Ok((sheets, failures))
    }

    /// Records the module and type names `table` would generate. Returns
    /// the clash if an earlier table already owns one of them. Without a
    /// codegen root nothing is generated, so nothing can clash.
    fn claim_generated_names(
        &self,
        table: &str,
        claimed: &mut BTreeMap<String, String>,
    ) -> Option<ConvertError> {
        if self.config.codegen_root.is_none() {
            return None;
        }
        let suffix = self.config.codegen_options().type_suffix;
        let names: Vec<String> = [
            module_ident(table).map(|m| format!("{}.rs", m)),
            type_ident(table, &suffix),
        ]
        .into_iter()
        .flatten()
        .collect();

        for ident in &names {
            if let Some(first) = claimed.get(ident) {
                return Some(ConvertError::GeneratedNameClash {
                    first: first.clone(),
                    second: table.to_string(),
                    ident: ident.clone(),
                });
            }
        }
        for ident in names {
            claimed.insert(ident, table.to_string());
        }
        None
    }

    // ========================================================================
    // ONE TABLE
    // ========================================================================

    fn convert_grid(
        &self,
        grid: &SheetGrid,
        dest: &Path,
    ) -> Result<(TableReport, Option<GeneratedSource>), ConvertError> {
        let parsed = read_table(grid, &self.config.header)?;
        let schema = &parsed.schema;

        let generated = match &self.config.codegen_root {
            Some(root) => {
                let source = generate_record(schema, &self.config.codegen_options())?;
                let path = root.join(source.file_name());
                write_if_changed(&path, source.text.as_bytes()).map_err(ConvertError::io(&path))?;
                Some((path, source))
            }
            None => None,
        };

        let encoded = encode_rows(
            schema,
            &parsed.rows,
            &self.config.cells,
            self.config.cell_error_policy,
        );
        write_atomic(dest, &encoded.payload).map_err(ConvertError::io(dest))?;

        if encoded.has_issues() {
            log::warn!(
                "Table '{}': {} cell errors, {} rows skipped",
                schema.name(),
                encoded.issues.len(),
                encoded.rows_skipped
            );
        }
        log::info!(
            "Converted table '{}' ({} rows, {} bytes)",
            schema.name(),
            encoded.rows_written,
            encoded.payload.len()
        );

        let (generated_path, generated) = match generated {
            Some((path, source)) => (Some(path), Some(source)),
            None => (None, None),
        };
        let report = TableReport {
            table: schema.name().to_string(),
            source: grid.source.clone(),
            payload: dest.to_path_buf(),
            generated: generated_path,
            rows_written: encoded.rows_written,
            rows_skipped: encoded.rows_skipped,
            bytes: encoded.payload.len(),
            issues: encoded.issues,
        };
        Ok((report, generated))
    }

    fn convert_discovered(
        &self,
        grid: &SheetGrid,
    ) -> Result<(TableReport, Option<GeneratedSource>), ConvertError> {
        self.convert_grid(grid, &self.config.payload_path(&grid.name))
    }
}

impl DataTableConverter for SheetConverter {
    fn convert_all(&self) -> Result<ConversionReport, ConvertError> {
        let (sheets, failed) = self.discover()?;
        log::info!(
            "Converting {} tables from {}",
            sheets.len(),
            self.config.source_root.display()
        );

        let results = fan_out(&sheets, self.config.parallelism, |grid| {
            self.convert_discovered(grid)
        });

        let mut report = ConversionReport {
            converted: Vec::new(),
            failed,
        };
        let mut generated = Vec::new();
        for (grid, result) in sheets.iter().zip(results) {
            match result {
                Ok((table, source)) => {
                    report.converted.push(table);
                    generated.extend(source);
                }
                Err(error) => {
                    log::warn!("Table '{}' failed: {}", grid.name, error);
                    report.failed.push(TableFailure {
                        table: grid.name.clone(),
                        source: Some(grid.source.clone()),
                        error,
                    });
                }
            }
        }

        if let Some(root) = &self.config.codegen_root {
            let path = root.join(MODULE_INDEX);
            let index = generate_module_index(&generated);
            write_if_changed(&path, index.as_bytes()).map_err(ConvertError::io(&path))?;
        }

        report.sort();
        log::info!("{}", report.summary());
        Ok(report)
    }

    fn convert(
        &self,
        source: &Path,
        table: &str,
        dest: &Path,
    ) -> Result<TableReport, ConvertError> {
        let grid = load_sheet(source, table)?;
        self.convert_grid(&grid, dest).map(|(report, _)| report)
    }
}

// ============================================================================
// HELPERS
// ============================================================================

fn collect_sources(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ConvertError> {
    let entries = std::fs::read_dir(dir).map_err(ConvertError::io(dir))?;
    for entry in entries {
        let path = entry.map_err(ConvertError::io(dir))?.path();
        let hidden = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with('.'));
        if path.is_dir() {
            if !hidden {
                collect_sources(&path, files)?;
            }
        } else if is_source_file(&path) {
            files.push(path);
        }
    }
    Ok(())
}

/// Maps `items` on up to `workers` scoped threads, preserving order.
fn fan_out<T, R, F>(items: &[T], workers: usize, f: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    let workers = workers.clamp(1, items.len().max(1));
    if workers == 1 {
        return items.iter().map(f).collect();
    }

    let chunk = items.len().div_ceil(workers);
    let f = &f;
    std::thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk)
            .map(|part| scope.spawn(move || part.iter().map(f).collect::<Vec<R>>()))
            .collect();
        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic))
            })
            .collect()
    })
}
