//! FILENAME: app/src/commands.rs
//! PURPOSE: One function per subcommand.
//! CONTEXT: Commands write their human-readable output to the given writer
//! and return whether the run succeeded. Diagnostics go through `log`.

use crate::cli::{Cli, Command, ConfigArgs, ConvertAllArgs, ConvertArgs, DumpArgs};
use crate::error::AppError;
use codec::{registry, FieldType};
use converter::{ConverterConfig, DataTableConverter, SheetConverter};
use runtime::{Record, RowLayout};
use schema::{load_sheet, read_table, HeaderLayout};
use std::io::Write;
use std::path::Path;

/// Runs the parsed command line. `Ok(false)` means the command ran but at
/// least one table failed.
pub fn run(cli: &Cli, out: &mut dyn Write) -> Result<bool, AppError> {
    match &cli.command {
        Command::ConvertAll(args) => convert_all(args, out),
        Command::Convert(args) => convert(args, out),
        Command::Dump(args) => dump(args, out),
    }
}

/// Initialises `env_logger`. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env = env_logger::Env::default().filter_or("RUST_LOG", level);
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(verbose >= 2)
        .init();
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Loads the config file (if any) and applies flag overrides. `fallback`
/// supplies the roots when neither the file nor the flags name them.
pub fn resolve_config(
    args: &ConfigArgs,
    fallback: Option<(&Path, &Path)>,
) -> Result<ConverterConfig, AppError> {
    let mut config = match (&args.config, &args.source_root, &args.output_root, fallback) {
        (Some(path), _, _, _) => ConverterConfig::load(path)?,
        (None, Some(source), Some(output), _) => ConverterConfig::new(source, output),
        (None, _, _, Some((source, output))) => ConverterConfig::new(source, output),
        _ => {
            return Err(AppError::Usage(
                "either --config or both --source-root and --output-root are required"
                    .to_string(),
            ))
        }
    };

    if let Some(source) = &args.source_root {
        config.source_root = source.clone();
    }
    if let Some(output) = &args.output_root {
        config.output_root = output.clone();
    }
    if let Some(root) = &args.codegen_root {
        config.codegen_root = Some(root.clone());
    }
    if !args.tables.is_empty() {
        config.tables = args.tables.clone();
    }
    if let Some(ext) = &args.extension {
        config.payload_extension = ext.clone();
    }
    if let Some(policy) = args.on_cell_error {
        config.cell_error_policy = policy.into();
    }
    if let Some(n) = args.parallelism {
        config.parallelism = n;
    }
    if let Some(krate) = &args.runtime_crate {
        config.runtime_crate = krate.clone();
    }

    config.validate()?;
    Ok(config)
}

// ============================================================================
// CONVERT
// ============================================================================

pub fn convert_all(args: &ConvertAllArgs, out: &mut dyn Write) -> Result<bool, AppError> {
    let config = resolve_config(&args.settings, None)?;
    let report = SheetConverter::new(config).convert_all()?;
    writeln!(out, "{}", report)?;
    Ok(report.is_success())
}

pub fn convert(args: &ConvertArgs, out: &mut dyn Write) -> Result<bool, AppError> {
    let source_dir = args.source.parent().unwrap_or(Path::new("."));
    let dest_dir = args.dest.parent().unwrap_or(Path::new("."));
    let config = resolve_config(&args.settings, Some((source_dir, dest_dir)))?;

    let report = SheetConverter::new(config).convert(&args.source, &args.table, &args.dest)?;
    writeln!(
        out,
        "{}: {} rows, {} bytes -> {}",
        report.table,
        report.rows_written,
        report.bytes,
        report.payload.display()
    )?;
    for issue in &report.issues {
        writeln!(out, "  {}", issue)?;
    }
    Ok(true)
}

// ============================================================================
// DUMP
// ============================================================================

fn layout_types(args: &DumpArgs, table: &str) -> Result<Vec<FieldType>, AppError> {
    if let Some(source) = &args.source {
        let header = match &args.config {
            Some(path) => ConverterConfig::load(path)?.header,
            None => HeaderLayout::default(),
        };
        let grid = load_sheet(source, table)?;
        let parsed = read_table(&grid, &header)?;
        return Ok(parsed.schema.field_types());
    }
    if args.types.is_empty() {
        return Err(AppError::Usage(
            "dump needs --types or --source to know the row layout".to_string(),
        ));
    }
    args.types
        .iter()
        .map(|token| {
            registry::lookup(token).ok_or_else(|| {
                let known: Vec<&str> = registry::known_tokens().collect();
                AppError::Usage(format!(
                    "unknown type '{}' (known: {})",
                    token,
                    known.join(", ")
                ))
            })
        })
        .collect()
}

pub fn dump(args: &DumpArgs, out: &mut dyn Write) -> Result<bool, AppError> {
    let table = match &args.table {
        Some(table) => table.clone(),
        None => args
            .payload
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };

    let types = layout_types(args, &table)?;
    let layout = RowLayout::new(&types).ok_or_else(|| {
        AppError::Usage(format!(
            "the first column type must be byte, short, int or long, got {:?}",
            types.first().map(|t| t.token())
        ))
    })?;

    let bytes = std::fs::read(&args.payload)?;
    let rows = layout.decode_table(&table, &bytes)?;
    for row in rows.iter() {
        let mut line = row.id().to_string();
        for value in row.values() {
            line.push('\t');
            line.push_str(&value.to_string());
        }
        writeln!(out, "{}", line)?;
    }
    log::info!("{}: {} records", table, rows.len());
    Ok(true)
}
