//! FILENAME: app/src/cli.rs
//! PURPOSE: Command line definition.

use clap::{Args, Parser, Subcommand, ValueEnum};
use converter::CellErrorPolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tabula", version, about = "Converts spreadsheet tables into binary payloads and Rust record types")]
pub struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert every table under the source root
    ConvertAll(ConvertAllArgs),
    /// Convert one table from one source file
    Convert(ConvertArgs),
    /// Print the records of a payload file
    Dump(DumpArgs),
}

/// Settings shared by the convert commands. Flags override the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct ConfigArgs {
    /// JSON converter configuration
    #[arg(long, short = 'c', value_name = "PATH", env = "TABULA_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    pub source_root: Option<PathBuf>,

    #[arg(long, value_name = "DIR")]
    pub output_root: Option<PathBuf>,

    /// Write generated record sources here
    #[arg(long, value_name = "DIR")]
    pub codegen_root: Option<PathBuf>,

    /// Only convert these tables
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub tables: Vec<String>,

    #[arg(long, value_name = "EXT")]
    pub extension: Option<String>,

    /// What to do with a row holding a cell that does not convert
    #[arg(long, value_enum, value_name = "POLICY")]
    pub on_cell_error: Option<PolicyArg>,

    /// Tables converted at once
    #[arg(long, short = 'j', value_name = "N")]
    pub parallelism: Option<usize>,

    /// Crate path generated code imports the runtime from
    #[arg(long, value_name = "PATH")]
    pub runtime_crate: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Leave the row out
    SkipRow,
    /// Write the type's zero value for the bad cell
    DefaultValue,
}

impl From<PolicyArg> for CellErrorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::SkipRow => CellErrorPolicy::SkipRow,
            PolicyArg::DefaultValue => CellErrorPolicy::DefaultValue,
        }
    }
}

#[derive(Args, Debug)]
pub struct ConvertAllArgs {
    #[command(flatten)]
    pub settings: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Workbook or CSV file holding the table
    pub source: PathBuf,
    /// Sheet name (file stem for CSV)
    pub table: String,
    /// Payload file to write
    pub dest: PathBuf,

    #[command(flatten)]
    pub settings: ConfigArgs,
}

#[derive(Args, Debug)]
pub struct DumpArgs {
    /// Payload file to read
    pub payload: PathBuf,

    /// Column types in layout order, id first (e.g. int,string,int[])
    #[arg(long, value_delimiter = ',', conflicts_with = "source")]
    pub types: Vec<String>,

    /// Take the column types from this table's source file instead
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// JSON converter configuration whose header layout applies to --source
    #[arg(long, short = 'c', value_name = "PATH", requires = "source")]
    pub config: Option<PathBuf>,

    /// Table name; defaults to the payload file stem
    #[arg(long)]
    pub table: Option<String>,
}
