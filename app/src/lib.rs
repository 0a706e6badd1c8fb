//! FILENAME: app/src/lib.rs
//! Tabula command line front end. The binary in `main.rs` only parses
//! arguments and maps the outcome to an exit code.

pub mod cli;
pub mod commands;
pub mod error;

pub use cli::Cli;
pub use commands::{init_logging, run};
pub use error::AppError;
