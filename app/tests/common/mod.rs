//! FILENAME: tests/common/mod.rs
//! Test harness for Tabula command line integration tests.

#![allow(dead_code)]

use clap::Parser;
use std::path::{Path, PathBuf};
use tabula_app::{run, AppError, Cli};
use tempfile::TempDir;

/// A scratch project directory with a `sheets/` source root.
pub struct TestHarness {
    pub dir: TempDir,
}

impl TestHarness {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sheets")).unwrap();
        TestHarness { dir }
    }

    /// A harness holding the Hero table as CSV.
    pub fn with_hero() -> Self {
        let harness = Self::new();
        harness.write_csv(
            "Hero.csv",
            "Id,Name,Scores\nint,string,int[]\nHero id,Display name,\n1,Hero,\"10,20,30\"\n",
        );
        harness
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    pub fn write_csv(&self, name: &str, text: &str) {
        std::fs::write(self.path("sheets").join(name), text).unwrap();
    }

    pub fn write_file(&self, relative: &str, text: &str) -> PathBuf {
        let path = self.path(relative);
        std::fs::write(&path, text).unwrap();
        path
    }

    /// Runs the command line, returning the outcome and everything written
    /// to the output stream.
    pub fn run(&self, args: &[&str]) -> (Result<bool, AppError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("tabula").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    pub fn arg(path: &Path) -> String {
        path.display().to_string()
    }
}
