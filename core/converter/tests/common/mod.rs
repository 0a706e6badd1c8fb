//! FILENAME: core/converter/tests/common/mod.rs
//! Shared fixtures for converter integration tests.

#![allow(dead_code)]

use converter::ConverterConfig;
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A fixture cell. Numbers are written as real numeric cells.
pub enum Fixture<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
}

pub use Fixture::{Blank, Number, Text};

/// A scratch project: `sheets/` in, `out/` and `gen/` out.
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("sheets")).unwrap();
        Project { dir }
    }

    pub fn sheets(&self) -> PathBuf {
        self.dir.path().join("sheets")
    }

    pub fn out(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    pub fn gen(&self) -> PathBuf {
        self.dir.path().join("gen")
    }

    /// Payload only, no code generation.
    pub fn config(&self) -> ConverterConfig {
        ConverterConfig::new(self.sheets(), self.out())
    }

    pub fn config_with_codegen(&self) -> ConverterConfig {
        let mut config = self.config();
        config.codegen_root = Some(self.gen());
        config
    }

    pub fn payload(&self, table: &str) -> Vec<u8> {
        std::fs::read(self.out().join(format!("{}.bytes", table))).unwrap()
    }

    pub fn write_csv(&self, relative: &str, rows: &[&[&str]]) {
        let path = self.sheets().join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        let text: String = rows
            .iter()
            .map(|row| format!("{}\n", row.join(",")))
            .collect();
        std::fs::write(path, text).unwrap();
    }

    pub fn write_workbook(&self, relative: &str, sheets: &[(&str, Vec<Vec<Fixture<'_>>>)]) {
        write_workbook(&self.sheets().join(relative), sheets);
    }
}

/// Writes one worksheet per `(name, rows)` entry.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Vec<Fixture<'_>>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(*name).unwrap();
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                match cell {
                    Fixture::Text(s) => {
                        worksheet.write_string(r as u32, c as u16, *s).unwrap();
                    }
                    Fixture::Number(n) => {
                        worksheet.write_number(r as u32, c as u16, *n).unwrap();
                    }
                    Fixture::Blank => {}
                }
            }
        }
    }
    workbook.save(path).unwrap();
}

/// The Hero sheet: `{Id:int, Name:string, Scores:int[]}` with one row.
pub fn hero_sheet() -> Vec<Vec<Fixture<'static>>> {
    vec![
        vec![Text("Id"), Text("Name"), Text("Scores")],
        vec![Text("int"), Text("string"), Text("int[]")],
        vec![Text("Hero id"), Text("Display name"), Blank],
        vec![Number(1.0), Text("Hero"), Text("10,20,30")],
    ]
}

/// Bytes of the single Hero row.
pub const HERO_PAYLOAD: [u8; 28] = [
    1, 0, 0, 0, // id
    4, 0, 0, 0, b'H', b'e', b'r', b'o', // name
    3, 0, 0, 0, 10, 0, 0, 0, 20, 0, 0, 0, 30, 0, 0, 0, // scores
];
