//! FILENAME: core/schema/tests/common/mod.rs
//! Fixtures for source-file integration tests.

use rust_xlsxwriter::Workbook;
use std::path::Path;

/// A fixture cell: numbers are written as real numeric cells so that the
/// reader's number rendering is exercised.
pub enum Fixture<'a> {
    Text(&'a str),
    Number(f64),
    Blank,
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
