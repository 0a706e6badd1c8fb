//! FILENAME: core/schema/src/reader.rs
//! PURPOSE: Splits a sheet into its schema and its raw data rows.
//! CONTEXT: Header rows give each column a name, a type token and an
//! optional description. Columns without a name, or whose name starts with
//! '#', are notes and take no part in the schema. Data rows that are blank
//! or whose first cell starts with '#' are skipped. The first schema column
//! is the id.

use crate::error::SchemaError;
use crate::source::SheetGrid;
use crate::table::{FieldDescriptor, HeaderLayout, ParsedTable, RawRow, TableSchema};

fn is_comment(text: &str) -> bool {
    text.trim_start().starts_with('#')
}

pub fn read_table(grid: &SheetGrid, layout: &HeaderLayout) -> Result<ParsedTable, SchemaError> {
    let table = grid.name.as_str();

    let names = grid
        .rows
        .get(layout.name_row)
        .ok_or_else(|| SchemaError::MissingHeader {
            table: table.to_string(),
            row: layout.name_row,
        })?;
    if grid.rows.get(layout.type_row).is_none() {
        return Err(SchemaError::MissingHeader {
            table: table.to_string(),
            row: layout.type_row,
        });
    }

    let mut fields = Vec::new();
    for (column, name) in names.iter().enumerate() {
        let name = name.trim();
        if name.is_empty() || is_comment(name) {
            continue;
        }
        let token = grid.cell(layout.type_row, column);
        let description = layout
            .description_row
            .map(|row| grid.cell(row, column))
            .unwrap_or("");
        let is_id = fields.is_empty();
        fields.push(FieldDescriptor::resolve(
            table,
            column,
            name,
            token,
            description,
            is_id,
        )?);
    }

    let schema = TableSchema::new(table, fields, &grid.source)?;

    let rows = grid
        .rows
        .iter()
        .enumerate()
        .skip(layout.first_data_row)
        .filter(|(_, row)| !row.iter().all(|cell| cell.trim().is_empty()))
        .filter(|(_, row)| !row.first().is_some_and(|first| is_comment(first)))
        .map(|(index, row)| RawRow {
            line: index + 1,
            cells: schema
                .fields()
                .iter()
                .map(|field| row.get(field.column).cloned().unwrap_or_default())
                .collect(),
        })
        .collect();

    Ok(ParsedTable { schema, rows })
}
