//! FILENAME: core/codegen/src/record.rs
//! PURPOSE: Emits one record type per table.
//! CONTEXT: Pure functions, no file system access. The decode routine is
//! rendered from `decode_plan`, which walks `TableSchema::fields()` in
//! order: the same walk the binary writer performs when encoding a row.

use crate::error::CodegenError;
use crate::naming::{field_ident, module_ident, type_ident};
use codec::{EmitContext, FieldType};
use schema::TableSchema;

/// Identifier every generated record uses for its id field.
pub const ID_IDENT: &str = "id";

/// Name of the cursor parameter in the generated decode routine. A field
/// with this identifier would shadow it, so such fields get a trailing
/// underscore.
pub const CURSOR_IDENT: &str = "reader";

const FIELD_INDENT: &str = "    ";
const BODY_INDENT: &str = "        ";

// ============================================================================
// OPTIONS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenOptions {
    /// Path of the crate providing `DataRow`, `Record`, `RowReader` and
    /// `DecodeError` to the generated code.
    pub runtime_crate: String,
    /// Appended to the PascalCase table name.
    pub type_suffix: String,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        CodegenOptions {
            runtime_crate: "runtime".to_string(),
            type_suffix: "Row".to_string(),
        }
    }
}

// ============================================================================
// DECODE PLAN
// ============================================================================

/// One field read, in the order the decode routine performs them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeStep {
    pub ident: String,
    pub field_name: String,
    pub description: String,
    pub field_type: FieldType,
}

/// The id first, then each value field in declared order, each with its
/// Rust identifier.
pub fn decode_plan(schema: &TableSchema) -> Result<Vec<DecodeStep>, CodegenError> {
    let mut steps: Vec<DecodeStep> = Vec::with_capacity(schema.fields().len());

    for field in schema.fields() {
        let ident = if field.is_id {
            ID_IDENT.to_string()
        } else {
            let ident = field_ident(&field.name).ok_or_else(|| CodegenError::InvalidIdent {
                table: schema.name().to_string(),
                name: field.name.clone(),
            })?;
            if ident == CURSOR_IDENT {
                format!("{}_", ident)
            } else {
                ident
            }
        };

        if let Some(earlier) = steps.iter().find(|s| s.ident == ident) {
            return Err(CodegenError::IdentClash {
                table: schema.name().to_string(),
                first: earlier.field_name.clone(),
                second: field.name.clone(),
                ident,
            });
        }

        steps.push(DecodeStep {
            ident,
            field_name: field.name.clone(),
            description: field.description.clone(),
            field_type: field.field_type,
        });
    }

    Ok(steps)
}

// ============================================================================
// GENERATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub table: String,
    pub module_name: String,
    pub type_name: String,
    pub text: String,
}

impl GeneratedSource {
    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name)
    }
}

pub fn generate_record(
    schema: &TableSchema,
    options: &CodegenOptions,
) -> Result<GeneratedSource, CodegenError> {
    let table = schema.name();
    let invalid = || CodegenError::InvalidIdent {
        table: table.to_string(),
        name: table.to_string(),
    };
    let type_name = type_ident(table, &options.type_suffix).ok_or_else(invalid)?;
    let module_name = module_ident(table).ok_or_else(invalid)?;

    let id = schema.id_field();
    let id_type = id
        .field_type
        .resolve_id_base_type()
        .ok_or_else(|| CodegenError::IllegalIdType {
            table: table.to_string(),
            token: id.type_token.clone(),
        })?;

    let plan = decode_plan(schema)?;

    let mut out = String::new();
    out.push_str(&format!(
        "// Generated by tabula from table `{}`. Do not edit.\n\n",
        table
    ));
    out.push_str(&format!(
        "use {}::{{DataRow, DecodeError, Record, RowReader}};\n\n",
        options.runtime_crate
    ));

    // Struct
    out.push_str(&format!("/// Record type for the `{}` table.\n", table));
    out.push_str("#[derive(Debug, Clone, PartialEq)]\n");
    out.push_str(&format!("pub struct {} {{\n", type_name));
    for step in &plan {
        step.field_type
            .emit_field_declaration(&mut out, &ctx(step, FIELD_INDENT));
    }
    out.push_str("}\n\n");

    // Accessors (the id is reached through `Record::id`)
    let values = &plan[1..];
    if !values.is_empty() {
        out.push_str(&format!("impl {} {{\n", type_name));
        for (i, step) in values.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            step.field_type.emit_accessor(&mut out, &ctx(step, FIELD_INDENT));
        }
        out.push_str("}\n\n");
    }

    // Record
    out.push_str(&format!("impl Record for {} {{\n", type_name));
    out.push_str(&format!("    type Id = {};\n\n", id_type));
    out.push_str("    fn id(&self) -> Self::Id {\n");
    out.push_str(&format!("        self.{}\n", ID_IDENT));
    out.push_str("    }\n");
    out.push_str("}\n\n");

    // Decode routine
    out.push_str(&format!("impl DataRow for {} {{\n", type_name));
    out.push_str(&format!("    const TABLE_NAME: &'static str = {:?};\n\n", table));
    out.push_str(
        "    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {\n",
    );
    for step in &plan {
        step.field_type
            .emit_decode_statement(&mut out, &ctx(step, BODY_INDENT));
    }
    let idents: Vec<&str> = plan.iter().map(|s| s.ident.as_str()).collect();
    out.push_str(&format!(
        "        Ok({} {{ {} }})\n",
        type_name,
        idents.join(", ")
    ));
    out.push_str("    }\n");
    out.push_str("}\n");

    Ok(GeneratedSource {
        table: table.to_string(),
        module_name,
        type_name,
        text: out,
    })
}

fn ctx<'a>(step: &'a DecodeStep, indent: &'a str) -> EmitContext<'a> {
    EmitContext {
        ident: &step.ident,
        description: &step.description,
        indent,
    }
}

/// `mod.rs` declaring every generated module and re-exporting its type,
/// sorted by module name so the output does not depend on conversion order.
pub fn generate_module_index(sources: &[GeneratedSource]) -> String {
    let mut entries: Vec<(&str, &str)> = sources
        .iter()
        .map(|s| (s.module_name.as_str(), s.type_name.as_str()))
        .collect();
    entries.sort();
    entries.dedup();

    let mut out = String::from("// Generated by tabula. Do not edit.\n\n");
    for (module, _) in &entries {
        out.push_str(&format!("pub mod {};\n", module));
    }
    if !entries.is_empty() {
        out.push('\n');
    }
    for (module, type_name) in &entries {
        out.push_str(&format!("pub use {}::{};\n", module, type_name));
    }
    out
}
