//! FILENAME: core/codegen/src/tests.rs
//! PURPOSE: Unit tests for naming and record generation.

use crate::error::CodegenError;
use crate::naming::{field_ident, module_ident, to_pascal_case, to_snake_case, type_ident};
use crate::record::{decode_plan, generate_module_index, generate_record, CodegenOptions};
use codec::FieldType;
use schema::{read_table, HeaderLayout, SheetGrid, TableSchema};

fn schema_of(name: &str, names: Vec<&str>, types: Vec<&str>) -> TableSchema {
    let grid = SheetGrid::from_rows(name, vec![names, types]);
    read_table(&grid, &HeaderLayout::default()).unwrap().schema
}

fn hero_schema() -> TableSchema {
    let grid = SheetGrid::from_rows(
        "Hero",
        vec![
            vec!["Id", "Name", "Scores"],
            vec!["int", "string", "int[]"],
            vec!["Hero id", "Display name", ""],
        ],
    );
    read_table(&grid, &HeaderLayout::default()).unwrap().schema
}

// ========================================
// NAMING
// ========================================

#[test]
fn test_snake_case() {
    assert_eq!(to_snake_case("Name"), "name");
    assert_eq!(to_snake_case("heroName"), "hero_name");
    assert_eq!(to_snake_case("HPMax"), "hp_max");
    assert_eq!(to_snake_case("Level2Exp"), "level2_exp");
    assert_eq!(to_snake_case("drop rate (%)"), "drop_rate");
    assert_eq!(to_snake_case("already_snake"), "already_snake");
}

#[test]
fn test_pascal_case() {
    assert_eq!(to_pascal_case("hero_skill"), "HeroSkill");
    assert_eq!(to_pascal_case("Hero"), "Hero");
    assert_eq!(to_pascal_case("item list"), "ItemList");
}

#[test]
fn test_idents_avoid_keywords_and_digits() {
    assert_eq!(field_ident("Type").as_deref(), Some("r#type"));
    assert_eq!(field_ident("self").as_deref(), Some("self_"));
    assert_eq!(field_ident("2nd Slot").as_deref(), Some("_2nd_slot"));
    assert_eq!(field_ident("!!!"), None);
    assert_eq!(module_ident("Match").as_deref(), Some("match_"));
    assert_eq!(type_ident("3d_model", "Row").as_deref(), Some("Table3dModelRow"));
}

// ========================================
// DECODE PLAN
// ========================================

#[test]
fn test_plan_follows_field_order_with_id_first() {
    let schema = schema_of(
        "Unit",
        vec!["Key", "Speed", "Tags", "Alive"],
        vec!["long", "float", "int[][]", "bool"],
    );
    let plan = decode_plan(&schema).unwrap();
    let idents: Vec<&str> = plan.iter().map(|s| s.ident.as_str()).collect();
    assert_eq!(idents, vec!["id", "speed", "tags", "alive"]);
    let types: Vec<FieldType> = plan.iter().map(|s| s.field_type).collect();
    assert_eq!(types, schema.field_types());
}

#[test]
fn test_plan_rejects_clashing_idents() {
    let schema = schema_of(
        "Clash",
        vec!["Id", "hero name", "HeroName"],
        vec!["int", "string", "string"],
    );
    assert_eq!(
        decode_plan(&schema).unwrap_err(),
        CodegenError::IdentClash {
            table: "Clash".to_string(),
            first: "hero name".to_string(),
            second: "HeroName".to_string(),
            ident: "hero_name".to_string(),
        }
    );
}

#[test]
fn test_value_field_cannot_shadow_id() {
    let schema = schema_of("Shadow", vec!["Key", "_id"], vec!["int", "int"]);
    assert!(matches!(
        decode_plan(&schema),
        Err(CodegenError::IdentClash { ref ident, .. }) if ident == "id"
    ));
}

#[test]
fn test_field_named_like_cursor_is_renamed() {
    let schema = schema_of(
        "Book",
        vec!["Id", "Reader", "Pages"],
        vec!["int", "int", "int"],
    );
    let plan = decode_plan(&schema).unwrap();
    let idents: Vec<&str> = plan.iter().map(|s| s.ident.as_str()).collect();
    assert_eq!(idents, vec!["id", "reader_", "pages"]);

    let text = generate_record(&schema, &CodegenOptions::default()).unwrap().text;
    assert!(text.contains("        let reader_ = reader.read_i32()?;\n"));
    assert!(text.contains("        let pages = reader.read_i32()?;\n"));
    assert!(!text.contains("let reader ="));
    assert!(text.contains("Ok(BookRow { id, reader_, pages })"));
}

// ========================================
// GENERATION
// ========================================

#[test]
fn test_generates_hero_record() {
    let generated = generate_record(&hero_schema(), &CodegenOptions::default()).unwrap();
    assert_eq!(generated.type_name, "HeroRow");
    assert_eq!(generated.module_name, "hero");
    assert_eq!(generated.file_name(), "hero.rs");

    let expected = "\
// Generated by tabula from table `Hero`. Do not edit.

use runtime::{DataRow, DecodeError, Record, RowReader};

/// Record type for the `Hero` table.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroRow {
    /// Hero id
    id: i32,
    /// Display name
    name: String,
    scores: Vec<i32>,
}

impl HeroRow {
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> &[i32] {
        &self.scores
    }
}

impl Record for HeroRow {
    type Id = i32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

impl DataRow for HeroRow {
    const TABLE_NAME: &'static str = \"Hero\";

    fn decode(reader: &mut RowReader<'_>) -> Result<Self, DecodeError> {
        let id = reader.read_i32()?;
        let name = reader.read_string()?;
        let scores = reader.read_i32_array()?;
        Ok(HeroRow { id, name, scores })
    }
}
";
    assert_eq!(generated.text, expected);
}

#[test]
fn test_id_only_table_has_no_accessor_block() {
    let schema = schema_of("Marker", vec!["Id"], vec!["byte"]);
    let generated = generate_record(&schema, &CodegenOptions::default()).unwrap();
    assert!(!generated.text.contains("impl MarkerRow {"));
    assert!(generated.text.contains("type Id = i8;"));
    assert!(generated.text.contains("Ok(MarkerRow { id })"));
}

#[test]
fn test_custom_runtime_path_and_suffix() {
    let options = CodegenOptions {
        runtime_crate: "game::tables".to_string(),
        type_suffix: "Data".to_string(),
    };
    let generated = generate_record(&hero_schema(), &options).unwrap();
    assert_eq!(generated.type_name, "HeroData");
    assert!(generated
        .text
        .contains("use game::tables::{DataRow, DecodeError, Record, RowReader};"));
}

#[test]
fn test_generation_is_deterministic() {
    let a = generate_record(&hero_schema(), &CodegenOptions::default()).unwrap();
    let b = generate_record(&hero_schema(), &CodegenOptions::default()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_module_index_is_sorted() {
    let options = CodegenOptions::default();
    let item = generate_record(&schema_of("Item", vec!["Id"], vec!["int"]), &options).unwrap();
    let hero = generate_record(&hero_schema(), &options).unwrap();

    let index = generate_module_index(&[item, hero]);
    assert_eq!(
        index,
        "// Generated by tabula. Do not edit.\n\n\
         pub mod hero;\npub mod item;\n\n\
         pub use hero::HeroRow;\npub use item::ItemRow;\n"
    );
}
