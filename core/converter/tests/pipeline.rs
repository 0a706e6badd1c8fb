//! FILENAME: core/converter/tests/pipeline.rs
//! PURPOSE: End-to-end conversion runs against files on disk.

mod common;

use common::{hero_sheet, Blank, Number, Project, Text, HERO_PAYLOAD};
use converter::{
    CellErrorPolicy, ConvertError, DataTableConverter, SheetConverter, TableStatus, MODULE_INDEX,
};
use runtime::{FieldType, FieldValue, RowLayout};
use schema::{SchemaError, SourceError};

// ============================================================================
// CONVERT ALL
// ============================================================================

#[test]
fn test_hero_workbook_end_to_end() {
    let project = Project::new();
    project.write_workbook("heroes.xlsx", &[("Hero", hero_sheet())]);

    let converter = SheetConverter::new(project.config_with_codegen());
    let report = converter.convert_all().unwrap();

    assert!(report.is_success());
    assert_eq!(report.summary(), "1 tables: 1 succeeded, 0 with cell errors, 0 failed");
    let hero = report.table("Hero").unwrap();
    assert_eq!(hero.status(), TableStatus::Succeeded);
    assert_eq!(hero.rows_written, 1);
    assert_eq!(hero.bytes, HERO_PAYLOAD.len());
    assert_eq!(hero.generated, Some(project.gen().join("hero.rs")));

    assert_eq!(project.payload("Hero"), HERO_PAYLOAD);

    let layout = RowLayout::new(&[FieldType::Int, FieldType::String, FieldType::IntArray]).unwrap();
    let table = layout.decode_table("Hero", &project.payload("Hero")).unwrap();
    assert_eq!(
        table.get(1).unwrap().values(),
        &[
            FieldValue::String("Hero".to_string()),
            FieldValue::IntArray(vec![10, 20, 30])
        ]
    );

    let index = std::fs::read_to_string(project.gen().join(MODULE_INDEX)).unwrap();
    assert!(index.contains("pub mod hero;\n"));
    assert!(index.contains("pub use hero::HeroRow;\n"));
}

#[test]
fn test_converting_twice_is_byte_identical() {
    let project = Project::new();
    project.write_workbook(
        "data.xlsx",
        &[
            ("Hero", hero_sheet()),
            (
                "Item",
                vec![
                    vec![Text("Key"), Text("Weight"), Text("Grid")],
                    vec![Text("long"), Text("float"), Text("int[][]")],
                    vec![Blank],
                    vec![Number(7.0), Number(1.5), Text("1,2;3")],
                    vec![Number(8.0), Number(0.25), Blank],
                ],
            ),
        ],
    );
    let converter = SheetConverter::new(project.config_with_codegen());

    converter.convert_all().unwrap();
    let first = (
        project.payload("Hero"),
        project.payload("Item"),
        std::fs::read(project.gen().join("item.rs")).unwrap(),
        std::fs::read(project.gen().join(MODULE_INDEX)).unwrap(),
    );

    let report = converter.convert_all().unwrap();
    assert_eq!(report.succeeded(), 2);
    let second = (
        project.payload("Hero"),
        project.payload("Item"),
        std::fs::read(project.gen().join("item.rs")).unwrap(),
        std::fs::read(project.gen().join(MODULE_INDEX)).unwrap(),
    );
    assert_eq!(first, second);
}

#[test]
fn test_parallel_run_matches_sequential_run() {
    let sequential = Project::new();
    let parallel = Project::new();
    for project in [&sequential, &parallel] {
        for i in 0..6 {
            let id = i.to_string();
            project.write_csv(
                &format!("T{}.csv", i),
                &[&["Id", "Label"], &["short", "string"], &["", ""], &[id.as_str(), "row"]],
            );
        }
    }

    let mut config = parallel.config();
    config.parallelism = 4;
    let report = SheetConverter::new(config).convert_all().unwrap();
    assert_eq!(report.succeeded(), 6);
    SheetConverter::new(sequential.config()).convert_all().unwrap();

    for i in 0..6 {
        let table = format!("T{}", i);
        assert_eq!(sequential.payload(&table), parallel.payload(&table));
    }
    // Report order does not depend on scheduling
    let names: Vec<&str> = report.converted.iter().map(|t| t.table.as_str()).collect();
    assert_eq!(names, vec!["T0", "T1", "T2", "T3", "T4", "T5"]);
}

#[test]
fn test_schema_error_in_one_table_does_not_stop_others() {
    let project = Project::new();
    project.write_workbook(
        "mixed.xlsx",
        &[
            ("Hero", hero_sheet()),
            (
                "Broken",
                vec![
                    vec![Text("Id"), Text("Pos")],
                    vec![Text("int"), Text("vector3")],
                    vec![Blank],
                    vec![Number(1.0), Text("0,0,0")],
                ],
            ),
        ],
    );

    let report = SheetConverter::new(project.config()).convert_all().unwrap();
    assert!(!report.is_success());
    assert_eq!(report.succeeded(), 1);
    assert_eq!(project.payload("Hero"), HERO_PAYLOAD);

    let failure = report.failure("Broken").unwrap();
    assert!(matches!(
        failure.error,
        ConvertError::Schema(SchemaError::UnknownType { ref token, .. }) if token == "vector3"
    ));
    assert!(!project.out().join("Broken.bytes").exists());
}

#[test]
fn test_cell_errors_are_reported_not_fatal() {
    let rows: &[&[&str]] = &[
        &["Id", "Alive", "Speed"],
        &["int", "bool", "double"],
        &["", "", ""],
        &["1", "yes", "2.5"],
        &["2", "maybe", "fast"],
        &["3", "N", "0"],
    ];

    let skip = Project::new();
    skip.write_csv("Unit.csv", rows);
    let report = SheetConverter::new(skip.config()).convert_all().unwrap();
    let unit = report.table("Unit").unwrap();
    assert!(report.is_success());
    assert_eq!(unit.status(), TableStatus::CellErrors);
    assert_eq!(unit.rows_written, 2);
    assert_eq!(unit.rows_skipped, 1);
    assert_eq!(unit.issues.len(), 2);
    assert_eq!(unit.issues[0].line, 5);
    assert_eq!(unit.issues[0].text, "maybe");
    assert_eq!(skip.payload("Unit").len(), 2 * (4 + 1 + 8));

    let fill = Project::new();
    fill.write_csv("Unit.csv", rows);
    let mut config = fill.config();
    config.cell_error_policy = CellErrorPolicy::DefaultValue;
    let report = SheetConverter::new(config).convert_all().unwrap();
    let unit = report.table("Unit").unwrap();
    assert_eq!(unit.rows_written, 3);
    assert_eq!(unit.issues.len(), 2);

    let layout = RowLayout::new(&[FieldType::Int, FieldType::Bool, FieldType::Double]).unwrap();
    let table = layout.decode_table("Unit", &fill.payload("Unit")).unwrap();
    assert_eq!(
        table.get(2).unwrap().values(),
        &[FieldValue::Bool(false), FieldValue::Double(0.0)]
    );
    assert_eq!(table.get(3).unwrap().value(0), Some(&FieldValue::Bool(false)));
}

#[test]
fn test_bad_ids_never_reach_the_payload() {
    let project = Project::new();
    project.write_csv(
        "Item.csv",
        &[&["Id", "Weight"], &["int", "float"], &["key", "kg"], &["x", "1"], &["y", "2"], &["5", "3"]],
    );
    let mut config = project.config();
    config.cell_error_policy = CellErrorPolicy::DefaultValue;
    let report = SheetConverter::new(config).convert_all().unwrap();

    let item = report.table("Item").unwrap();
    assert_eq!(item.rows_written, 1);
    assert_eq!(item.rows_skipped, 2);

    let layout = RowLayout::new(&[FieldType::Int, FieldType::Float]).unwrap();
    let table = layout.decode_table("Item", &project.payload("Item")).unwrap();
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(5).unwrap().values(), &[FieldValue::Float(3.0)]);
}

// ============================================================================
// DISCOVERY
// ============================================================================

#[test]
fn test_table_filter_and_missing_table() {
    let project = Project::new();
    project.write_workbook(
        "data.xlsx",
        &[
            ("Hero", hero_sheet()),
            ("Other", hero_sheet()),
            ("_notes", vec![vec![Text("free text")]]),
        ],
    );

    let mut config = project.config();
    config.tables = vec!["Hero".to_string(), "Ghost".to_string()];
    let report = SheetConverter::new(config).convert_all().unwrap();

    assert_eq!(report.converted.len(), 1);
    assert!(report.table("Hero").is_some());
    assert!(matches!(
        report.failure("Ghost").unwrap().error,
        ConvertError::TableNotFound(_)
    ));
    assert!(!project.out().join("Other.bytes").exists());
}

#[test]
fn test_table_defined_twice_is_rejected() {
    let project = Project::new();
    let rows: &[&[&str]] = &[&["Id"], &["int"], &["key"], &["1"]];
    project.write_csv("a/Dup.csv", rows);
    project.write_csv("b/Dup.csv", rows);

    let report = SheetConverter::new(project.config()).convert_all().unwrap();
    // The first file in path order wins
    let converted = report.table("Dup").unwrap();
    assert!(converted.source.ends_with("a/Dup.csv"));
    assert!(matches!(
        report.failure("Dup").unwrap().error,
        ConvertError::DuplicateTable { .. }
    ));
}

#[test]
fn test_tables_generating_the_same_module_are_rejected() {
    let project = Project::new();
    let rows: &[&[&str]] = &[&["Id"], &["int"], &["key"], &["1"]];
    project.write_csv("HeroStats.csv", rows);
    project.write_csv("hero_stats.csv", rows);

    let mut config = project.config_with_codegen();
    config.parallelism = 2;
    let report = SheetConverter::new(config).convert_all().unwrap();

    assert_eq!(report.converted.len(), 1);
    let kept = report.table("HeroStats").unwrap();
    assert_eq!(kept.generated, Some(project.gen().join("hero_stats.rs")));
    assert!(matches!(
        report.failure("hero_stats").unwrap().error,
        ConvertError::GeneratedNameClash { ref first, .. } if first == "HeroStats"
    ));
    assert!(!project.out().join("hero_stats.bytes").exists());

    let index = std::fs::read_to_string(project.gen().join(MODULE_INDEX)).unwrap();
    assert!(index.contains("pub use hero_stats::HeroStatsRow;\n"));

    // Payloads alone never clash
    let report = SheetConverter::new(project.config()).convert_all().unwrap();
    assert_eq!(report.succeeded(), 2);
}

#[test]
fn test_missing_source_root_is_fatal() {
    let project = Project::new();
    let mut config = project.config();
    config.source_root = project.dir.path().join("nowhere");
    assert!(matches!(
        SheetConverter::new(config).convert_all(),
        Err(ConvertError::Io { .. })
    ));
}

// ============================================================================
// CONVERT ONE
// ============================================================================

#[test]
fn test_convert_single_table_to_explicit_destination() {
    let project = Project::new();
    project.write_workbook("heroes.xlsx", &[("Hero", hero_sheet()), ("Other", hero_sheet())]);
    let converter = SheetConverter::new(project.config());
    let dest = project.dir.path().join("custom").join("hero.dat");

    let report = converter
        .convert(&project.sheets().join("heroes.xlsx"), "Hero", &dest)
        .unwrap();
    assert_eq!(report.payload, dest);
    assert_eq!(std::fs::read(&dest).unwrap(), HERO_PAYLOAD);
    assert!(!project.out().exists());

    let err = converter
        .convert(&project.sheets().join("heroes.xlsx"), "Villain", &dest)
        .unwrap_err();
    assert!(matches!(
        err,
        ConvertError::Source(SourceError::SheetNotFound { .. })
    ));
}
