// docsieve-core/tests/filter_tests.rs
use serde_json::json;
use test_log::test;

use docsieve_core::filters::permissive::{PAGE_KEY, RAW_CONTENT_KEY};
use docsieve_core::{build_filter, ContentFilter, Document, ExtractOutcome, FilterMode, Page, SieveConfig, Table};

fn task_table() -> Table {
    Table {
        header: vec![Some("ลำดับ".into()), Some("รายการ".into()), Some("สถานะ".into())],
        rows: vec![
            vec![json!("1"), json!("Backup database"), json!("Done")],
            vec![json!("2"), json!("Rotate keys"), json!("Pending")],
        ],
    }
}

fn page(text: &str, tables: Vec<Table>) -> Page {
    Page { text: text.to_string(), tables }
}

fn document(pages: Vec<Page>) -> Document {
    Document { source: Some("fixture.pdf".into()), pages }
}

fn extract(mode: FilterMode, doc: &Document) -> ExtractOutcome {
    let config = SieveConfig::load_default().unwrap();
    build_filter(mode, &config).unwrap().extract(doc)
}

#[test]
fn test_strict_requires_two_anchors_and_a_table() {
    let one_anchor = document(vec![page("สถานะ report", vec![task_table()])]);
    assert_eq!(extract(FilterMode::Strict, &one_anchor), ExtractOutcome::Empty);

    let two_anchors = document(vec![page("ลำดับ รายการ\n1 Backup", vec![task_table()])]);
    let records = extract(FilterMode::Strict, &two_anchors).into_records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["รายการ"], "Backup database");
}

#[test]
fn test_strict_ignores_anchor_pages_without_tables() {
    let doc = document(vec![page("ลำดับ รายการ สถานะ\n1 2 3\n4 5 6", vec![])]);
    assert!(extract(FilterMode::Strict, &doc).is_empty());
}

#[test]
fn test_strict_keeps_only_work_pages() {
    let doc = document(vec![
        page("User manual, chapter one", vec![task_table()]),
        page("Task / Status sheet", vec![task_table()]),
    ]);
    assert_eq!(extract(FilterMode::Strict, &doc).into_records().len(), 2);
}

#[test]
fn test_permissive_takes_tables_without_anchors() {
    let doc = document(vec![page("no keywords here", vec![task_table()])]);
    assert_eq!(extract(FilterMode::Permissive, &doc).into_records().len(), 2);
}

#[test]
fn test_permissive_falls_back_to_raw_text() {
    let text = "1  Backup database  Done\n2  Rotate keys  Pending\n3  Patch servers  Open";
    let doc = document(vec![page("", vec![]), page(text, vec![])]);
    let records = extract(FilterMode::Permissive, &doc).into_records();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0][PAGE_KEY], 2);
    assert_eq!(records[0][RAW_CONTENT_KEY], text);
}

#[test]
fn test_permissive_rejects_manuals_and_prose() {
    let manual = "คู่มือการใช้งาน\nขั้นตอนที่ 1\nขั้นตอนที่ 2";
    let prose = "lorem ipsum ".repeat(60);
    let short = "only\ntwo lines";
    let doc = document(vec![page(manual, vec![]), page(&prose, vec![]), page(short, vec![])]);
    assert_eq!(extract(FilterMode::Permissive, &doc), ExtractOutcome::Empty);
}

#[test]
fn test_empty_document_is_empty_outcome() {
    let doc = document(vec![]);
    assert!(extract(FilterMode::Strict, &doc).is_empty());
    assert!(extract(FilterMode::Permissive, &doc).is_empty());
}

#[test]
fn test_filter_modes_parse_aliases() {
    assert_eq!("quality".parse::<FilterMode>().unwrap(), FilterMode::Strict);
    assert_eq!("SMART".parse::<FilterMode>().unwrap(), FilterMode::Permissive);
    assert!("fuzzy".parse::<FilterMode>().is_err());
}

#[test]
fn test_built_filter_reports_its_mode_and_heuristics() {
    let config = SieveConfig::load_default().unwrap();
    let filter = build_filter(FilterMode::Permissive, &config).unwrap();
    assert_eq!(filter.mode(), FilterMode::Permissive);
    assert_eq!(filter.heuristics().anchor_matches("Task | Owner | Due date"), 3);
}
