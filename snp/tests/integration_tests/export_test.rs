// tests/integration_tests/export_test.rs
use super::common::{MEETING_NOTE, setup_test_directory};
use anyhow::Result;
use pretty_assertions::assert_eq;
use snp::core::scanner::collect_note_files;
use snp::export::{CSV_COLUMNS, ExportFormat, write_batch, write_document};
use snp::models::RawDocument;
use snp::{Config, Stages, process_document, process_files};

#[test]
fn test_document_json_shape() -> Result<()> {
    let config = Config::default();
    let doc = process_document(
        &RawDocument::new("meeting.md", MEETING_NOTE),
        &config,
        Stages {
            analysis: true,
            summary: true,
        },
    )?;

    let mut out = Vec::new();
    write_document(&mut out, &doc, ExportFormat::Json, &config.export)?;
    let value: serde_json::Value = serde_json::from_slice(&out)?;

    assert_eq!(value["summary"]["todo_count"], 3);
    assert_eq!(value["summary"]["mention_count"], 1);
    assert_eq!(value["analysis"]["word_frequency"][0]["word"], "release");
    assert_eq!(value["extraction"]["todos"][0]["pattern_matched"], "TODO:");
    assert_eq!(value["extraction"]["todos"][0]["line_number"], 8);
    Ok(())
}

#[test]
fn test_batch_csv_has_one_row_per_document() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let config = Config::default();
    let files = collect_note_files(temp_dir.path(), true, &[".git"])?;
    let batch = process_files(files, &config, Stages::default())?;

    let mut out = Vec::new();
    write_batch(&mut out, &batch, ExportFormat::Csv, &config.export)?;

    let mut rdr = csv::Reader::from_reader(out.as_slice());
    let headers: Vec<String> = rdr.headers()?.iter().map(String::from).collect();
    assert_eq!(headers, CSV_COLUMNS.map(String::from).to_vec());

    let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
    assert_eq!(rows.len(), 4);
    let todo_counts: Vec<&str> = rows.iter().filter_map(|row| row.get(9)).collect();
    assert_eq!(todo_counts, vec!["0", "3", "1", "1"]);
    Ok(())
}
