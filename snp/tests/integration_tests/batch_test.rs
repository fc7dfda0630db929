// tests/integration_tests/batch_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use pretty_assertions::assert_eq;
use snp::core::scanner::collect_note_files;
use snp::{Config, Stages, process_files};
use std::path::{Path, PathBuf};

fn relative(paths: &[PathBuf], root: &Path) -> Vec<String> {
    paths
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .map(|path| path.to_string_lossy().replace('\\', "/"))
        .collect()
}

#[test]
fn test_scan_order_and_filters() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let top_level = collect_note_files(temp_dir.path(), false, &[".git"])?;
    assert_eq!(
        relative(&top_level, temp_dir.path()),
        vec!["meeting.md", "shopping.txt"]
    );

    let all = collect_note_files(temp_dir.path(), true, &[".git"])?;
    assert_eq!(
        relative(&all, temp_dir.path()),
        vec![
            "drafts/draft.md",
            "meeting.md",
            "projects/ideas.markdown",
            "shopping.txt"
        ]
    );
    Ok(())
}

#[test]
fn test_ignore_file_applies_to_scan() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["drafts/", "*.txt"])?;

    let files = collect_note_files(temp_dir.path(), true, &[])?;
    assert_eq!(
        relative(&files, temp_dir.path()),
        vec!["meeting.md", "projects/ideas.markdown"]
    );
    Ok(())
}

#[test]
fn test_batch_totals() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let files = collect_note_files(temp_dir.path(), true, &[".git"])?;
    let batch = process_files(
        files.clone(),
        &Config::default(),
        Stages {
            analysis: true,
            summary: true,
        },
    )?;

    let order: Vec<PathBuf> = batch
        .documents
        .iter()
        .map(|doc| doc.source.path.clone())
        .collect();
    assert_eq!(order, files, "Batch keeps traversal order");

    assert_eq!(batch.totals.total_files, 4);
    // meeting: 3, shopping: 1, ideas: 1, draft: 0
    assert_eq!(batch.totals.total_todos, 5);
    let tags: Vec<&str> = batch.totals.tags.iter().map(String::as_str).collect();
    assert_eq!(
        tags,
        vec!["infra", "meetings", "q3", "release", "rust", "wip"]
    );
    assert_eq!(batch.totals.total_tags, 6);
    assert!(batch.documents.iter().all(|doc| doc.summary.is_some()));
    Ok(())
}

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let files = collect_note_files(temp_dir.path(), true, &[])?;
    let batch = process_files(files, &Config::default(), Stages::default())?;
    assert_eq!(batch.totals.total_files, 0);
    assert!(batch.totals.tags.is_empty());
    Ok(())
}
