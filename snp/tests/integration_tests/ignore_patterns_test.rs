// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_ignore_file, setup_test_directory};
use anyhow::Result;
use snp::core::ignore::load_ignore_patterns;

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    create_ignore_file(
        temp_dir.path(),
        &[
            "# Comment line",
            "*.tmp",
            "drafts/",
            "!drafts/important.md",
            "cache/",
            "*.{log,cache,bak}",
            "/inbox.md", // 'inbox.md' at the root only
            "templates/**/*.md",
        ],
    )?;

    let patterns = load_ignore_patterns(temp_dir.path())?;

    assert!(patterns.matches("test.tmp"), "Should match *.tmp pattern");
    assert!(patterns.matches("drafts/test.md"), "Should match drafts/ pattern");
    assert!(
        !patterns.matches("drafts/important.md"),
        "Should respect negation pattern"
    );
    assert!(!patterns.matches("test.md"), "Should not match non-ignored file");
    assert!(patterns.matches("test.log"), "Should match brace alternatives");
    assert!(patterns.matches("test.cache"), "Should match brace alternatives");
    assert!(
        patterns.matches("templates/weekly/plan.md"),
        "Should match globstar pattern"
    );
    assert!(
        !patterns.matches("notes/templates.md"),
        "Should not match files outside templates/"
    );
    assert!(patterns.matches("inbox.md"), "Should match anchored path at root");
    assert!(
        !patterns.matches("archive/inbox.md"),
        "Should not match anchored path in subdirectory"
    );

    Ok(())
}

#[test]
fn test_comment_only_ignore_file() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(
        temp_dir.path(),
        &["# Comment 1", "", "  # Comment 2  ", "     "],
    )?;

    let patterns = load_ignore_patterns(temp_dir.path())?;
    assert!(patterns.is_empty(), "Comments should not add rules");
    Ok(())
}

#[test]
fn test_invalid_ignore_file_is_an_error() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_ignore_file(temp_dir.path(), &["*.{md,txt"])?;
    assert!(load_ignore_patterns(temp_dir.path()).is_err());
    Ok(())
}
