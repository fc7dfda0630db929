// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub const MEETING_NOTE: &str = "\
---
tags: [meetings, Q3]
---
# Weekly sync
## Decisions
We agreed the release is a great success. Deployment of the release went well!
Ping @Priya about the #infra budget and #release notes.
TODO: send minutes to the team
FIXME: dashboard link is broken
- [ ] book the retro room
See https://Wiki.Example.com/Team/Sync for history.
";

pub const PLAIN_NOTE: &str = "\
SHOPPING LIST
milk, eggs and bread
todo buy coffee asap
";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, ".snpignore", &content)
}

/// A notes directory with markdown and text notes, a nested folder, a
/// hidden note, a non-note file and an excluded `.git` folder.
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "meeting.md", MEETING_NOTE)?;
    create_test_file(temp_dir.path(), "shopping.txt", PLAIN_NOTE)?;
    create_test_file(
        temp_dir.path(),
        "projects/ideas.markdown",
        "# Ideas\nTry #rust for the #infra tooling.\nTODO: prototype\n",
    )?;
    create_test_file(temp_dir.path(), "drafts/draft.md", "Draft #wip\n")?;
    create_test_file(temp_dir.path(), ".hidden.md", "TODO: never seen\n")?;
    create_test_file(temp_dir.path(), "attachment.pdf", "%PDF-1.4")?;
    create_test_file(temp_dir.path(), ".git/HEAD.md", "TODO: not a note\n")?;

    Ok(temp_dir)
}
