// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, bail};
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug)]
struct Rule {
    /// One glob per brace alternative.
    globs: Vec<Pattern>,
    negated: bool,
    /// Anchored rules match a leading run of path components; the rest match
    /// any single component.
    anchored: bool,
    dir_only: bool,
}

impl Rule {
    fn matches(&self, components: &[String], is_dir: bool) -> bool {
        let last = components.len().saturating_sub(1);
        let mut prefix = String::new();
        for (index, component) in components.iter().enumerate() {
            if !prefix.is_empty() {
                prefix.push('/');
            }
            prefix.push_str(component);

            if self.dir_only && index == last && !is_dir {
                break;
            }
            let candidate = if self.anchored {
                prefix.as_str()
            } else {
                component.as_str()
            };
            if self
                .globs
                .iter()
                .any(|glob| glob.matches_with(candidate, MATCH_OPTIONS))
            {
                return true;
            }
        }
        false
    }
}

/// Ordered ignore rules. When several rules match a path the last one
/// decides, so a later `!rule` re-includes what an earlier rule excluded.
#[derive(Debug, Default)]
pub struct Patterns {
    root: PathBuf,
    rules: Vec<Rule>,
}

impl Patterns {
    /// Rules whose relative paths are resolved against `root`.
    #[inline]
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            rules: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds one line of an ignore file.
    ///
    /// Supported forms:
    /// - `# comment` and blank lines (skipped)
    /// - `!pattern` negation
    /// - `dir/` matches directories only
    /// - `/pattern` and `a/b` are anchored to the root
    /// - `*.{md,txt}` brace alternatives
    ///
    /// # Errors
    ///
    /// Returns an error if the glob syntax is invalid, braces are unbalanced
    /// or the rule is empty after stripping `!` and `/`.
    #[inline]
    pub fn add_pattern(&mut self, line: &str) -> Result<()> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(());
        }

        let (body, negated) = line
            .strip_prefix('!')
            .map_or((line, false), |rest| (rest, true));
        let (body, dir_only) = body
            .strip_suffix('/')
            .map_or((body, false), |rest| (rest, true));
        let (body, rooted) = body
            .strip_prefix('/')
            .map_or((body, false), |rest| (rest, true));
        if body.is_empty() {
            bail!("Invalid pattern: {line}");
        }

        let globs = expand_braces(body)?
            .iter()
            .map(|expanded| {
                Pattern::new(expanded).with_context(|| format!("Invalid pattern: {expanded}"))
            })
            .collect::<Result<Vec<_>>>()?;

        self.rules.push(Rule {
            globs,
            negated,
            anchored: rooted || body.contains('/'),
            dir_only,
        });
        Ok(())
    }

    /// `true` when the file at `path` is ignored.
    #[inline]
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        self.is_ignored(path.as_ref(), false)
    }

    /// `true` when `path` is ignored. Absolute paths under the root are
    /// made relative first; anything else is taken as already relative.
    #[must_use]
    pub fn is_ignored(&self, path: &Path, is_dir: bool) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let components: Vec<String> = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if components.is_empty() {
            return false;
        }

        self.rules
            .iter()
            .rev()
            .find(|rule| rule.matches(&components, is_dir))
            .is_some_and(|rule| !rule.negated)
    }
}

/// Expands `{a,b}` groups left to right; `x{a,b}y{1,2}` gives four globs.
fn expand_braces(pattern: &str) -> Result<Vec<String>> {
    let Some((prefix, rest)) = pattern.split_once('{') else {
        if pattern.contains('}') {
            bail!("Invalid pattern: missing opening brace in {pattern}");
        }
        return Ok(vec![pattern.to_owned()]);
    };
    if prefix.contains('}') {
        bail!("Invalid pattern: missing opening brace in {pattern}");
    }
    let Some((alternatives, suffix)) = rest.split_once('}') else {
        bail!("Invalid pattern: missing closing brace in {pattern}");
    };

    let tails = expand_braces(suffix)?;
    let mut expanded = Vec::new();
    for alternative in alternatives.split(',').map(str::trim) {
        for tail in &tails {
            expanded.push(format!("{prefix}{alternative}{tail}"));
        }
    }
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_patterns_match_nothing() {
        let patterns = Patterns::new(PathBuf::from("/test"));
        assert!(!patterns.matches("file.txt"));
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_simple_file_pattern() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("*.txt")?;
        assert!(patterns.matches("file.txt"));
        assert!(patterns.matches("deep/nested/file.txt"));
        assert!(!patterns.matches("file.md"));
        Ok(())
    }

    #[test]
    fn test_directory_pattern() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("drafts/")?;

        assert!(
            patterns.matches("drafts/idea.md"),
            "Should match file directly in drafts"
        );
        assert!(
            patterns.matches("projects/drafts/idea.md"),
            "Should match drafts in subdirectory"
        );
        assert!(
            patterns.is_ignored(Path::new("projects/drafts"), true),
            "Should match the directory itself"
        );
        assert!(
            !patterns.matches("drafts"),
            "A file named like the directory is not ignored"
        );
        assert!(
            !patterns.matches("draft/idea.md"),
            "Should not match directory with similar name"
        );
        Ok(())
    }

    #[test]
    fn test_negation_last_match_wins() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("*.txt")?;
        patterns.add_pattern("!important.txt")?;
        assert!(patterns.matches("file.txt"));
        assert!(!patterns.matches("important.txt"));

        patterns.add_pattern("important.*")?;
        assert!(patterns.matches("important.txt"));
        Ok(())
    }

    #[test]
    fn test_anchored_path_pattern() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("/inbox.md")?;
        patterns.add_pattern("journal/*.md")?;

        assert!(patterns.matches("inbox.md"), "Should match anchored path at root");
        assert!(
            !patterns.matches("archive/inbox.md"),
            "Should not match anchored path in subdirectory"
        );
        assert!(patterns.matches("journal/2024-01-01.md"));
        assert!(!patterns.matches("work/journal/2024-01-01.md"));
        assert!(
            !patterns.matches("journal/2024/01.md"),
            "A single star does not cross directories"
        );
        Ok(())
    }

    #[test]
    fn test_brace_alternatives() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("*.{bak,tmp}")?;
        assert!(patterns.matches("note.bak"));
        assert!(patterns.matches("note.tmp"));
        assert!(!patterns.matches("note.md"));
        Ok(())
    }

    #[test]
    fn test_unbalanced_braces_are_errors() {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        assert!(patterns.add_pattern("*.{md,txt").is_err());
        assert!(patterns.add_pattern("*.md}").is_err());
        assert!(patterns.add_pattern("!/").is_err());
        assert!(patterns.is_empty());
    }

    #[test]
    fn test_double_star_pattern() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("**/temp/**")?;
        assert!(patterns.matches("temp/file.txt"));
        assert!(patterns.matches("src/temp/file.txt"));
        assert!(patterns.matches("src/temp/subfolder/file.txt"));
        assert!(!patterns.matches("src/temporary/file.txt"));
        Ok(())
    }

    #[test]
    fn test_comment_and_empty_lines() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("")?;
        patterns.add_pattern("# This is a comment")?;
        assert!(patterns.is_empty());
        patterns.add_pattern("*.txt")?;
        assert!(patterns.matches("file.txt"));
        Ok(())
    }

    #[test]
    fn test_bare_filename_pattern() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/test"));
        patterns.add_pattern("TODO-CHORES.md")?;

        assert!(patterns.matches("TODO-CHORES.md"), "Should match exact filename at root");
        assert!(
            patterns.matches("subdir/TODO-CHORES.md"),
            "Should match filename in subdirectory"
        );
        assert!(
            !patterns.matches("NOT-TODO-CHORES.md"),
            "Should not match similar filenames"
        );
        Ok(())
    }

    #[test]
    fn test_absolute_paths_under_root() -> Result<()> {
        let mut patterns = Patterns::new(PathBuf::from("/notes"));
        patterns.add_pattern("/private/")?;
        assert!(patterns.matches("/notes/private/diary.md"));
        assert!(!patterns.matches("/notes/public/private.md"));
        Ok(())
    }
}
