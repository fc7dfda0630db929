// src/core/watch.rs
//! Polling file watcher.
//!
//! Targets are re-scanned on every poll and compared with the previous
//! snapshot by modification time and size. Iterating a [`PollWatcher`]
//! blocks between polls and never ends.

use anyhow::Result;
use std::collections::{HashMap, HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::{Duration, Instant, SystemTime};
use tracing::{debug, warn};

use crate::core::scanner::{collect_note_files, is_note_file};

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);
/// Changes to the same file closer together than this are reported once.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Stamp {
    modified: Option<SystemTime>,
    len: u64,
}

impl Stamp {
    fn read(path: &Path) -> Option<Self> {
        let metadata = fs::metadata(path).ok()?;
        metadata.is_file().then(|| Self {
            modified: metadata.modified().ok(),
            len: metadata.len(),
        })
    }
}

#[derive(Debug)]
enum Target {
    File(PathBuf),
    Directory {
        path: PathBuf,
        recursive: bool,
        exclude_dirs: Vec<String>,
    },
}

#[derive(Debug)]
pub struct PollWatcher {
    targets: Vec<Target>,
    interval: Duration,
    debounce: Duration,
    snapshot: HashMap<PathBuf, Stamp>,
    last_reported: HashMap<PathBuf, Instant>,
    pending: VecDeque<ChangeEvent>,
}

impl Default for PollWatcher {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl PollWatcher {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            targets: Vec::new(),
            interval,
            debounce: DEFAULT_DEBOUNCE,
            snapshot: HashMap::new(),
            last_reported: HashMap::new(),
            pending: VecDeque::new(),
        }
    }

    #[must_use]
    pub fn with_debounce(self, debounce: Duration) -> Self {
        Self { debounce, ..self }
    }

    /// Watches one file. Its current state is the baseline, so only later
    /// changes are reported.
    pub fn watch_file(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(stamp) = Stamp::read(&path) {
            self.snapshot.insert(path.clone(), stamp);
        }
        debug!(path = %path.display(), "watching file");
        self.targets.push(Target::File(path));
    }

    /// Watches the note files of a directory, including files created later.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be scanned.
    pub fn watch_directory(
        &mut self,
        path: impl Into<PathBuf>,
        recursive: bool,
        exclude_dirs: &[&str],
    ) -> Result<()> {
        let path = path.into();
        for file in collect_note_files(&path, recursive, exclude_dirs)? {
            if let Some(stamp) = Stamp::read(&file) {
                self.snapshot.insert(file, stamp);
            }
        }
        debug!(path = %path.display(), recursive, "watching directory");
        self.targets.push(Target::Directory {
            path,
            recursive,
            exclude_dirs: exclude_dirs.iter().map(|dir| (*dir).to_owned()).collect(),
        });
        Ok(())
    }

    /// Checks every target once and returns the changes since the last
    /// check. A debounced change stays pending and is reported by a later
    /// poll.
    pub fn poll(&mut self) -> Vec<ChangeEvent> {
        let now = Instant::now();
        let files = self.current_files();
        let present: HashSet<&PathBuf> = files.iter().collect();
        self.snapshot.retain(|path, _| present.contains(path));

        let mut events = Vec::new();
        for path in files {
            let Some(stamp) = Stamp::read(&path) else {
                self.snapshot.remove(&path);
                continue;
            };
            let kind = match self.snapshot.get(&path) {
                None => ChangeKind::Created,
                Some(previous) if *previous != stamp => ChangeKind::Modified,
                Some(_) => continue,
            };
            if self
                .last_reported
                .get(&path)
                .is_some_and(|at| now.saturating_duration_since(*at) < self.debounce)
            {
                continue;
            }

            self.snapshot.insert(path.clone(), stamp);
            self.last_reported.insert(path.clone(), now);
            events.push(ChangeEvent { path, kind });
        }
        events
    }

    fn current_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for target in &self.targets {
            match target {
                Target::File(path) => files.push(path.clone()),
                Target::Directory {
                    path,
                    recursive,
                    exclude_dirs,
                } => {
                    let exclude: Vec<&str> = exclude_dirs.iter().map(String::as_str).collect();
                    match collect_note_files(path, *recursive, &exclude) {
                        Ok(found) => files.extend(found),
                        Err(err) => warn!(path = %path.display(), "{err:#}"),
                    }
                }
            }
        }
        let mut seen = HashSet::new();
        files.retain(|path| is_note_file(path) && seen.insert(path.clone()));
        files
    }
}

impl Iterator for PollWatcher {
    type Item = ChangeEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(event) = self.pending.pop_front() {
                return Some(event);
            }
            thread::sleep(self.interval);
            let events = self.poll();
            self.pending.extend(events);
        }
    }
}
