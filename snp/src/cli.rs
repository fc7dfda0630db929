// src/cli.rs
use anyhow::{Context as _, Result, bail};
use clap::Parser;
use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::core::scanner::{collect_note_files, read_document};
use crate::core::watch::{ChangeEvent, PollWatcher};
use crate::export::{ExportFormat, write_batch, write_document};
use crate::pipeline::{Stages, process_document, process_files};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Note file to parse
    #[arg(short, long, conflicts_with = "directory")]
    pub file: Option<PathBuf>,

    /// Directory of notes to parse as a batch
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Descend into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Write the export here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Export format (defaults to the configured `default_format`)
    #[arg(short = 't', long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Run the analysis stage (word frequency, readability, sentiment)
    #[arg(short, long)]
    pub analyze: bool,

    /// Add a summary to each document
    #[arg(short, long)]
    pub summary: bool,

    /// Number of ranked words to keep
    #[arg(short = 'n', long)]
    pub top: Option<usize>,

    /// Include the raw note text in the export
    #[arg(long)]
    pub include_content: bool,

    /// Configuration file (otherwise `.snp.toml`, `.snp.yaml`, `.snp.yml` or
    /// `.snp.json` in the working directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directories to exclude (comma-separated)
    #[arg(short, long, default_value = ".git")]
    pub exclude: String,

    /// Keep running and reprocess files when they change
    #[arg(short, long)]
    pub watch: bool,

    /// Write the default configuration to this path and exit
    #[arg(long, value_name = "PATH")]
    pub init_config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    fn stages(&self) -> Stages {
        Stages {
            analysis: self.analyze,
            summary: self.summary,
        }
    }

    fn exclude_dirs(&self) -> Vec<&str> {
        self.exclude
            .split(',')
            .map(str::trim)
            .filter(|dir| !dir.is_empty())
            .collect()
    }
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // A second call (tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .try_init();
}

/// Loads the configuration and applies command-line overrides.
///
/// # Errors
///
/// This function may return an error if:
/// * The configuration file cannot be read or holds invalid values
/// * `--top` is zero
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration: {}", path.display()))?,
        None => Config::discover(&env::current_dir()?)
            .context("Failed to load configuration from the working directory")?,
    };
    if let Some(top) = args.top {
        config = config
            .with_word_frequency_top_n(top)
            .context("Invalid --top value")?;
    }
    if args.include_content {
        config = config.with_include_content(true);
    }
    Ok(config)
}

pub fn run(args: Args) -> Result<()> {
    if let Some(path) = &args.init_config {
        Config::default()
            .write_to(path)
            .with_context(|| format!("Failed to write configuration: {}", path.display()))?;
        info!(path = %path.display(), "wrote default configuration");
        return Ok(());
    }

    let config = resolve_config(&args)?;
    let format = args.format.unwrap_or(config.export.default_format);

    match (&args.file, &args.directory) {
        (Some(file), _) => {
            export_file(file, &config, &args, format)?;
            if args.watch {
                let mut watcher = PollWatcher::default();
                watcher.watch_file(file);
                watch_loop(watcher, &config, &args, format);
            }
        }
        (None, Some(dir)) => {
            export_directory(dir, &config, &args, format)?;

            if args.watch {
                let mut watcher = PollWatcher::default();
                watcher
                    .watch_directory(dir, args.recursive, &args.exclude_dirs())
                    .with_context(|| format!("Failed to watch directory: {}", dir.display()))?;
                watch_loop(watcher, &config, &args, format);
            }
        }
        (None, None) => bail!("Nothing to do: pass --file, --directory or --init-config"),
    }

    Ok(())
}

fn export_file(path: &Path, config: &Config, args: &Args, format: ExportFormat) -> Result<()> {
    let raw = read_document(path)?;
    let doc = process_document(&raw, config, args.stages())
        .with_context(|| format!("Failed to process file: {}", path.display()))?;
    let out = open_output(args.output.as_deref())?;
    write_document(out, &doc, format, &config.export).context("Failed to write export")?;
    Ok(())
}

fn export_directory(dir: &Path, config: &Config, args: &Args, format: ExportFormat) -> Result<()> {
    let paths = collect_note_files(dir, args.recursive, &args.exclude_dirs())
        .with_context(|| format!("Failed to scan directory: {}", dir.display()))?;
    let batch = process_files(paths, config, args.stages())
        .with_context(|| format!("Failed to process directory: {}", dir.display()))?;
    let out = open_output(args.output.as_deref())?;
    write_batch(out, &batch, format, &config.export).context("Failed to write export")?;
    Ok(())
}

/// Re-exports after a change. A `--directory` run rebuilds and rewrites the
/// whole batch, so the output keeps its schema and every note; a `--file`
/// run re-exports the changed file.
///
/// # Errors
///
/// This function may return an error if:
/// * A note cannot be read or the directory cannot be scanned
/// * The export cannot be written
pub fn handle_change(
    event: &ChangeEvent,
    config: &Config,
    args: &Args,
    format: ExportFormat,
) -> Result<()> {
    info!(path = %event.path.display(), kind = ?event.kind, "file changed");
    match (&args.file, &args.directory) {
        (None, Some(dir)) => export_directory(dir, config, args, format),
        _ => export_file(&event.path, config, args, format),
    }
}

/// Handles each change as it is reported. Never returns.
fn watch_loop(watcher: PollWatcher, config: &Config, args: &Args, format: ExportFormat) {
    info!("watching for changes (Ctrl+C to stop)");
    for event in watcher {
        if let Err(err) = handle_change(&event, config, args, format) {
            warn!("{err:#}");
        }
    }
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("Failed to create output file: {}", path.display())
        })?)),
        None => Box::new(io::stdout().lock()),
    })
}
