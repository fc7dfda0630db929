// src/config.rs
//! Configuration loading, merging with defaults, and validation.
//!
//! A configuration file may be TOML, YAML or JSON. Options are grouped in
//! `[parsing]`, `[analysis]`, `[export]` and `[summary]` sections; the six
//! core options may also be given as top-level keys. A key inside its
//! section wins over the same key at the top level. Unset options take
//! their defaults and unknown keys are ignored.
//!
//! All range checks happen here, so a bad value is reported before any
//! document is parsed.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::core::analyze::{DEFAULT_NEGATIVE_WORDS, DEFAULT_POSITIVE_WORDS, DEFAULT_URGENT_WORDS};
use crate::export::ExportFormat;

/// File names searched, in order, when no config path is given.
pub const CONFIG_FILE_NAMES: [&str; 4] = [".snp.toml", ".snp.yaml", ".snp.yml", ".snp.json"];

pub const DEFAULT_TODO_PATTERNS: [&str; 3] = ["TODO:", "FIXME:", "NOTE:"];
pub const DEFAULT_WORD_FREQUENCY_TOP_N: usize = 20;
pub const DEFAULT_KEY_PHRASES_TOP_N: usize = 8;
pub const DEFAULT_CSV_DELIMITER: char = ',';
pub const DEFAULT_MAX_CONTENT_PREVIEW: usize = 0;
pub const DEFAULT_MAX_TAGS_SHOWN: usize = 10;
pub const DEFAULT_MAX_KEYWORDS_SHOWN: usize = 8;
pub const DEFAULT_TOP_WORDS_SHOWN: usize = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to write TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("YAML config error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON config error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config file type: {} (expected .toml, .yaml, .yml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

/// Fully resolved, validated configuration.
///
/// Passed by reference into every core call; nothing in the crate keeps a
/// process-wide copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Config {
    pub parsing: ParsingConfig,
    pub analysis: AnalysisConfig,
    pub export: ExportConfig,
    pub summary: SummaryConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsingConfig {
    pub custom_todo_patterns: Vec<String>,
    pub extract_urls: bool,
    pub extract_emails: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisConfig {
    pub word_frequency_top_n: usize,
    pub key_phrases_top_n: usize,
    pub include_stop_words: bool,
    #[serde(flatten)]
    pub sentiment: SentimentLexicon,
}

/// Word lists counted as sentiment indicators. Entries are lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentLexicon {
    #[serde(rename = "positive_words")]
    pub positive: BTreeSet<String>,
    #[serde(rename = "negative_words")]
    pub negative: BTreeSet<String>,
    #[serde(rename = "urgent_words")]
    pub urgent: BTreeSet<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportConfig {
    pub default_format: ExportFormat,
    pub include_content: bool,
    pub csv_delimiter: char,
    /// Characters of content kept in the CSV `content` column, 0 = all.
    pub max_content_preview: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryConfig {
    pub max_tags_shown: usize,
    pub max_keywords_shown: usize,
    pub top_words_shown: usize,
    pub include_top_words: bool,
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            custom_todo_patterns: DEFAULT_TODO_PATTERNS.map(String::from).to_vec(),
            extract_urls: true,
            extract_emails: false,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            word_frequency_top_n: DEFAULT_WORD_FREQUENCY_TOP_N,
            key_phrases_top_n: DEFAULT_KEY_PHRASES_TOP_N,
            include_stop_words: false,
            sentiment: SentimentLexicon::default(),
        }
    }
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: word_set(DEFAULT_POSITIVE_WORDS),
            negative: word_set(DEFAULT_NEGATIVE_WORDS),
            urgent: word_set(DEFAULT_URGENT_WORDS),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: ExportFormat::Json,
            include_content: false,
            csv_delimiter: DEFAULT_CSV_DELIMITER,
            max_content_preview: DEFAULT_MAX_CONTENT_PREVIEW,
        }
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            max_tags_shown: DEFAULT_MAX_TAGS_SHOWN,
            max_keywords_shown: DEFAULT_MAX_KEYWORDS_SHOWN,
            top_words_shown: DEFAULT_TOP_WORDS_SHOWN,
            include_top_words: true,
        }
    }
}

fn word_set<'a>(words: impl IntoIterator<Item = &'a str>) -> BTreeSet<String> {
    words
        .into_iter()
        .map(|word| word.trim().to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

// Shapes of the file on disk. Everything is optional and loosely typed so
// that range violations become `InvalidValue` instead of parse errors.

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    parsing: ParsingSection,
    analysis: AnalysisSection,
    export: ExportSection,
    summary: SummarySection,
    custom_todo_patterns: Option<Vec<String>>,
    extract_urls: Option<bool>,
    word_frequency_top_n: Option<i64>,
    include_stop_words: Option<bool>,
    default_format: Option<String>,
    include_content: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ParsingSection {
    custom_todo_patterns: Option<Vec<String>>,
    extract_urls: Option<bool>,
    extract_emails: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalysisSection {
    word_frequency_top_n: Option<i64>,
    key_phrases_top_n: Option<i64>,
    include_stop_words: Option<bool>,
    positive_words: Option<Vec<String>>,
    negative_words: Option<Vec<String>>,
    urgent_words: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ExportSection {
    default_format: Option<String>,
    include_content: Option<bool>,
    csv_delimiter: Option<String>,
    max_content_preview: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SummarySection {
    max_tags_shown: Option<i64>,
    max_keywords_shown: Option<i64>,
    top_words_shown: Option<i64>,
    include_top_words: Option<bool>,
}

fn positive(key: &'static str, value: Option<i64>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) if raw >= 1 => usize::try_from(raw).map_err(|_| ConfigError::InvalidValue {
            key,
            reason: format!("{raw} is too large"),
        }),
        Some(raw) => Err(ConfigError::InvalidValue {
            key,
            reason: format!("expected a positive integer, got {raw}"),
        }),
    }
}

fn non_negative(
    key: &'static str,
    value: Option<i64>,
    default: usize,
) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(raw) => usize::try_from(raw).map_err(|_| ConfigError::InvalidValue {
            key,
            reason: format!("expected a non-negative integer, got {raw}"),
        }),
    }
}

fn delimiter(value: Option<String>) -> Result<char, ConfigError> {
    let Some(raw) = value else {
        return Ok(DEFAULT_CSV_DELIMITER);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() && c != '"' && c != '\n' && c != '\r' => Ok(c),
        _ => Err(ConfigError::InvalidValue {
            key: "csv_delimiter",
            reason: format!("expected a single ASCII character, got {raw:?}"),
        }),
    }
}

fn todo_patterns(value: Option<Vec<String>>) -> Result<Vec<String>, ConfigError> {
    let Some(patterns) = value else {
        return Ok(DEFAULT_TODO_PATTERNS.map(String::from).to_vec());
    };

    let mut seen = BTreeSet::new();
    let mut ordered = Vec::with_capacity(patterns.len());
    for pattern in patterns {
        let pattern = pattern.trim().to_owned();
        if pattern.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: "custom_todo_patterns",
                reason: String::from("markers must not be empty"),
            });
        }
        if seen.insert(pattern.to_lowercase()) {
            ordered.push(pattern);
        }
    }
    Ok(ordered)
}

impl ConfigFile {
    fn resolve(self) -> Result<Config, ConfigError> {
        let Self {
            parsing,
            analysis,
            export,
            summary,
            custom_todo_patterns,
            extract_urls,
            word_frequency_top_n,
            include_stop_words,
            default_format,
            include_content,
        } = self;

        let defaults = Config::default();

        let default_format = match export.default_format.or(default_format) {
            None => defaults.export.default_format,
            Some(raw) => raw.parse().map_err(|reason| ConfigError::InvalidValue {
                key: "default_format",
                reason,
            })?,
        };

        let sentiment = SentimentLexicon {
            positive: analysis
                .positive_words
                .map_or(defaults.analysis.sentiment.positive, |words| {
                    word_set(words.iter().map(String::as_str))
                }),
            negative: analysis
                .negative_words
                .map_or(defaults.analysis.sentiment.negative, |words| {
                    word_set(words.iter().map(String::as_str))
                }),
            urgent: analysis
                .urgent_words
                .map_or(defaults.analysis.sentiment.urgent, |words| {
                    word_set(words.iter().map(String::as_str))
                }),
        };

        Ok(Config {
            parsing: ParsingConfig {
                custom_todo_patterns: todo_patterns(
                    parsing.custom_todo_patterns.or(custom_todo_patterns),
                )?,
                extract_urls: parsing
                    .extract_urls
                    .or(extract_urls)
                    .unwrap_or(defaults.parsing.extract_urls),
                extract_emails: parsing
                    .extract_emails
                    .unwrap_or(defaults.parsing.extract_emails),
            },
            analysis: AnalysisConfig {
                word_frequency_top_n: positive(
                    "word_frequency_top_n",
                    analysis.word_frequency_top_n.or(word_frequency_top_n),
                    DEFAULT_WORD_FREQUENCY_TOP_N,
                )?,
                key_phrases_top_n: positive(
                    "key_phrases_top_n",
                    analysis.key_phrases_top_n,
                    DEFAULT_KEY_PHRASES_TOP_N,
                )?,
                include_stop_words: analysis
                    .include_stop_words
                    .or(include_stop_words)
                    .unwrap_or(defaults.analysis.include_stop_words),
                sentiment,
            },
            export: ExportConfig {
                default_format,
                include_content: export
                    .include_content
                    .or(include_content)
                    .unwrap_or(defaults.export.include_content),
                csv_delimiter: delimiter(export.csv_delimiter)?,
                max_content_preview: non_negative(
                    "max_content_preview",
                    export.max_content_preview,
                    DEFAULT_MAX_CONTENT_PREVIEW,
                )?,
            },
            summary: SummaryConfig {
                max_tags_shown: positive(
                    "max_tags_shown",
                    summary.max_tags_shown,
                    DEFAULT_MAX_TAGS_SHOWN,
                )?,
                max_keywords_shown: positive(
                    "max_keywords_shown",
                    summary.max_keywords_shown,
                    DEFAULT_MAX_KEYWORDS_SHOWN,
                )?,
                top_words_shown: positive(
                    "top_words_shown",
                    summary.top_words_shown,
                    DEFAULT_TOP_WORDS_SHOWN,
                )?,
                include_top_words: summary
                    .include_top_words
                    .unwrap_or(defaults.summary.include_top_words),
            },
        })
    }
}

impl Config {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str::<ConfigFile>(source)?.resolve()
    }

    /// Parses and validates a YAML document. An empty document yields the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or a value is out of range.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml_ng::from_str::<ConfigFile>(source)?.resolve()
    }

    /// Parses and validates a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a value is out of range.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        serde_json::from_str::<ConfigFile>(source)?.resolve()
    }

    /// Loads a configuration file, choosing the parser by extension.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The file cannot be read
    /// * The extension is not `.toml`, `.yaml`, `.yml` or `.json`
    /// * The content does not parse or holds an invalid value
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let kind = FileKind::from_path(path)?;
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading configuration");

        match kind {
            FileKind::Toml => Self::from_toml_str(&source),
            FileKind::Yaml => Self::from_yaml_str(&source),
            FileKind::Json => Self::from_json_str(&source),
        }
    }

    /// Looks for one of [`CONFIG_FILE_NAMES`] in `dir` and loads the first
    /// one found, falling back to the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file is found but cannot be loaded.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        for name in CONFIG_FILE_NAMES {
            let candidate = dir.join(name);
            if candidate.is_file() {
                info!(path = %candidate.display(), "using configuration file");
                return Self::load(&candidate);
            }
        }
        debug!(dir = %dir.display(), "no configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Overrides `word_frequency_top_n`, applying the same check as the file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `top_n` is zero.
    pub fn with_word_frequency_top_n(self, top_n: usize) -> Result<Self, ConfigError> {
        if top_n == 0 {
            return Err(ConfigError::InvalidValue {
                key: "word_frequency_top_n",
                reason: String::from("expected a positive integer, got 0"),
            });
        }
        Ok(Self {
            analysis: AnalysisConfig {
                word_frequency_top_n: top_n,
                ..self.analysis
            },
            ..self
        })
    }

    #[must_use]
    pub fn with_include_content(self, include_content: bool) -> Self {
        Self {
            export: ExportConfig {
                include_content,
                ..self.export
            },
            ..self
        }
    }

    /// Serializes this configuration in the format implied by `path` and
    /// writes it there.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported, serialization
    /// fails, or the file cannot be written.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        let rendered = match FileKind::from_path(path)? {
            FileKind::Toml => toml::to_string_pretty(self)?,
            FileKind::Yaml => serde_yaml_ng::to_string(self)?,
            FileKind::Json => serde_json::to_string_pretty(self)?,
        };
        fs::write(path, rendered).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum FileKind {
    Toml,
    Yaml,
    Json,
}

impl FileKind {
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}
