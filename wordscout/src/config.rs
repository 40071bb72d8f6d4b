use config::{Config as ConfigBuilder, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::errors::PuzzleError;
use crate::properties::GridSize;

/// Configuration of a puzzle run.
///
/// # Configuration Locations
///
/// The configuration can be loaded from multiple locations in order of precedence:
/// 1. Custom config file specified via `--config` flag
/// 2. Local `.wordscout.yaml` in the current directory
/// 3. Global `$HOME/.config/wordscout/config.yaml`
///
/// # Configuration Format
///
/// The configuration uses YAML format. Example:
/// ```yaml
/// # Size of the random grid of letters, "HxW"
/// grid_size: "50x50"
///
/// # Single word to search for (takes precedence over the words file)
/// word: "foo"
///
/// # Words file, and how many random words to pick from it
/// words_file_path: "payload/words.txt"
/// words_limit: 5
///
/// # How a batch of words runs (pool, cooperative, sequential)
/// execution_mode: "pool"
///
/// # Worker count for the pool mode (default: CPU cores)
/// thread_count: 4
///
/// # Seed for a reproducible grid
/// seed: 42
///
/// # Log level (trace, debug, info, warn, error)
/// log_level: "info"
/// ```
///
/// Every field has a default, so an empty file is a valid configuration.
/// Command-line arguments take precedence over file values, see
/// [`PuzzleConfig::merge_with_cli`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Size of the random grid of letters
    #[serde(default)]
    pub grid_size: GridSize,

    /// A single word to search for
    #[serde(default)]
    pub word: Option<String>,

    /// Text file with words to pick from when no single word is given
    #[serde(default = "default_words_file_path")]
    pub words_file_path: PathBuf,

    /// Number of random words picked from the words file
    #[serde(default = "default_words_limit")]
    pub words_limit: usize,

    /// How a batch of words is executed
    #[serde(default)]
    pub execution_mode: ExecutionMode,

    /// Number of workers for the pool mode
    /// Defaults to number of CPU cores if not specified
    #[serde(default = "default_thread_count")]
    pub thread_count: NonZeroUsize,

    /// Seed of the grid generator, random if not specified
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// How a batch of words is searched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Rayon worker pool
    #[default]
    Pool,
    /// Tasks on a single-threaded Tokio runtime, joined in input order
    Cooperative,
    /// One word after the other
    Sequential,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExecutionMode::Pool => "pool",
            ExecutionMode::Cooperative => "cooperative",
            ExecutionMode::Sequential => "sequential",
        };
        f.write_str(name)
    }
}

impl FromStr for ExecutionMode {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pool" => Ok(ExecutionMode::Pool),
            "cooperative" => Ok(ExecutionMode::Cooperative),
            "sequential" => Ok(ExecutionMode::Sequential),
            other => Err(PuzzleError::config_error(format!(
                "Unknown execution mode \"{}\" (expected pool, cooperative or sequential)",
                other
            ))),
        }
    }
}

fn default_words_file_path() -> PathBuf {
    PathBuf::from("payload/words.txt")
}

fn default_words_limit() -> usize {
    5
}

fn default_thread_count() -> NonZeroUsize {
    NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            grid_size: GridSize::default(),
            word: None,
            words_file_path: default_words_file_path(),
            words_limit: default_words_limit(),
            execution_mode: ExecutionMode::default(),
            thread_count: default_thread_count(),
            seed: None,
            log_level: default_log_level(),
        }
    }
}

impl PuzzleConfig {
    /// Loads configuration from the default locations, then from `config_path`.
    ///
    /// The default locations are optional, `config_path` must exist.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let default_files = [
            // Global config
            dirs::config_dir().map(|p| p.join("wordscout/config.yaml")),
            // Local config
            Some(PathBuf::from(".wordscout.yaml")),
        ];

        for path in default_files.iter().flatten() {
            if path.exists() {
                builder = builder.add_source(File::from(path.as_path()));
            }
        }

        // Custom config is required
        if let Some(path) = config_path {
            builder = builder.add_source(File::from(path));
        }

        builder.build()?.try_deserialize()
    }

    /// Merges CLI arguments with configuration file values
    pub fn merge_with_cli(mut self, cli_config: CliOverrides) -> Self {
        // CLI values take precedence over config file values
        if let Some(grid_size) = cli_config.grid_size {
            self.grid_size = grid_size;
        }
        if cli_config.word.is_some() {
            self.word = cli_config.word;
        }
        if let Some(path) = cli_config.words_file_path {
            self.words_file_path = path;
        }
        if let Some(limit) = cli_config.words_limit {
            self.words_limit = limit;
        }
        if let Some(mode) = cli_config.execution_mode {
            self.execution_mode = mode;
        }
        if let Some(threads) = cli_config.thread_count {
            self.thread_count = threads;
        }
        if cli_config.seed.is_some() {
            self.seed = cli_config.seed;
        }
        if let Some(level) = cli_config.log_level {
            self.log_level = level;
        }
        self
    }
}

/// Values given on the command line; `None` keeps the configured value
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub grid_size: Option<GridSize>,
    pub word: Option<String>,
    pub words_file_path: Option<PathBuf>,
    pub words_limit: Option<usize>,
    pub execution_mode: Option<ExecutionMode>,
    pub thread_count: Option<NonZeroUsize>,
    pub seed: Option<u64>,
    pub log_level: Option<String>,
}
