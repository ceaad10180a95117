//! Configuration structures for the clickstream dataset generator
//!
//! This module contains the generator configuration, the command line surface,
//! the optional JSON configuration file, and validation logic. Defaults
//! reproduce the canonical dataset: 10,000 users, 100,000 sessions, 500,000
//! events over a 90-day window with seed 42.

use chrono::{NaiveDateTime, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed categorical catalogs sampled during generation
pub mod catalog {
    /// Countries users are assigned to, with selection weights
    pub const COUNTRY_WEIGHTS: [(&str, f64); 10] = [
        ("US", 0.30),
        ("JP", 0.25),
        ("GB", 0.15),
        ("DE", 0.10),
        ("FR", 0.05),
        ("CA", 0.05),
        ("AU", 0.03),
        ("SG", 0.03),
        ("IN", 0.02),
        ("BR", 0.02),
    ];

    /// Probability that a generated user is active
    pub const ACTIVE_PROBABILITY: f64 = 0.8;

    /// Page paths events are drawn from, uniformly
    pub const PAGE_PATHS: [&str; 12] = [
        "/home",
        "/products",
        "/products/1",
        "/products/2",
        "/products/3",
        "/cart",
        "/checkout",
        "/about",
        "/contact",
        "/blog",
        "/blog/post-1",
        "/blog/post-2",
    ];
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "clickstream-dataset-generator",
    version = "1.0.0",
    about = "Generates a relational clickstream dataset (users, sessions, events) for analytics testing",
    long_about = "Generates three linked tables - users, sessions and events - that satisfy \
referential integrity by construction and follow fixed categorical and statistical \
distributions over a bounded time window. Output is written as users.csv, sessions.csv \
and raw_events.csv.

EXAMPLES:
    # Generate the canonical dataset in the current directory
    clickstream-dataset-generator

    # Smaller dataset with a custom seed
    clickstream-dataset-generator --user-count 100 --session-count 500 --event-count 2000 --seed 7

    # Use a configuration file
    clickstream-dataset-generator --config config.json

    # Generate a configuration template
    clickstream-dataset-generator --print-config > my-config.json

    # Validate configuration without generating anything
    clickstream-dataset-generator --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of users to generate
    #[arg(
        long,
        help = "Number of users to generate",
        long_help = "Size of the user population. Must be greater than 0. Default: 10000"
    )]
    pub user_count: Option<usize>,

    /// Number of sessions to generate
    #[arg(
        long,
        help = "Number of sessions to generate",
        long_help = "Number of sessions, each referencing a generated user. Must be greater than 0. Default: 100000"
    )]
    pub session_count: Option<usize>,

    /// Maximum number of events to generate
    #[arg(
        long,
        help = "Maximum number of events to generate",
        long_help = "Hard cap on the event table. Generation stops the moment the cap is reached. Default: 500000"
    )]
    pub event_count: Option<usize>,

    /// Historical window for session start times, in days
    #[arg(long, help = "Session window in days back from the reference time")]
    pub window_days: Option<u32>,

    /// Lookback window for user signup dates, in days
    #[arg(long, help = "Signup lookback in days back from the reference time")]
    pub signup_lookback_days: Option<u32>,

    /// Random seed for reproducible output
    #[arg(
        long,
        help = "Random seed for reproducible output",
        long_help = "Seed for both random sources. Two runs with the same seed and a pinned reference time produce byte-identical output. Default: 42"
    )]
    pub seed: Option<u64>,

    /// Directory the CSV files are written to
    #[arg(long, help = "Output directory for the generated CSV files")]
    pub output_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without generating data
    #[arg(long, help = "Validate configuration without generating data")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of users to generate
    pub user_count: Option<usize>,

    /// Number of sessions to generate
    pub session_count: Option<usize>,

    /// Maximum number of events to generate
    pub event_count: Option<usize>,

    /// Historical window for session start times, in days
    pub window_days: Option<u32>,

    /// Lookback window for user signup dates, in days
    pub signup_lookback_days: Option<u32>,

    /// Random seed for reproducible output
    pub seed: Option<u64>,

    /// Directory the CSV files are written to
    pub output_dir: Option<PathBuf>,

    /// Reference timestamp generation is anchored to
    pub reference_time: Option<NaiveDateTime>,
}

/// Configuration for a generation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of users to generate
    pub user_count: usize,

    /// Number of sessions to generate
    pub session_count: usize,

    /// Maximum number of events to generate
    pub event_count: usize,

    /// Historical window for session start times, in days
    pub window_days: u32,

    /// Lookback window for user signup dates, in days
    pub signup_lookback_days: u32,

    /// Minimum session duration in minutes
    pub min_session_minutes: i64,

    /// Maximum session duration in minutes
    pub max_session_minutes: i64,

    /// Mean of the right-skewed page view distribution
    pub mean_page_views: f64,

    /// Mean of the Poisson jitter added to per-session event counts
    pub mean_extra_events: f64,

    /// Random seed for both random sources
    pub seed: u64,

    /// Directory the CSV files are written to
    pub output_dir: PathBuf,

    /// Reference timestamp generation is anchored to ("now")
    ///
    /// Defaults to the wall clock at startup. Pin this together with the seed
    /// to make two runs byte-identical.
    pub reference_time: NaiveDateTime,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for generator configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// User count is invalid
    #[error("User count must be greater than 0, got {0}")]
    InvalidUserCount(usize),

    /// Session count is invalid
    #[error("Session count must be greater than 0, got {0}")]
    InvalidSessionCount(usize),

    /// Event cap is invalid
    #[error("Event count must be greater than 0, got {0}")]
    InvalidEventCount(usize),

    /// Session window is invalid
    #[error("Session window must be at least 1 day, got {0}")]
    InvalidWindowDays(u32),

    /// Session duration range is invalid
    #[error("Invalid session duration range: min ({0}) must be >= 1 and <= max ({1})")]
    InvalidDurationRange(i64, i64),

    /// A distribution mean is invalid
    #[error("Invalid mean for {field}: {value} (must be positive)")]
    InvalidMean {
        /// Name of the field with the invalid mean
        field: String,
        /// The invalid mean value
        value: f64,
    },
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            user_count: 10_000,
            session_count: 100_000,
            event_count: 500_000,
            window_days: 90,
            signup_lookback_days: 180,
            min_session_minutes: 1,
            max_session_minutes: 120,
            mean_page_views: 3.0,
            mean_extra_events: 2.0,
            seed: 42,
            output_dir: PathBuf::from("."),
            reference_time: Utc::now().naive_utc(),
        }
    }
}

impl GeneratorConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            user_count: config_file.user_count.unwrap_or(defaults.user_count),
            session_count: config_file.session_count.unwrap_or(defaults.session_count),
            event_count: config_file.event_count.unwrap_or(defaults.event_count),
            window_days: config_file.window_days.unwrap_or(defaults.window_days),
            signup_lookback_days: config_file
                .signup_lookback_days
                .unwrap_or(defaults.signup_lookback_days),
            min_session_minutes: defaults.min_session_minutes,
            max_session_minutes: defaults.max_session_minutes,
            mean_page_views: defaults.mean_page_views,
            mean_extra_events: defaults.mean_extra_events,
            seed: config_file.seed.unwrap_or(defaults.seed),
            output_dir: config_file.output_dir.unwrap_or(defaults.output_dir),
            reference_time: config_file.reference_time.unwrap_or(defaults.reference_time),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.user_count {
            config.user_count = value;
        }
        if let Some(value) = args.session_count {
            config.session_count = value;
        }
        if let Some(value) = args.event_count {
            config.event_count = value;
        }
        if let Some(value) = args.window_days {
            config.window_days = value;
        }
        if let Some(value) = args.signup_lookback_days {
            config.signup_lookback_days = value;
        }
        if let Some(value) = args.seed {
            config.seed = value;
        }
        if let Some(value) = args.output_dir {
            config.output_dir = value;
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Distribution weights in [`catalog`] and on the enum types are valid by
    /// convention and are not validated here.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.user_count == 0 {
            return Err(ConfigValidationError::InvalidUserCount(self.user_count));
        }

        if self.session_count == 0 {
            return Err(ConfigValidationError::InvalidSessionCount(self.session_count));
        }

        if self.event_count == 0 {
            return Err(ConfigValidationError::InvalidEventCount(self.event_count));
        }

        if self.window_days == 0 {
            return Err(ConfigValidationError::InvalidWindowDays(self.window_days));
        }

        if self.min_session_minutes < 1 || self.min_session_minutes > self.max_session_minutes {
            return Err(ConfigValidationError::InvalidDurationRange(
                self.min_session_minutes,
                self.max_session_minutes,
            ));
        }

        self.validate_mean("mean_page_views", self.mean_page_views)?;
        self.validate_mean("mean_extra_events", self.mean_extra_events)?;

        Ok(())
    }

    /// Helper method to validate distribution means
    fn validate_mean(&self, field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(ConfigValidationError::InvalidMean {
                field: field.to_string(),
                value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn default_args() -> CliArgs {
        CliArgs {
            config: None,
            user_count: None,
            session_count: None,
            event_count: None,
            window_days: None,
            signup_lookback_days: None,
            seed: None,
            output_dir: None,
            verbose: false,
            debug: false,
            dry_run: false,
            print_config: false,
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.user_count, 10_000);
        assert_eq!(config.session_count, 100_000);
        assert_eq!(config.event_count, 500_000);
        assert_eq!(config.window_days, 90);
        assert_eq!(config.signup_lookback_days, 180);
        assert_eq!(config.seed, 42);
        assert_eq!(config.min_session_minutes, 1);
        assert_eq!(config.max_session_minutes, 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_overrides_take_precedence() {
        let args = CliArgs {
            user_count: Some(100),
            session_count: Some(500),
            event_count: Some(2000),
            seed: Some(7),
            output_dir: Some(PathBuf::from("/tmp/out")),
            ..default_args()
        };

        let config = GeneratorConfig::from_cli_args(args).unwrap();
        assert_eq!(config.user_count, 100);
        assert_eq!(config.session_count, 500);
        assert_eq!(config.event_count, 2000);
        assert_eq!(config.seed, 7);
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
        // Untouched fields keep their defaults
        assert_eq!(config.window_days, 90);
    }

    #[test]
    fn test_config_file_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{
                "user_count": 50,
                "event_count": 1000,
                "seed": 123,
                "reference_time": "2026-01-15T12:00:00"
            }"#,
        )
        .unwrap();

        let config = GeneratorConfig::from_file(&path).unwrap();
        assert_eq!(config.user_count, 50);
        assert_eq!(config.event_count, 1000);
        assert_eq!(config.seed, 123);
        assert_eq!(
            config.reference_time,
            NaiveDate::from_ymd_opt(2026, 1, 15)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap()
        );
        // Unspecified fields merge from defaults
        assert_eq!(config.session_count, 100_000);
    }

    #[test]
    fn test_config_file_not_found() {
        let result = GeneratorConfig::from_file("/nonexistent/config.json");
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn test_config_file_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "user_count: 5").unwrap();

        let result = GeneratorConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_validation_rejects_zero_counts() {
        let mut config = GeneratorConfig::default();
        config.user_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidUserCount(0))
        ));

        let mut config = GeneratorConfig::default();
        config.session_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidSessionCount(0))
        ));

        let mut config = GeneratorConfig::default();
        config.event_count = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEventCount(0))
        ));

        let mut config = GeneratorConfig::default();
        config.window_days = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidWindowDays(0))
        ));
    }

    #[test]
    fn test_validation_rejects_bad_duration_range() {
        let mut config = GeneratorConfig::default();
        config.min_session_minutes = 200;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidDurationRange(200, 120))
        ));
    }

    #[test]
    fn test_validation_rejects_nonpositive_means() {
        let mut config = GeneratorConfig::default();
        config.mean_page_views = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidMean { .. })
        ));
    }

    #[test]
    fn test_print_json_round_trips() {
        let config = GeneratorConfig::default();
        let json = config.print_json().unwrap();
        let parsed: GeneratorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.user_count, config.user_count);
        assert_eq!(parsed.seed, config.seed);
        assert_eq!(parsed.reference_time, config.reference_time);
    }

    #[test]
    fn test_catalog_weights_sum_to_one() {
        let sum: f64 = catalog::COUNTRY_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(catalog::PAGE_PATHS.len(), 12);
    }
}
