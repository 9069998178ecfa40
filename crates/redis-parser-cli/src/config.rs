//! Configuration for the `redis-parser` command-line tool
//!
//! Settings come from an optional configuration file (TOML, JSON or YAML,
//! picked by extension) and are then overridden by whatever was passed on
//! the command line.
//!
//! # Example
//!
//! ```no_run
//! use redis_parser_cli::config::{Cli, Parser, setup};
//!
//! let args = Cli::parse();
//! let config = setup(&args)?;
//! println!("Output format: {:?}", config.output);
//! # Ok::<(), redis_parser_cli::config::ConfigError>(())
//! ```

use std::path::Path;
use std::path::PathBuf;

pub use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Used when `--config` is not given and the file exists.
pub const DEFAULT_CONFIG_PATH: &str = "conf/redis-parser.toml";

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("Failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("Failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),

	#[error("Failed to parse JSON configuration: {0}")]
	JsonParse(#[from] serde_json::Error),

	#[error("Failed to parse YAML configuration: {0}")]
	YamlParse(#[from] serde_yaml::Error),

	#[error("Unsupported configuration format: {0}")]
	UnsupportedFormat(String),

	#[error("Configuration file has no extension")]
	NoExtension,

	#[error("Invalid configuration: {0}")]
	Telemetry(#[from] telemetry::TelemetryError),
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML, JSON, or YAML).
	/// Defaults to conf/redis-parser.toml if it exists.
	#[arg(short, long, global = true)]
	pub config: Option<String>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long, global = true)]
	pub log_level: Option<String>,

	/// How bytes are printed
	#[arg(short, long, global = true, value_enum)]
	pub output: Option<OutputFormat>,

	/// Refuse inputs larger than this many bytes
	#[arg(long, global = true)]
	pub max_input_bytes: Option<usize>,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
	/// Decode one server reply read from a file or stdin
	Decode {
		/// Read the reply from this file instead of stdin
		#[arg(short, long)]
		input: Option<PathBuf>,
	},

	/// Encode arguments as a command.
	///
	/// Plain words are sent as text. Prefixes pick other types:
	/// `i:<int>`, `f:<number>`, `b:<true|false>`, `s:<text>`, and `nil`.
	Encode {
		#[arg(allow_hyphen_values = true)]
		args: Vec<String>,
	},
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
	/// Printable ASCII with `\r`, `\n` and `\xNN` escapes
	#[default]
	Escaped,
	/// Space separated lowercase hex
	Hex,
	/// Bytes exactly as they are
	Raw,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CliConfig {
	pub log_level: String,
	pub output: OutputFormat,
	pub max_input_bytes: usize,
}

impl Default for CliConfig {
	fn default() -> Self {
		Self {
			log_level: "info".into(),
			output: OutputFormat::Escaped,
			max_input_bytes: 512 * 1024 * 1024,
		}
	}
}

/// Build the effective configuration: file first, then CLI overrides.
pub fn resolve(args: &Cli) -> Result<CliConfig, ConfigError> {
	let mut config = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from_file(DEFAULT_CONFIG_PATH)?,
		None => CliConfig::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(log_level) = &args.log_level {
		config.log_level = log_level.clone();
	}
	if let Some(output) = args.output {
		config.output = output;
	}
	if let Some(max) = args.max_input_bytes {
		config.max_input_bytes = max;
	}

	config.log_level = telemetry::validate_level(&config.log_level)?;
	Ok(config)
}

/// Resolve the configuration and install the logger.
pub fn setup(args: &Cli) -> Result<CliConfig, ConfigError> {
	let config = resolve(args)?;
	telemetry::init(&config.log_level)?;
	log::debug!("Effective configuration: {:?}", config);
	Ok(config)
}

pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CliConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	let extension = path_ref
		.extension()
		.and_then(|ext| ext.to_str())
		.ok_or(ConfigError::NoExtension)?;

	match extension.to_lowercase().as_str() {
		"toml" => Ok(toml::from_str(&content)?),
		"json" => Ok(serde_json::from_str(&content)?),
		"yaml" | "yml" => Ok(serde_yaml::from_str(&content)?),
		_ => Err(ConfigError::UnsupportedFormat(extension.to_string())),
	}
}
