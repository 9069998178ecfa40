use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::TelemetryError;

const VALID_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Custom time formatter that displays time as "YYYY-MM-DD HH:MM:SS.micros"
struct CustomTimeFormat;

impl FormatTime for CustomTimeFormat {
	fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
		let now = std::time::SystemTime::now();
		let datetime: chrono::DateTime<chrono::Local> = now.into();
		write!(w, "{}", datetime.format("[%Y-%m-%d %H:%M:%S%.6f]"))
	}
}

/// Check a log level name and return it lowercased.
///
/// Valid values: trace, debug, info, warn, error (any case).
pub fn validate_level(level: &str) -> Result<String, TelemetryError> {
	let level_lower = level.to_lowercase();
	if VALID_LEVELS.contains(&level_lower.as_str()) {
		Ok(level_lower)
	} else {
		Err(TelemetryError::InvalidLogLevel(level.to_string()))
	}
}

/// Initialize the logger with the provided log level
///
/// This sets up a console logger on stderr with:
/// - The log level from the `level` parameter
/// - Timestamps in format: YYYY-MM-DD HH:MM:SS.micros
/// - `log` records bridged into the same output
///
/// Stdout is left alone so command output can be piped.
///
/// # Example
///
/// ```no_run
/// telemetry::init("debug")?;
/// tracing::info!("Decoder starting");
/// # Ok::<(), telemetry::TelemetryError>(())
/// ```
///
/// # Errors
///
/// Returns an error if the level is invalid or a global logger is already
/// installed.
pub fn init(level: &str) -> Result<(), TelemetryError> {
	let level = validate_level(level)?;
	let env_filter = EnvFilter::new(&level);

	tracing_subscriber::registry()
		.with(env_filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_timer(CustomTimeFormat)
				.with_target(false)
				.with_thread_ids(false)
				.with_line_number(false)
				.with_file(false),
		)
		.try_init()
		.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))?;

	tracing::debug!("Logger initialized at level {}", level);
	Ok(())
}
