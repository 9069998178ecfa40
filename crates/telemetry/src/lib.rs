pub mod logger;

mod error;

// Re-export logger initialization for convenience
pub use error::TelemetryError;
pub use logger::init;
pub use logger::validate_level;
