pub mod errors;
pub mod startup_config;

pub use errors::{ConfigError, EXIT_BAD_ARGUMENTS, EXIT_UNKNOWN_FRACTAL};
pub use startup_config::StartupConfig;
