pub mod errors;
pub mod logging;
pub mod root;
pub mod rrl;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use rrl::{RrlConfig, MAX_ALLOWANCE_PER_SECOND};
