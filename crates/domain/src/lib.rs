//! Ferrous RRL Domain Layer
pub mod allowance;
pub mod config;
pub mod errors;
pub mod response_tuple;

pub use allowance::{AllowanceCategory, RCODE_NAME_ERROR, RCODE_NO_ERROR};
pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, RrlConfig};
pub use errors::DomainError;
pub use response_tuple::ResponseTuple;
