//! rootwalk domain layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, ResolverConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordType, CLASS_IN};
pub use errors::DomainError;
