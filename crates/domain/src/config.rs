mod errors;
mod logging;
mod resolver;
mod root;

pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use resolver::{ResolverConfig, DEFAULT_ROOT_SERVER};
pub use root::{CliOverrides, Config, DEFAULT_CONFIG_FILE};
