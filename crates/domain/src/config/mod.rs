pub mod dns;
pub mod errors;
pub mod logging;
pub mod root;
pub mod server;

pub use dns::{parse_resolver_addr, DnsConfig};
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
