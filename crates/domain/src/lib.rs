//! Ferrous Dig Domain Layer
pub mod answer_bundle;
pub mod config;
pub mod dns_record;
pub mod domain_name;
pub mod errors;
pub mod record_format;
pub mod target;

pub use answer_bundle::ServerAnswerBundle;
pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{CaaProperty, CaaRecord, FormattedRecord, RawAnswer, RecordKind};
pub use domain_name::DomainName;
pub use errors::DomainError;
pub use record_format::{decode_caa_hex, format_records};
pub use target::TargetServers;
