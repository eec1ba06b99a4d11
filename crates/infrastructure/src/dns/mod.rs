pub mod forwarding;
pub mod query;
pub mod resolver;
pub mod transport;

pub use resolver::WireRecordResolver;
