mod formatted;
mod raw_answer;
mod record_kind;

pub use formatted::FormattedRecord;
pub use raw_answer::{CaaProperty, CaaRecord, RawAnswer};
pub use record_kind::RecordKind;
