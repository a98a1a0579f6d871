mod record_type;

pub use record_type::{RecordType, CLASS_IN};
