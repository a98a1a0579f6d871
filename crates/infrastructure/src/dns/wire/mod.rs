//! DNS wire codec (RFC 1035 §4.1) for the A / NS / CNAME subset.

pub mod header;
pub mod message;
pub mod name;
pub mod query;
pub mod question;
pub mod reader;
pub mod record;

pub use header::{Header, HEADER_LEN, RECURSION_DESIRED};
pub use message::Message;
pub use name::{decode_name, encode_name};
pub use query::{build_query, random_id};
pub use question::Question;
pub use reader::WireReader;
pub use record::{Record, RecordData};
