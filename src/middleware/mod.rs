pub mod payload;
pub mod record_id;

pub use payload::JsonPayload;
pub use record_id::RecordId;
