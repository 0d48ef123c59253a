pub mod framing_error;
pub mod message_id;
