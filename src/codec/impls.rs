pub mod frame;
pub mod frame_header;
pub mod message_id;
