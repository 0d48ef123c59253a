pub mod block;
pub mod frame;
pub mod frame_header;
