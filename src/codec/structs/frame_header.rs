#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub magic_number: u32,
    pub message_id: u32,
    pub body_length: u32,
}
