/// A complete wire message. The magic number and body length are implied by
/// the encoding and checked on decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub message_id: u32,
    pub body: Vec<u8>,
}
