/// One logical message inside a compound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub block_id: u32,
    pub body: Vec<u8>,
}
