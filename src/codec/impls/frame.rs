use std::io;
use std::io::Write;
use byteorder::{LittleEndian, WriteBytesExt};
use crate::codec::codec::{join_compound, split_compound, HEADER_SIZE, MAGIC_NUMBER, MAX_BODY_LEN};
use crate::codec::enums::framing_error::FramingError;
use crate::codec::enums::message_id::MessageId;
use crate::codec::structs::block::Block;
use crate::codec::structs::frame::Frame;
use crate::codec::structs::frame_header::FrameHeader;

impl Frame {
    pub fn new(message_id: impl Into<u32>, body: Vec<u8>) -> Frame {
        Frame {
            message_id: message_id.into(),
            body,
        }
    }

    pub fn empty(message_id: MessageId) -> Frame {
        Frame::new(message_id, Vec::new())
    }

    /// The known identifier of this frame, `None` for IDs this node does not speak.
    pub fn id(&self) -> Option<MessageId> {
        MessageId::from_u32(self.message_id)
    }

    pub fn is_compound(&self) -> bool {
        self.message_id == MessageId::Multiple.as_u32()
    }

    /// Header for this frame. Fails when the body exceeds [`MAX_BODY_LEN`].
    pub fn header(&self) -> Result<FrameHeader, FramingError> {
        if self.body.len() > MAX_BODY_LEN {
            return Err(FramingError::TooLarge { length: self.body.len(), max: MAX_BODY_LEN });
        }
        Ok(FrameHeader {
            magic_number: MAGIC_NUMBER,
            message_id: self.message_id,
            body_length: self.body.len() as u32,
        })
    }

    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE + self.body.len()
    }

    /// Writes header and body. An oversized body is rejected with
    /// `InvalidInput` before anything is written.
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        let header = self.header().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        write_frame(bytes, &header, &self.body)
    }

    /// Encodes header and body into one buffer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, FramingError> {
        let header = self.header()?;
        let mut buffer = Vec::with_capacity(self.encoded_len());
        // Writes into a Vec cannot fail.
        let _ = write_frame(&mut buffer, &header, &self.body);
        Ok(buffer)
    }

    /// Decodes exactly one frame from `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Frame, FramingError> {
        let header = FrameHeader::parse(bytes)?;
        let needed = HEADER_SIZE + header.body_len();
        if bytes.len() < needed {
            return Err(FramingError::Truncated { needed: header.body_len(), available: bytes.len() - HEADER_SIZE });
        }
        if bytes.len() > needed {
            return Err(FramingError::TrailingBytes { extra: bytes.len() - needed });
        }

        Ok(Frame {
            message_id: header.message_id,
            body: bytes[HEADER_SIZE..needed].to_vec(),
        })
    }

    pub fn split_compound(&self) -> Result<Vec<Block>, FramingError> {
        split_compound(self)
    }

    pub fn join_compound(blocks: &[Block]) -> Result<Frame, FramingError> {
        join_compound(blocks)
    }
}

impl From<Block> for Frame {
    fn from(block: Block) -> Self {
        Frame {
            message_id: block.block_id,
            body: block.body,
        }
    }
}

fn write_frame(bytes: &mut impl Write, header: &FrameHeader, body: &[u8]) -> Result<(), io::Error> {
    bytes.write_u32::<LittleEndian>(header.magic_number)?;
    bytes.write_u32::<LittleEndian>(header.message_id)?;
    bytes.write_u32::<LittleEndian>(header.body_length)?;
    bytes.write_all(body)?;
    Ok(())
}
