use std::io::{Cursor, Write};
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use crate::codec::enums::framing_error::FramingError;
use crate::codec::enums::message_id::MessageId;
use crate::codec::structs::block::Block;
use crate::codec::structs::frame::Frame;

/// `"vlc"` followed by protocol version 1, read as a little-endian `u32`.
pub const MAGIC_NUMBER: u32 = 0x0163_6C76;

/// Size of `magic | message id | body length`.
pub const HEADER_SIZE: usize = 12;

/// Size of `block id | block length` inside a compound body.
pub const BLOCK_HEADER_SIZE: usize = 8;

/// Largest body the receive loop will allocate for.
pub const MAX_BODY_LEN: usize = 64 * 1024 * 1024;

/// Splits the body of a compound frame into its blocks, in wire order.
///
/// The caller decides whether the frame is compound; this only looks at the
/// body. A block header or block body that reaches past the declared body
/// length yields [`FramingError::Truncated`].
#[tracing::instrument(skip(frame), level = "debug")]
pub fn split_compound(frame: &Frame) -> Result<Vec<Block>, FramingError> {
    let body = frame.body.as_slice();
    let mut cursor = Cursor::new(body);
    let mut blocks = Vec::new();

    while (cursor.position() as usize) < body.len() {
        let remaining = body.len() - cursor.position() as usize;
        if remaining < BLOCK_HEADER_SIZE {
            return Err(FramingError::Truncated { needed: BLOCK_HEADER_SIZE, available: remaining });
        }

        let block_id = read_u32(&mut cursor, remaining)?;
        let block_length = read_u32(&mut cursor, remaining)? as usize;

        let start = cursor.position() as usize;
        let available = body.len() - start;
        if block_length > available {
            return Err(FramingError::Truncated { needed: block_length, available });
        }

        blocks.push(Block {
            block_id,
            body: body[start..start + block_length].to_vec(),
        });
        cursor.set_position((start + block_length) as u64);
    }

    Ok(blocks)
}

/// Packs blocks back to back into a single compound frame.
pub fn join_compound(blocks: &[Block]) -> Result<Frame, FramingError> {
    let length: usize = blocks.iter().map(|block| BLOCK_HEADER_SIZE + block.body.len()).sum();
    if length > MAX_BODY_LEN {
        return Err(FramingError::TooLarge { length, max: MAX_BODY_LEN });
    }

    let mut body = Vec::with_capacity(length);
    for block in blocks {
        write_block(&mut body, block.block_id, &block.body);
    }

    Ok(Frame {
        message_id: MessageId::Multiple.as_u32(),
        body,
    })
}

fn write_block(bytes: &mut Vec<u8>, block_id: u32, body: &[u8]) {
    // Writes into a Vec cannot fail.
    let _ = bytes.write_u32::<LittleEndian>(block_id);
    let _ = bytes.write_u32::<LittleEndian>(body.len() as u32);
    let _ = bytes.write_all(body);
}

fn read_u32(cursor: &mut Cursor<&[u8]>, available: usize) -> Result<u32, FramingError> {
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| FramingError::Truncated { needed: BLOCK_HEADER_SIZE, available })
}
