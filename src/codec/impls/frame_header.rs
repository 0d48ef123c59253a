use std::io::Cursor;
use byteorder::{LittleEndian, ReadBytesExt};
use crate::codec::codec::{HEADER_SIZE, MAGIC_NUMBER, MAX_BODY_LEN};
use crate::codec::enums::framing_error::FramingError;
use crate::codec::structs::frame_header::FrameHeader;

impl FrameHeader {
    /// Parses and validates the fixed-size header at the start of `bytes`.
    pub fn parse(bytes: &[u8]) -> Result<FrameHeader, FramingError> {
        if bytes.len() < HEADER_SIZE {
            return Err(FramingError::Truncated { needed: HEADER_SIZE, available: bytes.len() });
        }

        let mut cursor = Cursor::new(&bytes[..HEADER_SIZE]);
        let truncated = |_| FramingError::Truncated { needed: HEADER_SIZE, available: bytes.len() };
        let magic_number = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let message_id = cursor.read_u32::<LittleEndian>().map_err(truncated)?;
        let body_length = cursor.read_u32::<LittleEndian>().map_err(truncated)?;

        if magic_number != MAGIC_NUMBER {
            return Err(FramingError::BadMagic { expected: MAGIC_NUMBER, found: magic_number });
        }
        if body_length as usize > MAX_BODY_LEN {
            return Err(FramingError::TooLarge { length: body_length as usize, max: MAX_BODY_LEN });
        }

        Ok(FrameHeader {
            magic_number,
            message_id,
            body_length,
        })
    }

    #[inline]
    pub fn body_len(&self) -> usize {
        self.body_length as usize
    }
}
