use std::io::Cursor;
use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use crate::codec::enums::message_id::MessageId;
use crate::handshake::enums::protocol_error::ProtocolError;
use crate::handshake::handshake::{TIME_SYNC_BODY_SIZE, TIME_SYNC_SAMPLES};
use crate::handshake::structs::time_sync_data::TimeSyncData;

impl TimeSyncData {
    /// The opening body sent by the client after `HANDSHAKE_DONE`.
    pub fn initial() -> TimeSyncData {
        TimeSyncData::default()
    }

    pub fn is_complete(&self) -> bool {
        self.count as usize == TIME_SYNC_SAMPLES
    }

    /// Samples recorded so far.
    pub fn samples(&self) -> &[f64] {
        let filled = (self.count as usize).min(TIME_SYNC_SAMPLES);
        &self.time[..filled]
    }

    pub fn parse(body: &[u8]) -> Result<TimeSyncData, ProtocolError> {
        if body.len() != TIME_SYNC_BODY_SIZE {
            return Err(ProtocolError::MalformedBody {
                message: MessageId::TimeSync,
                reason: format!("expected {} bytes, received {}", TIME_SYNC_BODY_SIZE, body.len()),
            });
        }

        let mut cursor = Cursor::new(body);
        let malformed = |e: std::io::Error| ProtocolError::MalformedBody {
            message: MessageId::TimeSync,
            reason: e.to_string(),
        };
        let count = cursor.read_u32::<LittleEndian>().map_err(malformed)?;
        let reserved = cursor.read_u32::<LittleEndian>().map_err(malformed)?;
        if count as usize > TIME_SYNC_SAMPLES {
            return Err(ProtocolError::MalformedBody {
                message: MessageId::TimeSync,
                reason: format!("sample count {} exceeds {}", count, TIME_SYNC_SAMPLES),
            });
        }

        let mut time = [0f64; TIME_SYNC_SAMPLES];
        for sample in time.iter_mut() {
            *sample = cursor.read_f64::<LittleEndian>().map_err(malformed)?;
        }

        Ok(TimeSyncData { count, reserved, time })
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut body = Vec::with_capacity(TIME_SYNC_BODY_SIZE);
        // Writes into a Vec cannot fail.
        let _ = body.write_u32::<LittleEndian>(self.count);
        let _ = body.write_u32::<LittleEndian>(self.reserved);
        for sample in self.time {
            let _ = body.write_f64::<LittleEndian>(sample);
        }
        body
    }
}
