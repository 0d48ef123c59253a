use crate::handshake::handshake::TIME_SYNC_SAMPLES;

/// Body of a `TIMESYNC` message. The server fills one sample per round trip
/// and bumps `count`; a body with `count == TIME_SYNC_SAMPLES` is final.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeSyncData {
    pub count: u32,
    pub reserved: u32,
    pub time: [f64; TIME_SYNC_SAMPLES],
}
