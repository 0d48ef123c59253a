use crate::handshake::structs::time_sync_data::TimeSyncData;

/// Everything that can move a session forward: connection events and
/// decoded server messages.
#[derive(Debug, Clone, PartialEq)]
pub enum HandshakeInput {
    Dialing,
    Connected,
    HandshakeBack,
    HandshakeDone,
    TimeSync(TimeSyncData),
    ModuleGraph(Vec<u8>),
    ViewConnect(String),
    ParamUpdate { name: String, value: String },
    CameraUpdate(Vec<u8>),
    Disconnected,
}
