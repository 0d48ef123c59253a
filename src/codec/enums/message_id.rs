/// Message identifiers used on the control channel. Both peers must agree on
/// the numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u32)]
pub enum MessageId {
    HandshakeInit = 3,
    HandshakeBack = 4,
    HandshakeForth = 5,
    HandshakeDone = 6,
    TimeSync = 7,
    ModuleGraph = 8,
    ViewConnect = 9,
    ParamUpdate = 10,
    CameraUpdate = 11,
    Multiple = 0xFFFF_FFFF,
}
