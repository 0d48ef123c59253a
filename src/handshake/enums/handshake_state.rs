/// Where a session stands in the connection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HandshakeState {
    #[default]
    Idle,
    Connecting,
    AwaitingHandshakeBack,
    AwaitingHandshakeDone,
    TimeSyncing,
    AwaitingGraphAck,
    ViewConnecting,
    Steady,
    Closed,
}
