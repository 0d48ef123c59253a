use crate::handshake::structs::time_sync_data::TimeSyncData;

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum HandshakeAction {
    None,
    /// Send `HANDSHAKE_INIT` carrying the node identity.
    SendHandshakeInit,
    SendHandshakeForth,
    /// Send the first `TIMESYNC` with a zero count.
    StartTimeSync,
    /// Send the sample body back unchanged.
    EchoTimeSync(TimeSyncData),
    /// Apply the clock offset, disconnect views, clean up the module graph
    /// and send `MODULEGRAPH`.
    CompleteTimeSync(TimeSyncData),
    /// Hand the module graph setup body to the first view.
    SetupViews(Vec<u8>),
    /// Connect every view to the named endpoint and ask the first one for
    /// the camera bootstrap.
    ConnectViews(String),
    ApplyParameter { name: String, value: String },
    ForwardCamera(Vec<u8>),
    Close,
}
