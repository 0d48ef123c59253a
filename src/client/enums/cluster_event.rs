use crate::handshake::enums::handshake_state::HandshakeState;
use crate::handshake::structs::time_sync_estimate::TimeSyncEstimate;

/// Notifications for the embedding application.
#[derive(Debug, Clone, PartialEq)]
pub enum ClusterEvent {
    ServerAnnounced { server: String, cluster: String },
    Connected { server: String },
    StateChanged { server: String, state: HandshakeState },
    TimeSynchronized { server: String, estimate: TimeSyncEstimate },
    Disconnected { server: String },
    /// The server asked the cluster to shut down. The client does not act on
    /// this itself.
    ShutdownRequested { cluster: String },
}
