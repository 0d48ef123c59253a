use crate::client::enums::cluster_event::ClusterEvent;

impl ClusterEvent {
    /// The server this event concerns, if any.
    pub fn server(&self) -> Option<&str> {
        match self {
            ClusterEvent::ServerAnnounced { server, .. }
            | ClusterEvent::Connected { server }
            | ClusterEvent::StateChanged { server, .. }
            | ClusterEvent::TimeSynchronized { server, .. }
            | ClusterEvent::Disconnected { server } => Some(server),
            ClusterEvent::ShutdownRequested { .. } => None,
        }
    }
}
