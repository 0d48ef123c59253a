use std::sync::Arc;
use crate::dispatcher::structs::session::Session;
use crate::handshake::enums::handshake_state::HandshakeState;
use crate::host::traits::cluster_view::ClusterView;
use crate::host::types::view_list::ViewList;

impl Session {
    pub fn new(server_address: &str, node_name: &str, views: ViewList) -> Session {
        Session {
            server_address: Some(server_address.to_string()),
            node_name: node_name.to_string(),
            state: HandshakeState::Idle,
            clock_offset: 0.0,
            views,
        }
    }

    /// Snapshot of the registered views, so no lock is held while calling
    /// into them.
    pub fn views(&self) -> Vec<Arc<dyn ClusterView>> {
        self.views.read().clone()
    }

    pub fn first_view(&self) -> Option<Arc<dyn ClusterView>> {
        self.views.read().first().cloned()
    }

    pub fn server(&self) -> String {
        self.server_address.clone().unwrap_or_default()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("server_address", &self.server_address)
            .field("node_name", &self.node_name)
            .field("state", &self.state)
            .field("clock_offset", &self.clock_offset)
            .field("views", &self.views.read().len())
            .finish()
    }
}
