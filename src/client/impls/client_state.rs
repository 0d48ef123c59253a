use std::sync::Arc;
use crate::client::structs::client_state::ClientState;
use crate::host::traits::cluster_view::ClusterView;

fn same_view(a: &Arc<dyn ClusterView>, b: &Arc<dyn ClusterView>) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

impl ClientState {
    /// Adds a view once; registering the same view again is a no-op.
    pub fn register_view(&self, view: Arc<dyn ClusterView>) -> bool {
        let mut views = self.views.write();
        if views.iter().any(|known| same_view(known, &view)) {
            return false;
        }
        views.push(view);
        true
    }

    pub fn unregister_view(&self, view: &Arc<dyn ClusterView>) -> bool {
        let mut views = self.views.write();
        let before = views.len();
        views.retain(|known| !same_view(known, view));
        views.len() != before
    }

    pub fn clear_connection(&self) {
        *self.current_server.write() = None;
        *self.sender.write() = None;
    }
}
