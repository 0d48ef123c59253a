use std::sync::Arc;
use parking_lot::RwLock;
use crate::host::traits::cluster_view::ClusterView;

/// Views in registration order. The first one receives the module graph
/// setup and camera traffic.
pub type ViewList = Arc<RwLock<Vec<Arc<dyn ClusterView>>>>;
