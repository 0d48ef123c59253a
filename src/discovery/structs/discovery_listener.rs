use std::net::SocketAddr;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// A running discovery receive task.
#[derive(Debug)]
pub struct DiscoveryListener {
    pub local_address: SocketAddr,
    pub shutdown: watch::Sender<bool>,
    pub handle: Option<JoinHandle<()>>,
}
