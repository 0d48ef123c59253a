use std::net::SocketAddr;

/// What the receive loop needs to judge and echo datagrams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    pub cluster_name: String,
    /// Where echoes go; `None` disables echoing.
    pub echo_target: Option<SocketAddr>,
}
