use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClusterConfig {
    pub name: String,
    pub udp_port: u16,
    pub udp_echo_broadcast_address: String,
    pub node_name: String,
    pub server_port: u16,
    pub connect_jitter_min_ms: u64,
    pub connect_jitter_max_ms: u64,
    /// `0` waits as long as the operating system does.
    pub connect_timeout_ms: u64,
    pub discovery_enabled: bool,
}
