use std::ops::RangeInclusive;
use std::time::Duration;
use crate::config::structs::cluster_config::ClusterConfig;

pub const DEFAULT_CLUSTER_NAME: &str = "MM04SC";
pub const DEFAULT_UDP_PORT: u16 = 30202;
pub const DEFAULT_SERVER_PORT: u16 = 30201;

impl ClusterConfig {
    pub fn jitter_range(&self) -> RangeInclusive<u64> {
        self.connect_jitter_min_ms..=self.connect_jitter_max_ms
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        match self.connect_timeout_ms {
            0 => None,
            millis => Some(Duration::from_millis(millis)),
        }
    }

    pub fn node_name(&self) -> Option<&str> {
        Some(self.node_name.trim()).filter(|name| !name.is_empty())
    }
}

impl Default for ClusterConfig {
    fn default() -> Self {
        ClusterConfig {
            name: String::from(DEFAULT_CLUSTER_NAME),
            udp_port: DEFAULT_UDP_PORT,
            udp_echo_broadcast_address: String::new(),
            node_name: String::new(),
            server_port: DEFAULT_SERVER_PORT,
            connect_jitter_min_ms: 100,
            connect_jitter_max_ms: 600,
            connect_timeout_ms: 0,
            discovery_enabled: true,
        }
    }
}
