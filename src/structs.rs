use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, env = "CLUSTER_SYNC_CONFIG", default_value = "config.toml")]
    pub config: String,

    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,

    /// Overrides `cluster.name`.
    #[arg(long, env = "CLUSTER_SYNC_NAME")]
    pub cluster_name: Option<String>,

    /// Overrides `cluster.udp_port`.
    #[arg(long, env = "CLUSTER_SYNC_UDP_PORT")]
    pub udp_port: Option<u16>,

    /// Overrides `cluster.udp_echo_broadcast_address`.
    #[arg(long, env = "CLUSTER_SYNC_ECHO_ADDRESS")]
    pub echo_address: Option<String>,

    /// Overrides `cluster.node_name`.
    #[arg(long, env = "CLUSTER_SYNC_NODE_NAME")]
    pub node_name: Option<String>,

    /// Connect to this server at start instead of waiting for an announcement.
    #[arg(long)]
    pub server: Option<String>,

    /// Run the parking_lot deadlock check every 30 seconds.
    #[arg(long)]
    pub deadlock_check: bool,
}
