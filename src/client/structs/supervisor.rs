use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use crate::channel::structs::channel_exit::ChannelExit;
use crate::channel::structs::control_channel::ControlChannel;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::client::structs::client_state::ClientState;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::host::traits::cluster_host::ClusterHost;

/// Owner of the live control channel. Runs as one task.
pub struct Supervisor {
    pub config: ClusterConfig,
    pub node_name: String,
    pub host: Arc<dyn ClusterHost>,
    pub state: Arc<ClientState>,
    pub events: UnboundedSender<ClusterEvent>,
    pub exits: UnboundedSender<ChannelExit>,
    pub channel: Option<ControlChannel>,
    /// Bumped on every connect so exits of replaced channels are ignored.
    pub generation: u64,
}
