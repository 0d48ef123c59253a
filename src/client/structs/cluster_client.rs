use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use crate::client::enums::client_command::ClientCommand;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::client::structs::client_state::ClientState;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::discovery::structs::discovery_listener::DiscoveryListener;

pub struct ClusterClient {
    pub config: ClusterConfig,
    pub state: Arc<ClientState>,
    pub commands: UnboundedSender<ClientCommand>,
    pub events: UnboundedSender<ClusterEvent>,
    pub discovery: Mutex<Option<DiscoveryListener>>,
    pub supervisor: Option<JoinHandle<()>>,
}
