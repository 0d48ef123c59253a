use std::net::SocketAddr;
use std::sync::Arc;
use log::{info, warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::sync::Mutex;
use crate::client::enums::client_command::ClientCommand;
use crate::client::enums::client_error::ClientError;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::client::enums::setup_step::SetupStep;
use crate::client::structs::client_state::ClientState;
use crate::client::structs::cluster_client::ClusterClient;
use crate::client::structs::supervisor::Supervisor;
use crate::codec::enums::message_id::MessageId;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::discovery::discovery::resolve_echo_target;
use crate::discovery::structs::discovery_listener::DiscoveryListener;
use crate::discovery::structs::discovery_settings::DiscoverySettings;
use crate::handshake::handshake::node_identity;
use crate::host::traits::cluster_host::ClusterHost;
use crate::host::traits::cluster_view::ClusterView;

impl ClusterClient {
    /// Spawns the supervisor and, when enabled, the discovery listener.
    /// Must be called inside a tokio runtime.
    #[tracing::instrument(level = "debug", skip(host))]
    pub async fn start(config: ClusterConfig, host: Arc<dyn ClusterHost>) -> Result<(ClusterClient, UnboundedReceiver<ClusterEvent>), ClientError> {
        let (events_tx, events_rx) = unbounded_channel();
        let (commands_tx, commands_rx) = unbounded_channel();
        let state = Arc::new(ClientState::default());

        let node_name = node_identity(config.node_name());
        info!("[CLIENT] Node \"{}\" joining cluster \"{}\"", node_name, config.name);

        let (supervisor, exits_rx) = Supervisor::new(config.clone(), node_name, host, state.clone(), events_tx.clone());
        let supervisor = tokio::spawn(supervisor.run(commands_rx, exits_rx));

        let client = ClusterClient {
            config,
            state,
            commands: commands_tx,
            events: events_tx,
            discovery: Mutex::new(None),
            supervisor: Some(supervisor),
        };

        if client.config.discovery_enabled {
            client.restart_discovery(client.config.udp_port).await?;
        }

        Ok((client, events_rx))
    }

    pub fn register_view(&self, view: Arc<dyn ClusterView>) {
        let name = view.name();
        if self.state.register_view(view) {
            info!("[CLIENT] View \"{}\" registered", name);
        }
    }

    pub fn unregister_view(&self, view: &Arc<dyn ClusterView>) {
        if self.state.unregister_view(view) {
            info!("[CLIENT] View \"{}\" unregistered", view.name());
        }
    }

    pub fn views(&self) -> Vec<Arc<dyn ClusterView>> {
        self.state.views.read().clone()
    }

    /// Asks the supervisor to connect to `server`, replacing any channel.
    pub fn connect(&self, server: &str) -> Result<(), ClientError> {
        self.command(ClientCommand::Connect(server.to_string()))
    }

    pub fn disconnect(&self) -> Result<(), ClientError> {
        self.command(ClientCommand::Disconnect)
    }

    /// Queues a message on the live channel.
    pub fn send(&self, message_id: MessageId, body: Vec<u8>) -> Result<(), ClientError> {
        let sender = self.state.sender.read().clone().ok_or(ClientError::NotConnected)?;
        Ok(sender.send(message_id, body)?)
    }

    pub fn continue_setup(&self, step: SetupStep) -> Result<(), ClientError> {
        self.send(step.message_id(), Vec::new())
    }

    pub fn current_server(&self) -> Option<String> {
        self.state.current_server.read().clone()
    }

    pub fn discovery_address(&self) -> Option<SocketAddr> {
        *self.state.discovery_address.read()
    }

    /// Stops the running discovery listener, if any, and binds a new one on
    /// `port`. Returns the bound address.
    pub async fn restart_discovery(&self, port: u16) -> Result<SocketAddr, ClientError> {
        let mut discovery = self.discovery.lock().await;
        if let Some(mut listener) = discovery.take() {
            listener.stop().await;
            *self.state.discovery_address.write() = None;
        }

        let echo_target = match resolve_echo_target(&self.config.udp_echo_broadcast_address, port).await {
            Ok(target) => target,
            Err(e) => {
                warn!("[CLIENT] Echo disabled: {}", e);
                None
            }
        };
        let settings = DiscoverySettings {
            cluster_name: self.config.name.clone(),
            echo_target,
        };
        let listener = DiscoveryListener::start(port, settings, self.commands.clone(), self.events.clone())?;
        let address = listener.local_address();
        *self.state.discovery_address.write() = Some(address);
        *discovery = Some(listener);
        Ok(address)
    }

    /// Stops discovery, closes the channel and waits for the supervisor.
    pub async fn shutdown(mut self) {
        if let Some(mut listener) = self.discovery.lock().await.take() {
            listener.stop().await;
        }
        *self.state.discovery_address.write() = None;

        let _ = self.commands.send(ClientCommand::Stop);
        if let Some(supervisor) = self.supervisor.take()
            && let Err(e) = supervisor.await
        {
            warn!("[CLIENT] Supervisor ended abnormally: {}", e);
        }
        info!("[CLIENT] Shut down");
    }

    fn command(&self, command: ClientCommand) -> Result<(), ClientError> {
        self.commands.send(command).map_err(|_| ClientError::Stopped)
    }
}
