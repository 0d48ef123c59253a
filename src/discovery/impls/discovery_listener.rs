use std::net::SocketAddr;
use log::{info, warn};
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use crate::client::enums::client_command::ClientCommand;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::discovery::discovery::{bind_discovery_socket, receive_loop};
use crate::discovery::enums::discovery_error::DiscoveryError;
use crate::discovery::structs::discovery_listener::DiscoveryListener;
use crate::discovery::structs::discovery_settings::DiscoverySettings;

impl DiscoveryListener {
    /// Binds the discovery port and spawns the receive task. Port `0` picks
    /// a free port, see [`DiscoveryListener::local_address`].
    #[tracing::instrument(level = "debug", skip(commands, events))]
    pub fn start(
        port: u16,
        settings: DiscoverySettings,
        commands: UnboundedSender<ClientCommand>,
        events: UnboundedSender<ClusterEvent>,
    ) -> Result<DiscoveryListener, DiscoveryError> {
        let socket = bind_discovery_socket(port)?;
        let local_address = socket.local_addr()?;
        let (shutdown, shutdown_handler) = watch::channel(false);

        info!("[DISCOVERY] Listening on {} for cluster \"{}\"", local_address, settings.cluster_name);
        let handle = tokio::spawn(receive_loop(socket, settings, commands, events, shutdown_handler));

        Ok(DiscoveryListener {
            local_address,
            shutdown,
            handle: Some(handle),
        })
    }

    pub fn local_address(&self) -> SocketAddr {
        self.local_address
    }

    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Signals the receive task and waits for it.
    pub async fn stop(&mut self) {
        self.shutdown.send_replace(true);
        if let Some(handle) = self.handle.take()
            && let Err(error) = handle.await
        {
            warn!("[DISCOVERY] Receiver ended abnormally: {}", error);
        }
    }
}

impl Drop for DiscoveryListener {
    fn drop(&mut self) {
        self.shutdown.send_replace(true);
    }
}
