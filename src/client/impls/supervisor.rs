use std::sync::Arc;
use log::{debug, error, info, warn};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use crate::channel::structs::channel_exit::ChannelExit;
use crate::channel::structs::control_channel::ControlChannel;
use crate::client::client::dial;
use crate::client::enums::client_command::ClientCommand;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::client::structs::client_state::ClientState;
use crate::client::structs::supervisor::Supervisor;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::dispatcher::structs::dispatcher::Dispatcher;
use crate::dispatcher::structs::session::Session;
use crate::host::traits::cluster_host::ClusterHost;

impl Supervisor {
    /// Builds the supervisor and the receiver of its channels' exit reports.
    pub fn new(
        config: ClusterConfig,
        node_name: String,
        host: Arc<dyn ClusterHost>,
        state: Arc<ClientState>,
        events: UnboundedSender<ClusterEvent>,
    ) -> (Supervisor, UnboundedReceiver<ChannelExit>) {
        let (exits, exits_rx) = unbounded_channel();
        let supervisor = Supervisor {
            config,
            node_name,
            host,
            state,
            events,
            exits,
            channel: None,
            generation: 0,
        };
        (supervisor, exits_rx)
    }

    /// Processes commands until `Stop` or until every command sender is gone,
    /// then closes the live channel.
    pub async fn run(mut self, mut commands: UnboundedReceiver<ClientCommand>, mut exits: UnboundedReceiver<ChannelExit>) {
        let mut pending: Option<ClientCommand> = None;

        loop {
            let command = match pending.take() {
                Some(command) => command,
                None => tokio::select! {
                    command = commands.recv() => match command {
                        Some(command) => command,
                        None => break,
                    },
                    Some(exit) = exits.recv() => {
                        self.on_channel_exit(exit).await;
                        continue;
                    }
                },
            };

            match command {
                ClientCommand::Connect(server) => {
                    pending = self.connect(server, &mut commands).await;
                }
                ClientCommand::Disconnect => {
                    info!("[CLIENT] Disconnect requested");
                    self.teardown().await;
                }
                ClientCommand::Stop => break,
            }
        }

        self.teardown().await;
        info!("[CLIENT] Supervisor stopped");
    }

    /// Connects to `server` unless it is already the tracked one. Returns the
    /// command that interrupted the attempt, if any.
    async fn connect(&mut self, server: String, commands: &mut UnboundedReceiver<ClientCommand>) -> Option<ClientCommand> {
        if self.state.current_server.read().as_deref() == Some(server.as_str()) {
            info!("[CLIENT] Already connected to server \"{}\"", server);
            return None;
        }

        info!("[CLIENT] Trying connect to new server \"{}\"", server);
        self.teardown().await;
        *self.state.current_server.write() = Some(server.clone());
        self.generation += 1;
        let generation = self.generation;

        let attempt = dial(
            server.clone(),
            self.config.jitter_range(),
            self.config.server_port,
            self.config.connect_timeout(),
        );
        tokio::pin!(attempt);

        let result = loop {
            tokio::select! {
                result = &mut attempt => break result,
                command = commands.recv() => match command {
                    Some(ClientCommand::Connect(next)) if next == server => {
                        debug!("[CLIENT] Already connecting to \"{}\"", server);
                    }
                    Some(command) => {
                        info!("[CLIENT] Connect to \"{}\" abandoned", server);
                        self.state.clear_connection();
                        return Some(command);
                    }
                    None => {
                        self.state.clear_connection();
                        return Some(ClientCommand::Stop);
                    }
                },
            }
        };

        let stream = match result {
            Ok(stream) => stream,
            Err(e) => {
                error!("[CLIENT] Failed to connect to \"{}\": {}", server, e);
                self.state.clear_connection();
                return None;
            }
        };

        self.emit(ClusterEvent::Connected { server: server.clone() });
        let session = Session::new(&server, &self.node_name, self.state.views.clone());
        let host = self.host.clone();
        let events = self.events.clone();
        let started = ControlChannel::start(server.clone(), generation, stream, self.exits.clone(), move |sender| {
            Dispatcher::new(session, host, sender, events)
        });

        match started {
            Ok(channel) => {
                *self.state.sender.write() = Some(channel.sender.clone());
                self.channel = Some(channel);
                info!("[CLIENT] TCP connection started to \"{}\"", server);
            }
            Err(e) => {
                error!("[CLIENT] Failed to start channel to \"{}\": {}", server, e);
                self.state.clear_connection();
                self.emit(ClusterEvent::Disconnected { server });
            }
        }
        None
    }

    async fn on_channel_exit(&mut self, exit: ChannelExit) {
        let current = self.channel.as_ref().map(|channel| channel.generation);
        if current != Some(exit.generation) {
            debug!("[CLIENT] Ignoring exit of replaced channel to {}", exit.server);
            return;
        }

        match &exit.error {
            Some(error) => warn!("[CLIENT] Connection to \"{}\" lost: {}", exit.server, error),
            None => info!("[CLIENT] Connection to \"{}\" closed", exit.server),
        }
        if let Some(mut channel) = self.channel.take() {
            channel.close().await;
        }
        self.state.clear_connection();
        self.emit(ClusterEvent::Disconnected { server: exit.server });
    }

    /// Closes and joins the live channel, if any.
    async fn teardown(&mut self) {
        if let Some(mut channel) = self.channel.take() {
            channel.close().await;
            self.emit(ClusterEvent::Disconnected { server: channel.server.clone() });
        }
        self.state.clear_connection();
    }

    fn emit(&self, event: ClusterEvent) {
        let _ = self.events.send(event);
    }
}
