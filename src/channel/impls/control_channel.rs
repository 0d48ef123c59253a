use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use log::{info, warn};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::sync::mpsc::{unbounded_channel, UnboundedSender};
use crate::channel::channel::{receive_loop, resolve_server, write_loop};
use crate::channel::enums::transport_error::TransportError;
use crate::channel::structs::channel_control::ChannelControl;
use crate::channel::structs::channel_exit::ChannelExit;
use crate::channel::structs::channel_sender::ChannelSender;
use crate::channel::structs::control_channel::ControlChannel;
use crate::channel::traits::frame_sink::FrameSink;

impl ControlChannel {
    /// Resolves `server` and opens the TCP connection with `TCP_NODELAY`.
    #[tracing::instrument(level = "debug")]
    pub async fn connect(server: &str, default_port: u16, connect_timeout: Option<Duration>) -> Result<TcpStream, TransportError> {
        let address = resolve_server(server, default_port).await?;
        let connecting = TcpStream::connect(address);
        let result = match connect_timeout {
            Some(limit) => tokio::time::timeout(limit, connecting).await.map_err(|_| TransportError::Timeout {
                server: server.to_string(),
                millis: limit.as_millis() as u64,
            })?,
            None => connecting.await,
        };
        let stream = result.map_err(|source| TransportError::Connect { address, source })?;
        stream.set_nodelay(true)?;
        Ok(stream)
    }

    /// Spawns the writer and receive tasks on a connected stream. The sink is
    /// built with the channel's sender so it can answer frames itself.
    pub fn start<S, F>(server: String, generation: u64, stream: TcpStream, exits: UnboundedSender<ChannelExit>, build_sink: F) -> Result<ControlChannel, TransportError>
    where
        S: FrameSink,
        F: FnOnce(ChannelSender) -> S,
    {
        let peer_address = stream.peer_addr()?;
        let (read_half, write_half) = stream.into_split();
        Ok(ControlChannel::spawn(server, generation, peer_address, read_half, write_half, exits, build_sink))
    }

    /// Like [`ControlChannel::start`] but over any pair of stream halves.
    pub fn spawn<R, W, S, F>(
        server: String,
        generation: u64,
        peer_address: SocketAddr,
        reader: R,
        writer: W,
        exits: UnboundedSender<ChannelExit>,
        build_sink: F,
    ) -> ControlChannel
    where
        R: AsyncRead + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
        S: FrameSink,
        F: FnOnce(ChannelSender) -> S,
    {
        let (queue_tx, queue_rx) = unbounded_channel();
        let sender = ChannelSender::new(server.clone(), queue_tx);
        let control = Arc::new(ChannelControl::new());

        let writer = tokio::spawn(write_loop(writer, queue_rx, control.clone(), control.subscribe(), server.clone()));
        let sink = build_sink(sender.clone());
        let reader = tokio::spawn(receive_loop(
            reader,
            sink,
            control.clone(),
            control.subscribe(),
            exits,
            server.clone(),
            generation,
        ));

        info!("[CHANNEL] Connected to {} ({})", server, peer_address);

        ControlChannel {
            server,
            peer_address,
            generation,
            sender,
            control,
            reader: Some(reader),
            writer: Some(writer),
        }
    }

    pub fn is_alive(&self) -> bool {
        !self.control.is_stopped()
    }

    /// Raises the shutdown signal and waits for both tasks to finish.
    pub async fn close(&mut self) {
        self.control.stop();
        if let Some(reader) = self.reader.take()
            && let Err(error) = reader.await
        {
            warn!("[CHANNEL] Receiver for {} ended abnormally: {}", self.server, error);
        }
        if let Some(writer) = self.writer.take()
            && let Err(error) = writer.await
        {
            warn!("[CHANNEL] Writer for {} ended abnormally: {}", self.server, error);
        }
        info!("[CHANNEL] Closed connection to {}", self.server);
    }
}

impl Drop for ControlChannel {
    fn drop(&mut self) {
        self.control.stop();
    }
}
