use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use log::{debug, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::sync::watch;
use crate::channel::enums::transport_error::TransportError;
use crate::channel::structs::channel_control::ChannelControl;
use crate::channel::structs::channel_exit::ChannelExit;
use crate::channel::traits::frame_sink::FrameSink;
use crate::codec::codec::HEADER_SIZE;
use crate::codec::structs::frame::Frame;
use crate::codec::structs::frame_header::FrameHeader;

/// Splits `host[:port]` into host and port, using `default_port` when the
/// address carries none. Bare IPv6 addresses are taken as hosts.
pub fn split_server_address(server: &str, default_port: u16) -> (String, u16) {
    let server = server.trim().trim_end_matches('\0');
    if let Ok(address) = server.parse::<SocketAddr>() {
        return (address.ip().to_string(), address.port());
    }
    if let Ok(ip) = server.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
        return (ip.to_string(), default_port);
    }
    if let Some((host, port)) = server.rsplit_once(':')
        && let Ok(port) = port.parse::<u16>()
    {
        return (host.to_string(), port);
    }
    (server.to_string(), default_port)
}

/// Resolves a server announcement to the first matching socket address.
#[tracing::instrument(level = "debug")]
pub async fn resolve_server(server: &str, default_port: u16) -> Result<SocketAddr, TransportError> {
    let (host, port) = split_server_address(server, default_port);
    if host.is_empty() {
        return Err(TransportError::Resolve { server: server.to_string(), reason: "empty host".to_string() });
    }
    let mut addresses = tokio::net::lookup_host((host.as_str(), port)).await.map_err(|e| TransportError::Resolve {
        server: server.to_string(),
        reason: e.to_string(),
    })?;
    addresses.next().ok_or_else(|| TransportError::Resolve {
        server: server.to_string(),
        reason: "no addresses found".to_string(),
    })
}

/// Reads exactly one frame. A clean end of stream before a header is
/// reported as [`TransportError::PeerClosed`].
pub async fn read_frame<R: AsyncRead + Unpin>(reader: &mut R) -> Result<Frame, TransportError> {
    let mut header = [0u8; HEADER_SIZE];
    if let Err(error) = reader.read_exact(&mut header).await {
        return match error.kind() {
            std::io::ErrorKind::UnexpectedEof => Err(TransportError::PeerClosed),
            _ => Err(TransportError::Io(error)),
        };
    }
    let header = FrameHeader::parse(&header)?;

    let mut body = vec![0u8; header.body_len()];
    reader.read_exact(&mut body).await?;

    Ok(Frame {
        message_id: header.message_id,
        body,
    })
}

/// Receive task body. Ends on shutdown, end of stream, an I/O error or a
/// framing error, then stops the channel so the writer stops too. A stop
/// caused by a failed write is reported with that write's error.
pub async fn receive_loop<R, S>(
    mut reader: R,
    mut sink: S,
    control: Arc<ChannelControl>,
    mut shutdown_handler: watch::Receiver<bool>,
    exits: UnboundedSender<ChannelExit>,
    server: String,
    generation: u64,
) where
    R: AsyncRead + Unpin,
    S: FrameSink,
{
    sink.on_open();

    let error = loop {
        tokio::select! {
            _ = shutdown_handler.changed() => {
                debug!("[CHANNEL] Stopping receiver for {}", server);
                break control.take_failure();
            }
            result = read_frame(&mut reader) => {
                match result {
                    Ok(frame) => {
                        if let Err(error) = sink.on_frame(frame) {
                            warn!("[CHANNEL] Stream from {} desynchronized: {}", server, error);
                            break Some(TransportError::Framing(error));
                        }
                    }
                    Err(TransportError::PeerClosed) => {
                        info!("[CHANNEL] Server {} closed the connection", server);
                        break Some(TransportError::PeerClosed);
                    }
                    Err(error) => {
                        warn!("[CHANNEL] Receiver for {} failed: {}", server, error);
                        break Some(error);
                    }
                }
            }
        }
    };

    sink.on_close();
    control.stop();
    let _ = exits.send(ChannelExit { generation, server, error });
}

/// Writer task body. Drains the queue until shutdown or until every sender
/// is gone. A failed write stops the whole channel.
pub async fn write_loop<W>(
    mut writer: W,
    mut queue: UnboundedReceiver<Vec<u8>>,
    control: Arc<ChannelControl>,
    mut shutdown_handler: watch::Receiver<bool>,
    server: String,
) where
    W: AsyncWrite + Unpin,
{
    loop {
        tokio::select! {
            _ = shutdown_handler.changed() => {
                break;
            }
            bytes = queue.recv() => {
                let Some(bytes) = bytes else { break };
                if let Err(error) = writer.write_all(&bytes).await {
                    warn!("[CHANNEL] Unable to send to {}: {}", server, error);
                    control.fail(TransportError::Send(error));
                    break;
                }
            }
        }
    }
    let _ = writer.shutdown().await;
    debug!("[CHANNEL] Writer for {} stopped", server);
}
