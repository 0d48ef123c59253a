use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::UdpSocket;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::watch;
use crate::client::enums::client_command::ClientCommand;
use crate::client::enums::cluster_event::ClusterEvent;
use crate::discovery::enums::discovery_error::DiscoveryError;
use crate::discovery::enums::discovery_verdict::DiscoveryVerdict;
use crate::discovery::structs::datagram::Datagram;
use crate::discovery::structs::discovery_settings::DiscoverySettings;

/// `type u16 | echo u8 | len1 u8 | str1 | len2 u8 | str2`.
pub const DATAGRAM_SIZE: usize = 2 + 1 + 1 + DATAGRAM_STRING_SIZE + 1 + DATAGRAM_STRING_SIZE;

/// Capacity of each string field.
pub const DATAGRAM_STRING_SIZE: usize = 127;

pub const MSG_CONNECT_TO_SERVER: u16 = 1;
pub const MSG_SHUTDOWN: u16 = 2;

/// Receive buffer, large enough to notice oversized datagrams.
const RECEIVE_BUFFER_SIZE: usize = 512;

/// Broadcast address of the first adapter able to broadcast, preferring
/// non-loopback interfaces.
pub fn detect_broadcast_address() -> Option<IpAddr> {
    let interfaces = match if_addrs::get_if_addrs() {
        Ok(interfaces) => interfaces,
        Err(error) => {
            warn!("[DISCOVERY] Unable to list network adapters: {}", error);
            return None;
        }
    };

    let broadcast_of = |interface: &if_addrs::Interface| -> Option<Ipv4Addr> {
        match &interface.addr {
            if_addrs::IfAddr::V4(v4) => v4.broadcast,
            _ => None,
        }
    };

    interfaces
        .iter()
        .filter(|interface| !interface.is_loopback())
        .find_map(broadcast_of)
        .or_else(|| interfaces.iter().find_map(broadcast_of))
        .map(IpAddr::V4)
}

/// Resolves the echo destination. An empty address falls back to
/// [`detect_broadcast_address`]; `None` means echoing is off.
pub async fn resolve_echo_target(address: &str, port: u16) -> Result<Option<SocketAddr>, DiscoveryError> {
    let address = address.trim();
    if address.is_empty() {
        let detected = detect_broadcast_address().map(|ip| SocketAddr::new(ip, port));
        match detected {
            Some(target) => info!("[DISCOVERY] Echo broadcast address detected: {}", target),
            None => warn!("[DISCOVERY] No broadcast capable adapter found, echo disabled"),
        }
        return Ok(detected);
    }
    if let Ok(ip) = address.parse::<IpAddr>() {
        return Ok(Some(SocketAddr::new(ip, port)));
    }
    let mut found = tokio::net::lookup_host((address, port)).await.map_err(|e| DiscoveryError::Resolve {
        address: address.to_string(),
        reason: e.to_string(),
    })?;
    found.next().map(Some).ok_or_else(|| DiscoveryError::Resolve {
        address: address.to_string(),
        reason: "no addresses found".to_string(),
    })
}

/// Binds `0.0.0.0:port` with address reuse and broadcast enabled.
pub fn bind_discovery_socket(port: u16) -> Result<UdpSocket, DiscoveryError> {
    let address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), port);
    let bind_error = |source: std::io::Error| DiscoveryError::Bind { address, source };

    let socket = Socket::new(Domain::IPV4, Type::DGRAM, Some(Protocol::UDP)).map_err(bind_error)?;
    socket.set_reuse_address(true).map_err(bind_error)?;
    socket.set_broadcast(true).map_err(bind_error)?;
    socket.bind(&address.into()).map_err(bind_error)?;
    socket.set_nonblocking(true).map_err(bind_error)?;

    let std_socket: std::net::UdpSocket = socket.into();
    Ok(UdpSocket::from_std(std_socket)?)
}

/// Receive task body. Runs until the shutdown signal or a socket error.
pub async fn receive_loop(
    socket: UdpSocket,
    settings: DiscoverySettings,
    commands: UnboundedSender<ClientCommand>,
    events: UnboundedSender<ClusterEvent>,
    mut shutdown_handler: watch::Receiver<bool>,
) {
    let mut buffer = [0u8; RECEIVE_BUFFER_SIZE];
    let local_address = socket.local_addr().ok();
    info!("[DISCOVERY] Receiver started on {:?}", local_address);

    loop {
        tokio::select! {
            _ = shutdown_handler.changed() => {
                break;
            }
            result = socket.recv_from(&mut buffer) => {
                match result {
                    Ok((size, from)) => {
                        handle_datagram(&socket, &buffer[..size], from, &settings, &commands, &events).await;
                    }
                    Err(e) => {
                        error!("[DISCOVERY] Receive error: {}", e);
                        break;
                    }
                }
            }
        }
    }

    info!("[DISCOVERY] Receiver stopped on {:?}", local_address);
}

/// Echoes, judges and forwards one datagram.
pub async fn handle_datagram(
    socket: &UdpSocket,
    bytes: &[u8],
    from: SocketAddr,
    settings: &DiscoverySettings,
    commands: &UnboundedSender<ClientCommand>,
    events: &UnboundedSender<ClusterEvent>,
) {
    let datagram = match Datagram::from_bytes(bytes) {
        Ok(datagram) => datagram,
        Err(e) => {
            debug!("[DISCOVERY] Dropped datagram from {}: {}", from, e);
            return;
        }
    };

    if let (Some(echo), Some(target)) = (datagram.echo(), settings.echo_target) {
        match echo.to_bytes() {
            Ok(payload) => match socket.send_to(&payload, target).await {
                Ok(_) => debug!("[DISCOVERY] Echoed datagram to {} ({} hops left)", target, echo.echo_count),
                Err(e) => warn!("[DISCOVERY] Echo to {} failed: {}", target, e),
            },
            Err(e) => warn!("[DISCOVERY] Unable to encode echo: {}", e),
        }
    }

    match datagram.evaluate(&settings.cluster_name) {
        DiscoveryVerdict::Connect { server } => {
            info!("[DISCOVERY] Server \"{}\" announced by {}", server, from);
            let _ = events.send(ClusterEvent::ServerAnnounced {
                server: server.clone(),
                cluster: datagram.cluster_name.clone(),
            });
            let _ = commands.send(ClientCommand::Connect(server));
        }
        DiscoveryVerdict::Shutdown => {
            info!("[DISCOVERY] Shutdown requested for cluster \"{}\"", settings.cluster_name);
            let _ = events.send(ClusterEvent::ShutdownRequested {
                cluster: settings.cluster_name.clone(),
            });
        }
        DiscoveryVerdict::OtherCluster { cluster } => {
            info!("[DISCOVERY] {} message for other cluster \"{}\" ignored", datagram.kind(), cluster);
        }
        DiscoveryVerdict::Unhandled(message_type) => {
            info!("[DISCOVERY] Datagram {} received", message_type);
        }
    }
}
