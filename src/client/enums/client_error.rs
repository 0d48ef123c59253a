use thiserror::Error;
use crate::channel::enums::transport_error::TransportError;
use crate::discovery::enums::discovery_error::DiscoveryError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("discovery: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("transport: {0}")]
    Transport(#[from] TransportError),

    #[error("not connected to a server")]
    NotConnected,

    #[error("client has been stopped")]
    Stopped,
}
