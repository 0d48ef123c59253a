use thiserror::Error;
use crate::channel::enums::transport_error::TransportError;
use crate::handshake::enums::protocol_error::ProtocolError;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("send failed: {0}")]
    Send(#[from] TransportError),
}
