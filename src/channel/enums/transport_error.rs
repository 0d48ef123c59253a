use std::net::SocketAddr;
use thiserror::Error;
use crate::codec::enums::framing_error::FramingError;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("unable to resolve {server}: {reason}")]
    Resolve { server: String, reason: String },

    #[error("unable to connect to {address}: {source}")]
    Connect {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("connecting to {server} timed out after {millis} ms")]
    Timeout { server: String, millis: u64 },

    #[error("control channel is closed")]
    Closed,

    #[error("unable to send: {0}")]
    Send(#[source] std::io::Error),

    #[error("server closed the connection")]
    PeerClosed,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("framing error: {0}")]
    Framing(#[from] FramingError),
}
