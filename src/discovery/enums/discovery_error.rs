use std::net::SocketAddr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("unable to bind discovery socket on {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to resolve echo address {address}: {reason}")]
    Resolve { address: String, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
