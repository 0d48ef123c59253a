use crate::channel::enums::transport_error::TransportError;

/// How a receive task ended. `error` is `None` when the channel was closed
/// on request.
#[derive(Debug)]
pub struct ChannelExit {
    pub generation: u64,
    pub server: String,
    pub error: Option<TransportError>,
}
