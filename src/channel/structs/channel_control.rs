use parking_lot::Mutex;
use tokio::sync::watch;
use crate::channel::enums::transport_error::TransportError;

/// Shutdown signal shared by a channel's owner, receive task and write task.
/// The first task failure is kept so the exit report can carry it.
#[derive(Debug)]
pub struct ChannelControl {
    pub shutdown: watch::Sender<bool>,
    pub failure: Mutex<Option<TransportError>>,
}
