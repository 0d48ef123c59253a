use tokio::sync::mpsc::UnboundedSender;

/// Cloneable handle that queues encoded frames for the writer task.
#[derive(Debug, Clone)]
pub struct ChannelSender {
    pub server: String,
    pub queue: UnboundedSender<Vec<u8>>,
}
