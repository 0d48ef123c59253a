use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use crate::channel::structs::channel_control::ChannelControl;
use crate::channel::structs::channel_sender::ChannelSender;

/// A live connection and the two tasks serving it.
#[derive(Debug)]
pub struct ControlChannel {
    pub server: String,
    pub peer_address: SocketAddr,
    pub generation: u64,
    pub sender: ChannelSender,
    pub control: Arc<ChannelControl>,
    pub reader: Option<JoinHandle<()>>,
    pub writer: Option<JoinHandle<()>>,
}
