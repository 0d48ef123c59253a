use std::net::SocketAddr;
use parking_lot::RwLock;
use crate::channel::structs::channel_sender::ChannelSender;
use crate::host::types::view_list::ViewList;

/// State read by the application and written only by the supervisor (views
/// aside, which the application registers).
#[derive(Default)]
pub struct ClientState {
    pub current_server: RwLock<Option<String>>,
    pub sender: RwLock<Option<ChannelSender>>,
    pub discovery_address: RwLock<Option<SocketAddr>>,
    pub views: ViewList,
}
