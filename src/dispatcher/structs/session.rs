use crate::handshake::enums::handshake_state::HandshakeState;
use crate::host::types::view_list::ViewList;

/// Per-connection bookkeeping. Lives as long as one control channel.
#[derive(Clone)]
pub struct Session {
    pub server_address: Option<String>,
    pub node_name: String,
    pub state: HandshakeState,
    pub clock_offset: f64,
    pub views: ViewList,
}
