/// One discovery datagram, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Datagram {
    pub message_type: u16,
    pub echo_count: u8,
    pub cluster_name: String,
    pub server_address: String,
}
