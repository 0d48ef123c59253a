pub mod datagram;
pub mod datagram_type;
pub mod discovery_listener;
