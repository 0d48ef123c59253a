pub mod datagram;
pub mod discovery_listener;
pub mod discovery_settings;
