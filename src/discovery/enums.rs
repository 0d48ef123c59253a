pub mod datagram_error;
pub mod datagram_type;
pub mod discovery_error;
pub mod discovery_verdict;
