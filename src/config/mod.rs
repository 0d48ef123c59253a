//! Configuration management.
//!
//! The node reads `config.toml` from the working directory (or the path given
//! on the command line):
//!
//! ```toml
//! log_level = "info"
//!
//! [cluster]
//! name = "MM04SC"
//! udp_port = 30202
//! udp_echo_broadcast_address = ""
//! node_name = ""
//! server_port = 30201
//! connect_jitter_min_ms = 100
//! connect_jitter_max_ms = 600
//! connect_timeout_ms = 0
//! discovery_enabled = true
//! ```
//!
//! Missing keys in `[cluster]` take the defaults above. An empty echo
//! address is replaced by the broadcast address of the first suitable
//! adapter, an empty node name by the host name.

/// Configuration errors.
pub mod enums;

/// Implementation blocks for loading, saving and validation.
pub mod impls;

/// Configuration data structures.
pub mod structs;
