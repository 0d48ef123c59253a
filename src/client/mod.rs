//! The cluster client: the piece an application embeds.
//!
//! [`ClusterClient::start`](structs::cluster_client::ClusterClient::start)
//! spawns a supervisor task and, unless disabled, the discovery listener. The
//! supervisor is the only owner of the control channel. Everything else, the
//! discovery listener included, asks it for changes through a command queue:
//!
//! ```text
//! discovery ──Connect(server)──▶ supervisor ──▶ ControlChannel ──▶ Dispatcher
//! application ─Connect/Disconnect/Stop─┘                     └──▶ ClusterEvent
//! ```
//!
//! While a jittered connect is in flight a newer `Connect` abandons it, so
//! the last announcement wins. An existing channel is always closed and its
//! tasks joined before the next connect starts.

/// Jittered dialling.
#[allow(clippy::module_inception)]
pub mod client;

/// Commands, events, setup steps and client errors.
pub mod enums;

/// Implementation blocks for the client and its supervisor.
pub mod impls;

/// Client, shared state and supervisor structures.
pub mod structs;
