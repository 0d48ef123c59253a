//! UDP discovery of the coordination server.
//!
//! The server broadcasts fixed-size datagrams on the discovery port:
//!
//! ```text
//! type u16 | echo u8 | len1 u8 | str1[127] | len2 u8 | str2[127]   (259 bytes, LE)
//! ```
//!
//! `CONNECT_TO_SERVER` carries the cluster name in `str1` and the server
//! address in `str2`; `SHUTDOWN` carries the cluster name. A datagram with a
//! non-zero echo budget is re-broadcast once with the budget decremented, so
//! announcements cross network segments a bounded number of times.
//!
//! The listener never connects anything itself. Announcements for this
//! cluster become `ClientCommand::Connect` for the client supervisor and
//! `ClusterEvent`s for the application.

/// Datagram constants, broadcast address detection and the receive loop.
#[allow(clippy::module_inception)]
pub mod discovery;

/// Datagram types, verdicts and errors.
pub mod enums;

/// Implementation blocks for datagrams and the listener.
pub mod impls;

/// Datagram, listener and settings structures.
pub mod structs;
