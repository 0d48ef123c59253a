//! Seams to the application that embeds the cluster client.
//!
//! The client never renders anything itself. It talks to:
//! - [`ClusterView`](traits::cluster_view::ClusterView): view endpoints that
//!   can be connected, disconnected and fed camera state,
//! - [`ClusterHost`](traits::cluster_host::ClusterHost): the instance clock,
//!   the module graph and the parameter registry.
//!
//! [`HeadlessHost`](structs::headless_host::HeadlessHost) implements the
//! host side without any graphics so a node can run standalone.

/// Parameter errors and values.
pub mod enums;

/// Implementation blocks for the headless host.
pub mod impls;

/// Headless host structure.
pub mod structs;

/// View and host trait definitions.
pub mod traits;

/// Shared collection types.
pub mod types;
