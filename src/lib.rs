//! # cluster-sync
//!
//! Client side of a render cluster. A node listens for the server's UDP
//! announcement, opens a TCP control channel to it, handshakes, aligns its
//! animation clock with the server's and then receives module graph setup,
//! view connection requests, parameter updates and camera state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cluster_sync::client::structs::cluster_client::ClusterClient;
//! use cluster_sync::config::structs::cluster_config::ClusterConfig;
//! use cluster_sync::host::structs::headless_host::HeadlessHost;
//!
//! let (client, mut events) = ClusterClient::start(ClusterConfig::default(), Arc::new(HeadlessHost::new())).await?;
//! while let Some(event) = events.recv().await {
//!     println!("{:?}", event);
//! }
//! client.shutdown().await;
//! ```
//!
//! ## Modules
//!
//! - [`codec`] - Frame and compound block encoding
//! - [`discovery`] - UDP announcement listener with echo
//! - [`channel`] - TCP control channel with receive and write tasks
//! - [`handshake`] - Session state machine and time sync
//! - [`dispatcher`] - Routes messages to handlers
//! - [`host`] - Traits the embedding application implements
//! - [`client`] - The supervisor and public client API
//! - [`config`] - TOML configuration
//! - [`common`] - Logging setup
//! - [`structs`] - CLI arguments

/// Control channel over TCP.
///
/// Owns the socket halves in a receive task and a write task. Frames are
/// decoded on the receive task and handed to a frame sink.
pub mod channel;

/// Client supervisor and public API.
pub mod client;

/// Wire format of control channel messages.
pub mod codec;

/// Logging setup and deadlock reporting.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validation and defaults for the TOML configuration file.
pub mod config;

/// UDP discovery of the cluster server.
pub mod discovery;

/// Per-connection message routing.
pub mod dispatcher;

/// Handshake and time synchronisation state machine.
pub mod handshake;

/// Interfaces to the embedding application.
pub mod host;

/// Command-line interface structures.
pub mod structs;
