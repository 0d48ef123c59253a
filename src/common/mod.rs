//! Process-level helpers: logging setup and the deadlock check.
//!
//! Logging goes through the `log` facade; [`common::setup_logging`] installs a
//! `fern` dispatcher that prints coloured levels with local timestamps:
//!
//! ```text
//! 2026-01-01 12:00:00.000000000 [INFO ][cluster_sync::client::impls::supervisor] [CLIENT] Trying connect to new server "render-master"
//! ```

/// Logging setup and deadlock reporting.
#[allow(clippy::module_inception)]
pub mod common;
