//! Routes frames from the control channel to per-message handlers.
//!
//! The dispatcher owns the [`Session`](structs::session::Session) and runs on
//! the channel's receive task, so session state is never shared. Each handler
//! decodes its body into a handshake input, the pure transition decides the
//! next state and the dispatcher performs the resulting action against the
//! host, the views and the channel.
//!
//! Handler failures are logged and the session continues. Only a framing
//! error, such as a compound body that does not add up, closes the channel.

/// Message handlers and body decoding.
#[allow(clippy::module_inception)]
pub mod dispatcher;

/// Dispatch errors.
pub mod enums;

/// Implementation blocks for the dispatcher and session.
pub mod impls;

/// Dispatcher and session structures.
pub mod structs;

#[cfg(test)]
mod tests;
