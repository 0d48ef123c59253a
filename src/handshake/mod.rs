//! Handshake and time synchronisation with the coordination server.
//!
//! The session state is a plain enum and every protocol step is a pure
//! function of `(state, input)`:
//!
//! ```text
//! Idle ─dial─▶ Connecting ─connected─▶ AwaitingHandshakeBack ─BACK─▶ AwaitingHandshakeDone
//!   ─DONE─▶ TimeSyncing ─TIMESYNC(n)─▶ AwaitingGraphAck ─MODULEGRAPH─▶ ViewConnecting
//!   ─VIEWCONNECT─▶ Steady
//! ```
//!
//! `Disconnected` moves any state to `Closed`. The transition returns the
//! side effect the caller has to perform as a [`HandshakeAction`]; nothing
//! in this module touches a socket or the host.
//!
//! [`HandshakeAction`]: enums::handshake_action::HandshakeAction

/// Time sync constants, offset estimation and node identity.
#[allow(clippy::module_inception)]
pub mod handshake;

/// States, inputs, actions and protocol errors.
pub mod enums;

/// The transition function and time sync body encoding.
pub mod impls;

/// Time sync payload and estimate.
pub mod structs;
