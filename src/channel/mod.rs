//! Control channel to the coordination server.
//!
//! One TCP connection per session. The connection is split in two tasks:
//!
//! - the receive task reads `header | body`, decodes the frame and hands it
//!   to a [`FrameSink`](traits::frame_sink::FrameSink),
//! - the writer task drains an unbounded queue of encoded frames.
//!
//! Sending through [`ChannelSender`](structs::channel_sender::ChannelSender)
//! never blocks, so a sink may answer from inside its own callback.
//!
//! Both tasks select on a `watch` shutdown signal. Closing a channel raises
//! the signal and joins both tasks; the receive task reports how it ended
//! with a [`ChannelExit`](structs::channel_exit::ChannelExit).

/// Frame reading and the receive/writer loops.
#[allow(clippy::module_inception)]
pub mod channel;

/// Transport errors.
pub mod enums;

/// Implementation blocks for the channel and its sender.
pub mod impls;

/// Channel, sender and exit report structures.
pub mod structs;

/// Receiver side of the channel.
pub mod traits;

#[cfg(test)]
mod tests;
