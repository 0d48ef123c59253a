//! Wire codec for the cluster control channel.
//!
//! Every message exchanged with the coordination server is a frame:
//!
//! ```text
//! ┌──────────────┬──────────────┬──────────────┬─────────────────────┐
//! │ magic (u32)  │ message (u32)│ length (u32) │ body (length bytes) │
//! └──────────────┴──────────────┴──────────────┴─────────────────────┘
//! ```
//!
//! All integers are little-endian. A frame with message ID
//! [`MessageId::Multiple`](enums::message_id::MessageId::Multiple) is a
//! compound frame; its body is a sequence of `block id | block length | body`
//! sub-blocks that consume the body exactly.
//!
//! A frame with a wrong magic number means the byte stream is no longer
//! aligned to frame boundaries. The receive loop treats that as fatal for the
//! channel instance.

/// Frame constants and compound split/join.
#[allow(clippy::module_inception)]
pub mod codec;

/// Message identifiers and framing errors.
pub mod enums;

/// Implementation blocks for frames, headers and identifiers.
pub mod impls;

/// Frame, header and compound block structures.
pub mod structs;
