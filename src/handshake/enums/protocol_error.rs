use thiserror::Error;
use crate::codec::enums::message_id::MessageId;
use crate::handshake::enums::handshake_state::HandshakeState;

/// A well framed message that makes no sense for the session. These are
/// logged and the session carries on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProtocolError {
    #[error("unexpected {message} in state {state}")]
    Unexpected { state: HandshakeState, message: String },

    #[error("unknown message id {0}")]
    UnknownMessage(u32),

    #[error("unable to set parameter {0}; not found")]
    UnknownParameter(String),

    #[error("unable to set parameter {name}; parse error: {reason}")]
    ParameterParse { name: String, reason: String },

    #[error("malformed {message} body: {reason}")]
    MalformedBody { message: MessageId, reason: String },
}
