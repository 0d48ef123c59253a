use crate::handshake::enums::handshake_action::HandshakeAction;
use crate::handshake::enums::handshake_input::HandshakeInput;
use crate::handshake::enums::handshake_state::HandshakeState;
use crate::handshake::enums::protocol_error::ProtocolError;

impl HandshakeState {
    /// Computes the next state and the side effect to perform. Pure; the
    /// caller owns the session and carries out the action.
    pub fn transition(self, input: HandshakeInput) -> Result<(HandshakeState, HandshakeAction), ProtocolError> {
        use HandshakeState::*;

        let next = match (self, input) {
            (_, HandshakeInput::Disconnected) => (Closed, HandshakeAction::Close),
            (Idle, HandshakeInput::Dialing) => (Connecting, HandshakeAction::None),
            (Connecting, HandshakeInput::Connected) => (AwaitingHandshakeBack, HandshakeAction::SendHandshakeInit),
            (AwaitingHandshakeBack, HandshakeInput::HandshakeBack) => (AwaitingHandshakeDone, HandshakeAction::SendHandshakeForth),
            (AwaitingHandshakeDone, HandshakeInput::HandshakeDone) => (TimeSyncing, HandshakeAction::StartTimeSync),
            (TimeSyncing, HandshakeInput::TimeSync(data)) => {
                if data.is_complete() {
                    (AwaitingGraphAck, HandshakeAction::CompleteTimeSync(data))
                } else {
                    (TimeSyncing, HandshakeAction::EchoTimeSync(data))
                }
            }
            (AwaitingGraphAck, HandshakeInput::ModuleGraph(body)) => (ViewConnecting, HandshakeAction::SetupViews(body)),
            (AwaitingGraphAck | ViewConnecting | Steady, HandshakeInput::ViewConnect(name)) => {
                (Steady, HandshakeAction::ConnectViews(name))
            }
            (ViewConnecting | Steady, HandshakeInput::ParamUpdate { name, value }) => {
                (self, HandshakeAction::ApplyParameter { name, value })
            }
            (ViewConnecting | Steady, HandshakeInput::CameraUpdate(body)) => (self, HandshakeAction::ForwardCamera(body)),
            (state, input) => {
                return Err(ProtocolError::Unexpected {
                    state,
                    message: input.name().to_string(),
                });
            }
        };

        Ok(next)
    }

    /// True once the time sync finished and the server streams state.
    pub fn is_synchronized(self) -> bool {
        matches!(self, HandshakeState::AwaitingGraphAck | HandshakeState::ViewConnecting | HandshakeState::Steady)
    }
}

impl std::fmt::Display for HandshakeState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
