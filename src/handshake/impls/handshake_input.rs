use crate::handshake::enums::handshake_input::HandshakeInput;

impl HandshakeInput {
    /// Wire name of the message behind this input, used in error reports.
    pub fn name(&self) -> &'static str {
        match self {
            HandshakeInput::Dialing => "dial",
            HandshakeInput::Connected => "connect",
            HandshakeInput::HandshakeBack => "HANDSHAKE_BACK",
            HandshakeInput::HandshakeDone => "HANDSHAKE_DONE",
            HandshakeInput::TimeSync(_) => "TIMESYNC",
            HandshakeInput::ModuleGraph(_) => "MODULEGRAPH",
            HandshakeInput::ViewConnect(_) => "VIEWCONNECT",
            HandshakeInput::ParamUpdate { .. } => "PARAMUPDATE",
            HandshakeInput::CameraUpdate(_) => "CAMERAUPDATE",
            HandshakeInput::Disconnected => "disconnect",
        }
    }
}
