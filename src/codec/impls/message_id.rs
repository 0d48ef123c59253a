use crate::codec::enums::message_id::MessageId;

impl MessageId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            3 => Some(MessageId::HandshakeInit),
            4 => Some(MessageId::HandshakeBack),
            5 => Some(MessageId::HandshakeForth),
            6 => Some(MessageId::HandshakeDone),
            7 => Some(MessageId::TimeSync),
            8 => Some(MessageId::ModuleGraph),
            9 => Some(MessageId::ViewConnect),
            10 => Some(MessageId::ParamUpdate),
            11 => Some(MessageId::CameraUpdate),
            0xFFFF_FFFF => Some(MessageId::Multiple),
            _ => None,
        }
    }
}

impl From<MessageId> for u32 {
    fn from(id: MessageId) -> Self {
        id.as_u32()
    }
}

impl TryFrom<u32> for MessageId {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        MessageId::from_u32(value).ok_or(value)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            MessageId::HandshakeInit => "HANDSHAKE_INIT",
            MessageId::HandshakeBack => "HANDSHAKE_BACK",
            MessageId::HandshakeForth => "HANDSHAKE_FORTH",
            MessageId::HandshakeDone => "HANDSHAKE_DONE",
            MessageId::TimeSync => "TIMESYNC",
            MessageId::ModuleGraph => "MODULEGRAPH",
            MessageId::ViewConnect => "VIEWCONNECT",
            MessageId::ParamUpdate => "PARAMUPDATE",
            MessageId::CameraUpdate => "CAMERAUPDATE",
            MessageId::Multiple => "MULTIPLE",
        };
        write!(f, "{}", name)
    }
}
