use crate::client::enums::setup_step::SetupStep;
use crate::codec::enums::message_id::MessageId;

impl SetupStep {
    pub fn message_id(self) -> MessageId {
        match self {
            SetupStep::RequestViewConnect => MessageId::ViewConnect,
            SetupStep::RequestCameraUpdate => MessageId::CameraUpdate,
        }
    }
}
