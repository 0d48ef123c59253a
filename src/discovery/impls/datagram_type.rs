use crate::discovery::discovery::{MSG_CONNECT_TO_SERVER, MSG_SHUTDOWN};
use crate::discovery::enums::datagram_type::DatagramType;

impl DatagramType {
    pub fn from_u16(value: u16) -> DatagramType {
        match value {
            MSG_CONNECT_TO_SERVER => DatagramType::ConnectToServer,
            MSG_SHUTDOWN => DatagramType::Shutdown,
            other => DatagramType::Unknown(other),
        }
    }

    pub fn as_u16(self) -> u16 {
        match self {
            DatagramType::ConnectToServer => MSG_CONNECT_TO_SERVER,
            DatagramType::Shutdown => MSG_SHUTDOWN,
            DatagramType::Unknown(other) => other,
        }
    }
}

impl std::fmt::Display for DatagramType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatagramType::ConnectToServer => write!(f, "Server connect"),
            DatagramType::Shutdown => write!(f, "Shutdown"),
            DatagramType::Unknown(other) => write!(f, "Datagram {}", other),
        }
    }
}
