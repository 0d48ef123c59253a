use byteorder::{ByteOrder, LittleEndian};
use crate::discovery::discovery::{DATAGRAM_SIZE, DATAGRAM_STRING_SIZE, MSG_CONNECT_TO_SERVER, MSG_SHUTDOWN};
use crate::discovery::enums::datagram_error::DatagramError;
use crate::discovery::enums::datagram_type::DatagramType;
use crate::discovery::enums::discovery_verdict::DiscoveryVerdict;
use crate::discovery::structs::datagram::Datagram;

const FIRST_LENGTH_AT: usize = 3;
const SECOND_LENGTH_AT: usize = FIRST_LENGTH_AT + 1 + DATAGRAM_STRING_SIZE;

impl Datagram {
    pub fn connect_to_server(cluster_name: &str, server_address: &str, echo_count: u8) -> Datagram {
        Datagram {
            message_type: MSG_CONNECT_TO_SERVER,
            echo_count,
            cluster_name: cluster_name.to_string(),
            server_address: server_address.to_string(),
        }
    }

    pub fn shutdown(cluster_name: &str, echo_count: u8) -> Datagram {
        Datagram {
            message_type: MSG_SHUTDOWN,
            echo_count,
            cluster_name: cluster_name.to_string(),
            server_address: String::new(),
        }
    }

    pub fn kind(&self) -> DatagramType {
        DatagramType::from_u16(self.message_type)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Datagram, DatagramError> {
        if bytes.len() != DATAGRAM_SIZE {
            return Err(DatagramError::WrongSize { expected: DATAGRAM_SIZE, received: bytes.len() });
        }

        Ok(Datagram {
            message_type: LittleEndian::read_u16(&bytes[0..2]),
            echo_count: bytes[2],
            cluster_name: read_string(bytes, FIRST_LENGTH_AT, "cluster name")?,
            server_address: read_string(bytes, SECOND_LENGTH_AT, "server address")?,
        })
    }

    pub fn to_bytes(&self) -> Result<[u8; DATAGRAM_SIZE], DatagramError> {
        let mut bytes = [0u8; DATAGRAM_SIZE];
        LittleEndian::write_u16(&mut bytes[0..2], self.message_type);
        bytes[2] = self.echo_count;
        write_string(&mut bytes, FIRST_LENGTH_AT, &self.cluster_name, "cluster name")?;
        write_string(&mut bytes, SECOND_LENGTH_AT, &self.server_address, "server address")?;
        Ok(bytes)
    }

    /// The copy to re-broadcast, or `None` once the hop budget is spent.
    pub fn echo(&self) -> Option<Datagram> {
        if self.echo_count == 0 {
            return None;
        }
        let mut echo = self.clone();
        echo.echo_count -= 1;
        Some(echo)
    }

    /// An empty cluster name addresses every cluster.
    pub fn is_for_cluster(&self, local_cluster: &str) -> bool {
        self.cluster_name.is_empty() || self.cluster_name == local_cluster
    }

    pub fn evaluate(&self, local_cluster: &str) -> DiscoveryVerdict {
        match self.kind() {
            DatagramType::ConnectToServer | DatagramType::Shutdown if !self.is_for_cluster(local_cluster) => {
                DiscoveryVerdict::OtherCluster { cluster: self.cluster_name.clone() }
            }
            DatagramType::ConnectToServer if self.server_address.is_empty() => DiscoveryVerdict::Unhandled(self.message_type),
            DatagramType::ConnectToServer => DiscoveryVerdict::Connect { server: self.server_address.clone() },
            DatagramType::Shutdown => DiscoveryVerdict::Shutdown,
            DatagramType::Unknown(message_type) => DiscoveryVerdict::Unhandled(message_type),
        }
    }
}

fn read_string(bytes: &[u8], length_at: usize, field: &'static str) -> Result<String, DatagramError> {
    let length = bytes[length_at] as usize;
    if length > DATAGRAM_STRING_SIZE {
        return Err(DatagramError::BadLength { field, length, max: DATAGRAM_STRING_SIZE });
    }
    let raw = &bytes[length_at + 1..length_at + 1 + length];
    Ok(String::from_utf8_lossy(raw).trim_end_matches('\0').to_string())
}

fn write_string(bytes: &mut [u8], length_at: usize, value: &str, field: &'static str) -> Result<(), DatagramError> {
    let raw = value.as_bytes();
    if raw.len() > DATAGRAM_STRING_SIZE {
        return Err(DatagramError::BadLength { field, length: raw.len(), max: DATAGRAM_STRING_SIZE });
    }
    bytes[length_at] = raw.len() as u8;
    bytes[length_at + 1..length_at + 1 + raw.len()].copy_from_slice(raw);
    Ok(())
}
