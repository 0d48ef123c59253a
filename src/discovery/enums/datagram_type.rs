#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatagramType {
    ConnectToServer,
    Shutdown,
    Unknown(u16),
}
