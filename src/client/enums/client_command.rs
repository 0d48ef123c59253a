/// Requests handled by the supervisor task, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    Connect(String),
    Disconnect,
    Stop,
}
