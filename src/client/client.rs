use std::ops::RangeInclusive;
use std::time::Duration;
use log::info;
use rand::RngExt;
use tokio::net::TcpStream;
use crate::channel::enums::transport_error::TransportError;
use crate::channel::structs::control_channel::ControlChannel;

/// Random delay in `jitter` milliseconds, so nodes woken by the same
/// broadcast do not hit the server at once.
pub fn connect_delay(jitter: RangeInclusive<u64>) -> Duration {
    if jitter.is_empty() {
        return Duration::ZERO;
    }
    let mut rng = rand::rng();
    Duration::from_millis(rng.random_range(jitter))
}

/// Waits the jitter, then connects.
pub async fn dial(server: String, jitter: RangeInclusive<u64>, default_port: u16, timeout: Option<Duration>) -> Result<TcpStream, TransportError> {
    let wait = connect_delay(jitter);
    info!("[CLIENT] Wait {} milliseconds before connecting to {} ...", wait.as_millis(), server);
    tokio::time::sleep(wait).await;
    ControlChannel::connect(&server, default_port, timeout).await
}
