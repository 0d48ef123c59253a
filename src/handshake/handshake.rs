use crate::handshake::structs::time_sync_estimate::TimeSyncEstimate;

/// Number of round trips in one time sync exchange.
pub const TIME_SYNC_SAMPLES: usize = 10;

/// `count u32 | reserved u32 | time f64 × TIME_SYNC_SAMPLES`.
pub const TIME_SYNC_BODY_SIZE: usize = 8 + 8 * TIME_SYNC_SAMPLES;

/// Estimates the offset to add to the local instance clock.
///
/// The latency is the mean of half of each consecutive sample delta, the
/// remote time is the last sample plus that latency. Returns `None` for an
/// empty sample set; a single sample yields zero latency.
pub fn estimate_offset(times: &[f64], local_time: f64) -> Option<TimeSyncEstimate> {
    let last = *times.last()?;
    let latency = if times.len() < 2 {
        0.0
    } else {
        let sum: f64 = times.windows(2).map(|pair| (pair[1] - pair[0]) * 0.5).sum();
        sum / (times.len() - 1) as f64
    };
    let remote_time = last + latency;

    Some(TimeSyncEstimate {
        latency,
        remote_time,
        local_time,
        offset: remote_time - local_time,
    })
}

/// Name this node reports in `HANDSHAKE_INIT`: the configured name, else the
/// host name, else `node-<pid>`.
pub fn node_identity(configured: Option<&str>) -> String {
    if let Some(name) = configured.map(str::trim).filter(|name| !name.is_empty()) {
        return name.to_string();
    }
    hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("node-{}", std::process::id()))
}

/// `HANDSHAKE_INIT` body: the identity bytes followed by a NUL.
pub fn handshake_init_body(identity: &str) -> Vec<u8> {
    let mut body = Vec::with_capacity(identity.len() + 1);
    body.extend_from_slice(identity.as_bytes());
    body.push(0);
    body
}
