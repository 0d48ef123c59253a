/// Result of folding a complete sample set against the local clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeSyncEstimate {
    pub latency: f64,
    pub remote_time: f64,
    pub local_time: f64,
    pub offset: f64,
}
