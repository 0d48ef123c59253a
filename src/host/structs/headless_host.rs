use std::collections::HashMap;
use std::sync::atomic::AtomicU64;
use parking_lot::RwLock;
use tokio::time::Instant;
use crate::host::enums::parameter_value::ParameterValue;

/// Host without a renderer: a monotonic instance clock plus an offset and a
/// table of declared parameters.
#[derive(Debug)]
pub struct HeadlessHost {
    pub started: Instant,
    pub offset: RwLock<f64>,
    pub parameters: RwLock<HashMap<String, ParameterValue>>,
    pub graph_cleanups: AtomicU64,
}
