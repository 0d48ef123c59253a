use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use log::{debug, info};
use parking_lot::RwLock;
use tokio::time::Instant;
use crate::host::enums::parameter_error::ParameterError;
use crate::host::enums::parameter_value::ParameterValue;
use crate::host::structs::headless_host::HeadlessHost;
use crate::host::traits::cluster_host::ClusterHost;

impl HeadlessHost {
    pub fn new() -> HeadlessHost {
        HeadlessHost {
            started: Instant::now(),
            offset: RwLock::new(0.0),
            parameters: RwLock::new(HashMap::new()),
            graph_cleanups: AtomicU64::new(0),
        }
    }

    /// Declares a parameter and its type. Redeclaring replaces the value.
    pub fn declare_parameter(&self, name: &str, initial: ParameterValue) {
        self.parameters.write().insert(name.to_string(), initial);
    }

    pub fn parameter(&self, name: &str) -> Option<ParameterValue> {
        self.parameters.read().get(name).cloned()
    }

    pub fn clock_offset(&self) -> f64 {
        *self.offset.read()
    }

    pub fn graph_cleanups(&self) -> u64 {
        self.graph_cleanups.load(Ordering::SeqCst)
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        Self::new()
    }
}

impl ClusterHost for HeadlessHost {
    fn instance_time(&self) -> f64 {
        self.started.elapsed().as_secs_f64() + *self.offset.read()
    }

    fn offset_instance_time(&self, offset: f64) {
        *self.offset.write() += offset;
    }

    fn cleanup_module_graph(&self) {
        self.graph_cleanups.fetch_add(1, Ordering::SeqCst);
        debug!("[HOST] Module graph cleaned up");
    }

    fn set_parameter(&self, name: &str, value: &str) -> Result<(), ParameterError> {
        let mut parameters = self.parameters.write();
        let current = parameters.get_mut(name).ok_or_else(|| ParameterError::NotFound(name.to_string()))?;
        let parsed = current.parse_as(value).map_err(|reason| ParameterError::Parse {
            name: name.to_string(),
            reason,
        })?;
        *current = parsed;
        info!("[HOST] Parameter {} updated", name);
        Ok(())
    }
}
