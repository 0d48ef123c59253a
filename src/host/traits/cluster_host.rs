use crate::host::enums::parameter_error::ParameterError;

/// The application the client synchronises.
pub trait ClusterHost: Send + Sync {
    /// Current logical animation time in seconds.
    fn instance_time(&self) -> f64;

    /// Shift the instance clock by `offset` seconds.
    fn offset_instance_time(&self, offset: f64);

    fn cleanup_module_graph(&self);

    fn set_parameter(&self, name: &str, value: &str) -> Result<(), ParameterError>;
}
