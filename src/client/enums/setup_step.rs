/// View-driven requests during setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    /// Ask the server which view endpoint to connect to.
    RequestViewConnect,
    /// Ask the server for the current camera.
    RequestCameraUpdate,
}
