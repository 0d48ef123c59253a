/// A view endpoint registered with the client.
///
/// Calls arrive on the control channel's receive task, so implementations
/// must not block for long.
pub trait ClusterView: Send + Sync {
    fn name(&self) -> String;

    /// Connect this view to the named endpoint of the module graph.
    fn connect_view(&self, to_name: &str);

    fn disconnect_view(&self);

    /// Keep the module graph setup body until the graph is rebuilt.
    fn set_setup_message(&self, body: &[u8]);

    /// Ask the application for its initial camera state; it answers later
    /// through `ClusterClient::continue_setup`.
    fn request_camera_bootstrap(&self);

    /// Apply a serialised camera pose received from the server.
    fn deserialise_camera(&self, body: &[u8]);
}
