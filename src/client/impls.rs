pub mod client_state;
pub mod cluster_client;
pub mod cluster_event;
pub mod setup_step;
pub mod supervisor;
