pub mod client_state;
pub mod cluster_client;
pub mod supervisor;
