pub mod client_command;
pub mod client_error;
pub mod cluster_event;
pub mod setup_step;
