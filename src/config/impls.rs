pub mod cluster_config;
pub mod configuration;
