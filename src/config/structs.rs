/// Root configuration structure.
pub mod configuration;

/// Discovery and control channel settings.
pub mod cluster_config;
