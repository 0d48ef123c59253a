pub mod cluster_host;
pub mod cluster_view;
