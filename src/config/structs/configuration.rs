use serde::{Deserialize, Serialize};
use crate::config::structs::cluster_config::ClusterConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub cluster: ClusterConfig,
}
