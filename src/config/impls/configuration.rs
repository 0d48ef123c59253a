use std::fs::File;
use std::io::Write;
use std::net::IpAddr;
use regex::Regex;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::cluster_config::ClusterConfig;
use crate::config::structs::configuration::Configuration;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            cluster: ClusterConfig::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    pub fn save_from_config(path: &str, config: &Configuration) -> Result<(), ConfigurationError> {
        let data = toml::to_string(config)?;
        Self::save_file(path, data)
    }

    /// Loads and validates `path`. When the file is missing or broken and
    /// `create` is set, a default file is written and
    /// [`ConfigurationError::Created`] returned so the operator can edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {} file, or start this app using '--create-config' as parameter.", path);
                    return Err(ConfigurationError::Missing { path: path.to_string() });
                }
                eprintln!("Creating config file..");

                return match Configuration::save_from_config(path, &Configuration::init()) {
                    Ok(_) => {
                        eprintln!("Please edit {} and start again, exiting now...", path);
                        Err(ConfigurationError::Created { path: path.to_string() })
                    }
                    Err(e) => {
                        eprintln!("{} could not be created, check permissions...", path);
                        Err(e)
                    }
                };
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let check_map = vec![
            ("log_level", self.log_level.clone(), r"^(off|trace|debug|info|warn|error)$"),
            ("cluster.name", self.cluster.name.clone(), r"^[A-Za-z0-9_.\-]{1,127}$"),
            ("cluster.node_name", self.cluster.node_name.clone(), r"^[^\x00]{0,255}$"),
            ("cluster.udp_echo_broadcast_address", self.cluster.udp_echo_broadcast_address.clone(), r"^[A-Za-z0-9_.:\-]{0,253}$"),
        ];
        for (name, value, regex) in check_map {
            Self::validate_value(name, &value, regex)?;
        }

        if self.cluster.udp_port == 0 {
            return Err(invalid("cluster.udp_port", "0", "must be between 1 and 65535"));
        }
        if self.cluster.server_port == 0 {
            return Err(invalid("cluster.server_port", "0", "must be between 1 and 65535"));
        }
        if self.cluster.connect_jitter_min_ms > self.cluster.connect_jitter_max_ms {
            return Err(invalid(
                "cluster.connect_jitter_min_ms",
                &self.cluster.connect_jitter_min_ms.to_string(),
                "must not exceed connect_jitter_max_ms",
            ));
        }
        let echo = self.cluster.udp_echo_broadcast_address.as_str();
        if echo.contains(':') && echo.parse::<IpAddr>().is_err() {
            return Err(invalid("cluster.udp_echo_broadcast_address", echo, "expected an address without port"));
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &str) -> Result<(), ConfigurationError> {
        let regex_check = Regex::new(regex).map_err(|e| invalid(name, regex, &e.to_string()))?;
        if !regex_check.is_match(value) {
            return Err(invalid(name, value, &format!("does not match {}", regex_check)));
        }
        Ok(())
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        match self.log_level.as_str() {
            "off" => log::LevelFilter::Off,
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            _ => log::LevelFilter::Info,
        }
    }
}

fn invalid(field: &str, value: &str, reason: &str) -> ConfigurationError {
    ConfigurationError::Invalid {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
