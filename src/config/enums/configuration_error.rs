use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("invalid {field} \"{value}\": {reason}")]
    Invalid { field: String, value: String, reason: String },

    #[error("no usable configuration at {path}")]
    Missing { path: String },

    #[error("default configuration written to {path}")]
    Created { path: String },
}
