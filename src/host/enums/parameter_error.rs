use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParameterError {
    #[error("parameter {0} not found")]
    NotFound(String),

    #[error("parameter {name} rejected value: {reason}")]
    Parse { name: String, reason: String },
}
