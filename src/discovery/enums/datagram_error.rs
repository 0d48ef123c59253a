use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatagramError {
    #[error("datagram of {received} bytes, expected {expected}")]
    WrongSize { expected: usize, received: usize },

    #[error("{field} declares {length} bytes, at most {max} fit")]
    BadLength { field: &'static str, length: usize, max: usize },
}
