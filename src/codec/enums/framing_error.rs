use thiserror::Error;

/// The byte stream does not hold a well formed frame. Once this is seen on a
/// control channel the stream cannot be trusted any more.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("bad magic number: expected {expected:#010x}, received {found:#010x}")]
    BadMagic { expected: u32, found: u32 },

    #[error("truncated data: {needed} bytes declared, {available} available")]
    Truncated { needed: usize, available: usize },

    #[error("body of {length} bytes exceeds the limit of {max} bytes")]
    TooLarge { length: usize, max: usize },

    #[error("{extra} unexpected bytes after the frame body")]
    TrailingBytes { extra: usize },
}
