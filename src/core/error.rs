use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeomError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("cannot decode {type_name}: expected {expected} bytes, got {actual}")]
    Decode {
        type_name: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("cannot decode packed bytes")]
    DecodeFailed(#[from] bincode::error::DecodeError),
    #[error("cannot encode packed bytes")]
    EncodeFailed(#[from] bincode::error::EncodeError),
    #[error("index {index} out of range: {type_name} only has {len} components")]
    IndexOutOfRange {
        type_name: &'static str,
        index: usize,
        len: usize,
    },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
    #[error("failed to write packed bytes")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeomError>;
