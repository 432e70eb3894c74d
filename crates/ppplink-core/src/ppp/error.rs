use thiserror::Error;

#[derive(Debug, Error)]
pub enum HeaderError {
    #[error("header too short: need {needed} bytes, got {actual}")]
    TooShort { needed: usize, actual: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("protocol value {value} does not fit in 16 bits")]
    ValueOutOfRange { value: u64 },
    #[error("unknown protocol name {name:?}")]
    UnknownName { name: String },
    #[error("invalid protocol specification {input:?}")]
    InvalidSpec { input: String },
}
