use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The password is part of the input, so only the reason is reported.
    #[error("malformed connection string: {0}")]
    MalformedConnection(&'static str),
    #[error("invalid port '{0}': expected a number between 0 and 65535")]
    InvalidPort(String),
}
