// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert_and_display() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(err.to_string().contains("missing"));
    }
}
