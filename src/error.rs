use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExampleError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExampleError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = ExampleError::from(io);

        assert_eq!(err.to_string(), "pipe closed");
        match err {
            ExampleError::Io(inner) => assert_eq!(inner.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("unexpected variant: {other:?}"),
        }
    }
}
