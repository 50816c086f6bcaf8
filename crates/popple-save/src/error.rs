use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Save file is corrupt: {0}")]
    CorruptData(#[from] serde_json::Error),

    #[error("Current scene is not a level: {0:?}")]
    NotALevel(String),

    #[error("No rank stats were provided")]
    MissingStats,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error means the save file exists but failed to decode
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Error::CorruptData(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_corrupt() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        assert!(Error::CorruptData(json_err).is_corrupt());

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(!Error::Io(io_err).is_corrupt());
    }
}
