//! Error types for Static Gate

use thiserror::Error;

/// Main error type for Static Gate operations
#[derive(Error, Debug)]
pub enum GateError {
    /// The media element refused to start playback (autoplay policy, missing asset)
    #[error("Playback rejected: {0}")]
    PlaybackRejected(String),

    /// The host refused to close the window
    #[error("Close refused: {0}")]
    CloseRefused(String),

    /// The host side of the capability channel has gone away
    #[error("Media host unavailable")]
    HostUnavailable,

    /// A script evaluated in the page failed
    #[error("Script error: {0}")]
    Script(String),

    /// Invalid configuration value
    #[error("Config error: {0}")]
    Config(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using GateError
pub type GateResult<T> = Result<T, GateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GateError::PlaybackRejected("NotAllowedError".to_string());
        assert_eq!(format!("{}", err), "Playback rejected: NotAllowedError");
        assert_eq!(format!("{}", GateError::HostUnavailable), "Media host unavailable");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let gate_err: GateError = io_err.into();
        assert!(matches!(gate_err, GateError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let gate_err: GateError = json_err.into();
        assert!(matches!(gate_err, GateError::Json(_)));
    }
}
