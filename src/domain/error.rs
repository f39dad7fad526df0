//! Domain error types.

/// A malformed price series, with the index of the first offending point.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid price point at index {index}: {reason}")]
pub struct ValidationError {
    pub index: usize,
    pub reason: String,
}

impl ValidationError {
    pub fn new(index: usize, reason: impl Into<String>) -> Self {
        Self {
            index,
            reason: reason.into(),
        }
    }
}

/// Top-level error type for sigengine.
#[derive(Debug, thiserror::Error)]
pub enum SigengineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("report error: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&SigengineError> for std::process::ExitCode {
    fn from(err: &SigengineError) -> Self {
        let code: u8 = match err {
            SigengineError::Io(_) => 1,
            SigengineError::ConfigParse { .. }
            | SigengineError::ConfigMissing { .. }
            | SigengineError::ConfigInvalid { .. } => 2,
            SigengineError::Data { .. } => 3,
            SigengineError::Validation(_) => 4,
            SigengineError::Report { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
