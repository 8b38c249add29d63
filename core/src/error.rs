use thiserror::Error;

/// Errors from building, validating and reporting workouts.
#[derive(Debug, Error)]
pub enum WorkoutError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("workout {tag} expects {expected} fields, got {got}")]
    ArityMismatch {
        tag: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("{what} parse error at {path}: {message}")]
    Parse {
        what: &'static str,
        path: String,
        message: String,
    },

    #[error("report write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("report serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("metrics: {0}")]
    Metrics(#[from] prometheus::Error),
}

impl WorkoutError {
    /// Short reason label used for the rejected-packages counter.
    pub fn reason(&self) -> &'static str {
        match self {
            WorkoutError::UnknownWorkoutType(_) => "unknown_type",
            WorkoutError::ArityMismatch { .. } => "arity_mismatch",
            WorkoutError::InvalidInput { .. } => "invalid_input",
            WorkoutError::Parse { .. } => "parse",
            WorkoutError::Io(_) => "io",
            WorkoutError::Json(_) => "json",
            WorkoutError::Metrics(_) => "metrics",
        }
    }

    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        WorkoutError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WorkoutError>;
