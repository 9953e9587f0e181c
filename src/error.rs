use thiserror::Error;

/// All possible errors when building, sorting or printing a dependency graph
#[derive(Error, Debug)]
pub enum TopoError {
    #[error("cycle detected: no topological order exists")]
    CycleDetected,

    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TopoError {
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        TopoError::Parse {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TopoError>;
