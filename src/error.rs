use thiserror::Error;

/// Identifies which remote stage of a submission failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SubmissionStage {
    /// The document batch upload.
    Upload,
    /// The scoring call against the uploaded batch.
    Score,
}

impl std::fmt::Display for SubmissionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStage::Upload => write!(f, "upload"),
            SubmissionStage::Score => write!(f, "scoring"),
        }
    }
}

/// Everything that can go wrong while driving the screening workflow.
///
/// Local precondition failures (`Validation`, the intake variants,
/// `SubmissionInFlight`) never reach the network; `Stage` carries the
/// human-readable message surfaced for a failed remote call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("only PDF and DOCX files are accepted")]
    UnsupportedFormat,

    #[error("document index {index} is out of range for {len} document(s)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{count} document(s) would exceed the limit of {max}")]
    TooManyDocuments { count: usize, max: usize },

    #[error("document '{name}' exceeds the size limit of {max_bytes} bytes")]
    DocumentTooLarge { name: String, max_bytes: u64 },

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("{stage} failed: {message}")]
    Stage {
        stage: SubmissionStage,
        message: String,
    },
}

impl WorkflowError {
    /// Shorthand for a failed remote stage.
    pub fn stage(stage: SubmissionStage, message: impl Into<String>) -> Self {
        WorkflowError::Stage {
            stage,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stage_display() {
        assert_eq!(SubmissionStage::Upload.to_string(), "upload");
        assert_eq!(SubmissionStage::Score.to_string(), "scoring");
    }

    #[test]
    fn stage_error_display() {
        let err = WorkflowError::stage(SubmissionStage::Upload, "scan failed");
        assert_eq!(err.to_string(), "upload failed: scan failed");

        let err = WorkflowError::stage(SubmissionStage::Score, "session not found");
        assert_eq!(err.to_string(), "scoring failed: session not found");
    }

    #[test]
    fn index_error_display() {
        let err = WorkflowError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(
            err.to_string(),
            "document index 3 is out of range for 2 document(s)"
        );
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WorkflowError>();
    }
}
