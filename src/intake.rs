use crate::config::TriagemConfig;
use crate::error::WorkflowError;
use crate::workflow::{DocumentRef, WorkflowState};

/// Gatekeeper for the document list at the INTAKE step.
///
/// Bounds come from configuration; validation happens before any document
/// reaches the shared state so a rejected batch leaves it untouched.
pub struct IntakeValidator {
    max_documents: usize,
    max_document_bytes: u64,
}

impl IntakeValidator {
    pub fn new(max_documents: usize, max_document_bytes: u64) -> Self {
        Self {
            max_documents,
            max_document_bytes,
        }
    }

    pub fn from_config(config: &TriagemConfig) -> Self {
        Self::new(config.max_documents, config.max_document_mb * 1024 * 1024)
    }

    /// Filter and admit a batch of candidate documents.
    ///
    /// Unsupported formats are dropped silently as long as at least one
    /// document survives; a batch with nothing acceptable is an error.
    /// Size and count limits reject the whole batch. Duplicate names are
    /// allowed, and relative order within the batch is preserved.
    ///
    /// Returns the number of documents added.
    pub fn accept_candidates(
        &self,
        state: &mut WorkflowState,
        incoming: Vec<DocumentRef>,
    ) -> Result<usize, WorkflowError> {
        let kept: Vec<DocumentRef> = incoming.into_iter().filter(|d| d.is_supported()).collect();
        if kept.is_empty() {
            return Err(WorkflowError::UnsupportedFormat);
        }

        if let Some(oversized) = kept.iter().find(|d| d.size_bytes > self.max_document_bytes) {
            return Err(WorkflowError::DocumentTooLarge {
                name: oversized.name.clone(),
                max_bytes: self.max_document_bytes,
            });
        }

        let count = state.documents.len() + kept.len();
        if count > self.max_documents {
            return Err(WorkflowError::TooManyDocuments {
                count,
                max: self.max_documents,
            });
        }

        let added = kept.len();
        state.documents.extend(kept);
        Ok(added)
    }

    /// Remove the document at `index`, shifting the rest left.
    pub fn remove_at(
        &self,
        state: &mut WorkflowState,
        index: usize,
    ) -> Result<DocumentRef, WorkflowError> {
        if index >= state.documents.len() {
            return Err(WorkflowError::IndexOutOfRange {
                index,
                len: state.documents.len(),
            });
        }
        Ok(state.documents.remove(index))
    }
}
