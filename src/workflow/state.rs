use std::io;
use std::path::{Path, PathBuf};

use crate::error::WorkflowError;
use crate::screening::ScreeningReport;

use super::step::Step;

/// Mime types the Screening Service can parse.
pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Opaque handle to a document's content.
///
/// Documents arriving through the CLI stay on disk until upload time;
/// in-memory content exists for the demo backend and tests.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    Path(PathBuf),
    Memory(Vec<u8>),
}

impl DocumentSource {
    /// Materialize the document bytes for upload.
    pub fn load(&self) -> io::Result<Vec<u8>> {
        match self {
            DocumentSource::Path(path) => std::fs::read(path),
            DocumentSource::Memory(bytes) => Ok(bytes.clone()),
        }
    }
}

/// A candidate document queued for screening.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRef {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
    pub source: DocumentSource,
}

impl DocumentRef {
    /// Build a reference to a document on disk. The mime type is resolved
    /// from the file extension; unknown extensions resolve to
    /// `application/octet-stream` and are filtered out at intake.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Ok(Self {
            name,
            size_bytes: metadata.len(),
            mime_type,
            source: DocumentSource::Path(path.to_path_buf()),
        })
    }

    /// Build a reference to in-memory document content.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            mime_type: mime_type.into(),
            source: DocumentSource::Memory(bytes),
        }
    }

    /// Whether the Screening Service accepts this document's mime type.
    pub fn is_supported(&self) -> bool {
        self.mime_type == MIME_PDF || self.mime_type == MIME_DOCX
    }
}

/// The single shared state of an active screening session.
///
/// Mutated only by the workflow controller methods below and by the
/// submission orchestrator; everything else reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub step: Step,
    pub criteria_text: String,
    pub session_id: Option<String>,
    pub documents: Vec<DocumentRef>,
    pub report: Option<ScreeningReport>,
    pub busy: bool,
    pub error: Option<String>,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowState {
    pub fn new() -> Self {
        Self {
            step: Step::Criteria,
            criteria_text: String::new(),
            session_id: None,
            documents: Vec::new(),
            report: None,
            busy: false,
            error: None,
        }
    }

    pub fn set_criteria(&mut self, text: impl Into<String>) {
        self.criteria_text = text.into();
    }

    /// Move one step forward.
    ///
    /// - At CRITERIA the criteria text must be non-blank, otherwise the
    ///   state is left untouched and a validation error is returned.
    /// - At INTAKE a direct advance is rejected: only a successful
    ///   submission moves the workflow to RESULTS.
    /// - At RESULTS advancing is a no-op.
    pub fn advance(&mut self) -> Result<Step, WorkflowError> {
        match self.step {
            Step::Criteria => {
                if self.criteria_text.trim().is_empty() {
                    return Err(WorkflowError::Validation(
                        "criteria text must not be empty".into(),
                    ));
                }
                self.step = Step::Intake;
                Ok(self.step)
            }
            Step::Intake => Err(WorkflowError::Validation(
                "a successful submission is required to reach RESULTS".into(),
            )),
            Step::Results => Ok(self.step),
        }
    }

    /// Move one step back. A no-op at CRITERIA. Leaving RESULTS drops the
    /// report so that a report is only ever held at the final step.
    pub fn retreat(&mut self) -> Step {
        match self.step {
            Step::Criteria => {}
            Step::Intake => self.step = Step::Criteria,
            Step::Results => {
                self.report = None;
                self.step = Step::Intake;
            }
        }
        self.step
    }

    /// Restore the freshly-constructed state. Idempotent.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn report() -> ScreeningReport {
        ScreeningReport {
            results: Vec::new(),
            report_url: None,
        }
    }

    #[test]
    fn advance_from_criteria_requires_text() {
        let mut state = WorkflowState::new();
        let before = state.clone();

        let err = state.advance().unwrap_err();
        assert_eq!(
            err,
            WorkflowError::Validation("criteria text must not be empty".into())
        );
        assert_eq!(state, before);
    }

    #[test]
    fn advance_from_criteria_rejects_whitespace_only() {
        let mut state = WorkflowState::new();
        state.set_criteria("   \n\t  ");

        assert!(state.advance().is_err());
        assert_eq!(state.step, Step::Criteria);
    }

    #[test]
    fn advance_from_criteria_moves_to_intake() {
        let mut state = WorkflowState::new();
        state.set_criteria("Need a backend engineer");

        assert_eq!(state.advance().unwrap(), Step::Intake);
        assert_eq!(state.step, Step::Intake);
    }

    #[test]
    fn advance_from_intake_is_rejected() {
        let mut state = WorkflowState::new();
        state.set_criteria("Need a backend engineer");
        state.advance().unwrap();

        assert!(state.advance().is_err());
        assert_eq!(state.step, Step::Intake);
    }

    #[test]
    fn advance_at_results_is_a_noop() {
        let mut state = WorkflowState::new();
        state.step = Step::Results;
        state.report = Some(report());

        assert_eq!(state.advance().unwrap(), Step::Results);
        assert_eq!(state.step, Step::Results);
        assert!(state.report.is_some());
    }

    #[test]
    fn retreat_walks_back_and_stops_at_criteria() {
        let mut state = WorkflowState::new();
        state.set_criteria("anything");
        state.advance().unwrap();

        assert_eq!(state.retreat(), Step::Criteria);
        assert_eq!(state.retreat(), Step::Criteria);
    }

    #[test]
    fn retreat_out_of_results_clears_report() {
        let mut state = WorkflowState::new();
        state.step = Step::Results;
        state.report = Some(report());

        assert_eq!(state.retreat(), Step::Intake);
        assert!(state.report.is_none());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut state = WorkflowState::new();
        state.set_criteria("Need a backend engineer");
        state.advance().unwrap();
        state.session_id = Some("sess-9".into());
        state
            .documents
            .push(DocumentRef::from_bytes("cv.pdf", MIME_PDF, vec![1, 2, 3]));
        state.error = Some("scan failed".into());
        state.busy = true;

        state.reset();
        assert_eq!(state, WorkflowState::new());

        // Idempotent.
        state.reset();
        assert_eq!(state, WorkflowState::new());
    }

    #[test]
    fn document_ref_from_bytes_records_size() {
        let doc = DocumentRef::from_bytes("cv.pdf", MIME_PDF, vec![0u8; 42]);
        assert_eq!(doc.size_bytes, 42);
        assert!(doc.is_supported());
    }

    #[test]
    fn document_ref_from_path_resolves_mime_and_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(b"%PDF-1.4 fake").unwrap();

        let doc = DocumentRef::from_path(&path).unwrap();
        assert_eq!(doc.name, "resume.pdf");
        assert_eq!(doc.mime_type, MIME_PDF);
        assert_eq!(doc.size_bytes, 13);
        assert!(doc.is_supported());
    }

    #[test]
    fn document_ref_from_path_docx_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.docx");
        std::fs::write(&path, b"PK fake docx").unwrap();

        let doc = DocumentRef::from_path(&path).unwrap();
        assert_eq!(doc.mime_type, MIME_DOCX);
        assert!(doc.is_supported());
    }

    #[test]
    fn document_ref_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"plain text").unwrap();

        let doc = DocumentRef::from_path(&path).unwrap();
        assert!(!doc.is_supported());
    }

    #[test]
    fn document_source_load_roundtrips_memory() {
        let source = DocumentSource::Memory(vec![7, 8, 9]);
        assert_eq!(source.load().unwrap(), vec![7, 8, 9]);
    }
}
