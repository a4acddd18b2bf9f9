use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{SubmissionStage, WorkflowError};
use crate::screening::ScreeningBackend;
use crate::workflow::{Step, WorkflowState};

const UPLOAD_FALLBACK: &str = "Failed to upload documents. Please try again.";
const SCORE_FALLBACK: &str = "Failed to score documents. Please try again.";

/// Where a submission currently stands.
///
/// `Uploading` and `Scoring` are the in-flight phases; starting another
/// submission while in either of them is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPhase {
    Idle,
    Uploading,
    Scoring,
    Succeeded,
    FailedUpload,
    FailedScore,
}

impl SubmissionPhase {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionPhase::Uploading | SubmissionPhase::Scoring)
    }
}

impl fmt::Display for SubmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmissionPhase::Idle => "idle",
            SubmissionPhase::Uploading => "uploading",
            SubmissionPhase::Scoring => "scoring",
            SubmissionPhase::Succeeded => "succeeded",
            SubmissionPhase::FailedUpload => "failed during upload",
            SubmissionPhase::FailedScore => "failed during scoring",
        };
        write!(f, "{name}")
    }
}

/// Observer for phase transitions during a submission.
///
/// The terminal progress display implements this; tests and headless
/// callers pass `()` to ignore transitions.
pub trait PhaseSink {
    fn phase_changed(&self, phase: SubmissionPhase);
}

impl PhaseSink for () {
    fn phase_changed(&self, _phase: SubmissionPhase) {}
}

/// Audit record emitted after a successful submission.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionRecord {
    pub submission_id: Uuid,
    pub document_count: usize,
    pub session_id: String,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: i64,
}

/// Drives the two-stage submission: upload the batch, then score it.
///
/// All state mutation rules live here so the rest of the program only
/// ever observes a consistent [`WorkflowState`].
pub struct SubmissionOrchestrator {
    phase: SubmissionPhase,
}

impl Default for SubmissionOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionOrchestrator {
    pub fn new() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    fn set_phase(&mut self, phase: SubmissionPhase, sink: &impl PhaseSink) {
        self.phase = phase;
        sink.phase_changed(phase);
    }

    /// Run a full submission against the backend.
    ///
    /// On success the report lands in the state and the workflow moves to
    /// RESULTS. On failure the state carries a user-facing error message,
    /// the step stays at INTAKE, and the returned error names the stage
    /// that failed. Either way `busy` is false once this returns.
    pub async fn submit(
        &mut self,
        state: &mut WorkflowState,
        backend: &impl ScreeningBackend,
        sink: &impl PhaseSink,
    ) -> Result<SubmissionRecord, WorkflowError> {
        if self.phase.is_in_flight() {
            return Err(WorkflowError::SubmissionInFlight);
        }
        if state.documents.is_empty() {
            return Err(WorkflowError::Validation(
                "at least one document is required".into(),
            ));
        }

        let started_at = Utc::now();
        self.set_phase(SubmissionPhase::Uploading, sink);

        let upload = match backend.upload(&state.documents).await {
            Ok(response) => response,
            Err(err) => {
                let message = err
                    .detail()
                    .map(str::to_owned)
                    .unwrap_or_else(|| UPLOAD_FALLBACK.into());
                state.error = Some(message.clone());
                self.set_phase(SubmissionPhase::FailedUpload, sink);
                return Err(WorkflowError::stage(SubmissionStage::Upload, message));
            }
        };

        // A fresh session supersedes any session from an earlier attempt.
        state.session_id = Some(upload.session_id.clone());
        state.busy = true;
        state.error = None;
        self.set_phase(SubmissionPhase::Scoring, sink);

        match backend.score(&upload.session_id, &state.criteria_text).await {
            Ok(report) => {
                state.report = Some(report);
                state.busy = false;
                state.step = Step::Results;
                self.set_phase(SubmissionPhase::Succeeded, sink);
                let completed_at = Utc::now();
                Ok(SubmissionRecord {
                    submission_id: Uuid::new_v4(),
                    document_count: state.documents.len(),
                    session_id: upload.session_id,
                    started_at,
                    completed_at,
                    duration_ms: (completed_at - started_at).num_milliseconds(),
                })
            }
            Err(err) => {
                let message = err
                    .detail()
                    .map(str::to_owned)
                    .unwrap_or_else(|| SCORE_FALLBACK.into());
                state.error = Some(message.clone());
                state.busy = false;
                self.set_phase(SubmissionPhase::FailedScore, sink);
                Err(WorkflowError::stage(SubmissionStage::Score, message))
            }
        }
    }
}
