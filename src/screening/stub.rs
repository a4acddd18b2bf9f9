use super::client::ScreeningBackend;
use super::error::ScreeningError;
use super::types::{
    CandidateResult, ContactInfo, RequirementMatch, ScreeningReport, UploadResponse,
};
use crate::workflow::DocumentRef;

/// Offline backend for the demo command.
///
/// Answers every call with deterministic data so the full workflow can be
/// exercised without a running Screening Service.
pub struct StubScreeningService;

impl StubScreeningService {
    pub fn sample_report() -> ScreeningReport {
        ScreeningReport {
            results: vec![
                CandidateResult {
                    filename: "ana-souza.pdf".into(),
                    summary: "Senior backend engineer with eight years across Rust and \
                              distributed systems. Strong alignment with the role."
                        .into(),
                    match_score: 0.86,
                    contact_info: Some(ContactInfo {
                        email: Some("ana.souza@example.com".into()),
                        phone: Some("+55 11 98765-4321".into()),
                    }),
                    requirements_analysis: vec![
                        RequirementMatch {
                            requirement: "Rust experience".into(),
                            matched: true,
                            explanation: "Eight years of production Rust.".into(),
                        },
                        RequirementMatch {
                            requirement: "Distributed systems".into(),
                            matched: true,
                            explanation: "Led a multi-region storage migration.".into(),
                        },
                        RequirementMatch {
                            requirement: "Kubernetes".into(),
                            matched: false,
                            explanation: "Deployment experience limited to bare VMs.".into(),
                        },
                    ],
                },
                CandidateResult {
                    filename: "bruno-lima.docx".into(),
                    summary: "Mid-level developer transitioning from data engineering. \
                              Partial overlap with the required stack."
                        .into(),
                    match_score: 0.55,
                    contact_info: Some(ContactInfo {
                        email: Some("bruno.lima@example.com".into()),
                        phone: None,
                    }),
                    requirements_analysis: vec![
                        RequirementMatch {
                            requirement: "Rust experience".into(),
                            matched: true,
                            explanation: "Two years maintaining internal tooling.".into(),
                        },
                        RequirementMatch {
                            requirement: "Distributed systems".into(),
                            matched: false,
                            explanation: "Worked only on single-node pipelines.".into(),
                        },
                    ],
                },
                CandidateResult {
                    filename: "carla-mendes.pdf".into(),
                    summary: "Frontend specialist with no backend track record. \
                              Weak fit for this opening."
                        .into(),
                    match_score: 0.31,
                    contact_info: None,
                    requirements_analysis: vec![RequirementMatch {
                        requirement: "Rust experience".into(),
                        matched: false,
                        explanation: "No systems language mentioned.".into(),
                    }],
                },
            ],
            report_url: None,
        }
    }
}

impl ScreeningBackend for StubScreeningService {
    async fn upload(&self, documents: &[DocumentRef]) -> Result<UploadResponse, ScreeningError> {
        Ok(UploadResponse {
            message: format!("{} resume(s) uploaded successfully", documents.len()),
            session_id: "demo-session".into(),
        })
    }

    async fn score(
        &self,
        _session_id: &str,
        _criteria_text: &str,
    ) -> Result<ScreeningReport, ScreeningError> {
        Ok(Self::sample_report())
    }
}
