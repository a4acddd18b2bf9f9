use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;

use crate::workflow::DocumentRef;

use super::error::ScreeningError;
use super::types::{ScreeningReport, UploadResponse};

/// The two remote operations that define the system boundary.
///
/// Implemented by [`ScreeningClient`] over HTTP and by the offline stub
/// backend; the orchestrator only ever talks to this trait.
pub trait ScreeningBackend {
    async fn upload(&self, documents: &[DocumentRef]) -> Result<UploadResponse, ScreeningError>;
    async fn score(
        &self,
        session_id: &str,
        criteria_text: &str,
    ) -> Result<ScreeningReport, ScreeningError>;
}

/// Error body shape used by the service for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

pub struct ScreeningClient {
    client: Client,
    base_url: String,
}

impl ScreeningClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build()
            .expect("failed to build HTTP client");
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Upload the full ordered document batch as one multipart request.
    pub async fn upload(
        &self,
        documents: &[DocumentRef],
    ) -> Result<UploadResponse, ScreeningError> {
        let mut form = Form::new();
        for doc in documents {
            let bytes = doc.source.load()?;
            let part = Part::bytes(bytes)
                .file_name(doc.name.clone())
                .mime_str(&doc.mime_type)?;
            form = form.part("resumes", part);
        }

        let response = self
            .client
            .post(format!("{}/upload-resumes", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Ask the service to score a previously uploaded batch against the
    /// criteria text.
    pub async fn score(
        &self,
        session_id: &str,
        criteria_text: &str,
    ) -> Result<ScreeningReport, ScreeningError> {
        let form = Form::new()
            .text("session_id", session_id.to_string())
            .text("job_description", criteria_text.to_string());

        let response = self
            .client
            .post(format!("{}/screen-resumes", self.base_url))
            .multipart(form)
            .send()
            .await?;

        Self::parse(response).await
    }

    /// Download the generated report. Relative URLs, as returned by the
    /// service, are resolved against the client's base URL.
    pub async fn fetch_report(&self, url: &str) -> Result<Vec<u8>, ScreeningError> {
        let absolute = if url.starts_with('/') {
            format!("{}{url}", self.base_url)
        } else {
            url.to_string()
        };

        let response = self.client.get(absolute).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScreeningError::Api {
                status: status.as_u16(),
                detail: None,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }

    async fn parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ScreeningError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .map(|b| b.detail);
            return Err(ScreeningError::Api {
                status: status.as_u16(),
                detail,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

impl ScreeningBackend for ScreeningClient {
    async fn upload(&self, documents: &[DocumentRef]) -> Result<UploadResponse, ScreeningError> {
        ScreeningClient::upload(self, documents).await
    }

    async fn score(
        &self,
        session_id: &str,
        criteria_text: &str,
    ) -> Result<ScreeningReport, ScreeningError> {
        ScreeningClient::score(self, session_id, criteria_text).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::MIME_PDF;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_docs() -> Vec<DocumentRef> {
        vec![DocumentRef::from_bytes(
            "ana.pdf",
            MIME_PDF,
            b"%PDF-1.4 fake".to_vec(),
        )]
    }

    #[tokio::test]
    async fn upload_success_returns_session_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload-resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "1 resume(s) uploaded successfully",
                "session_id": "sess-1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let resp = client.upload(&sample_docs()).await.unwrap();
        assert_eq!(resp.session_id, "sess-1");
    }

    #[tokio::test]
    async fn upload_failure_surfaces_service_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload-resumes"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "detail": "scan failed" })),
            )
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let err = client.upload(&sample_docs()).await.unwrap_err();
        match err {
            ScreeningError::Api { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail.as_deref(), Some("scan failed"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn upload_failure_with_non_json_body_has_no_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/upload-resumes"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let err = client.upload(&sample_docs()).await.unwrap_err();
        match err {
            ScreeningError::Api { status, detail } => {
                assert_eq!(status, 500);
                assert_eq!(detail, None);
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn score_success_parses_report() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/screen-resumes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{
                    "filename": "ana.pdf",
                    "summary": "Strong profile.",
                    "match_score": 0.82,
                    "requirements_analysis": [
                        {"requirement": "Rust", "matched": true, "explanation": "Listed."}
                    ]
                }],
                "report_url": "/download-report/r1.pdf"
            })))
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let report = client.score("sess-1", "Need a backend engineer").await.unwrap();
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].match_score, 0.82);
        assert_eq!(report.report_url.as_deref(), Some("/download-report/r1.pdf"));
    }

    #[tokio::test]
    async fn score_unknown_session_surfaces_detail() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/screen-resumes"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({ "detail": "Session not found" })),
            )
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let err = client.score("missing", "criteria").await.unwrap_err();
        assert_eq!(err.detail(), Some("Session not found"));
    }

    #[tokio::test]
    async fn fetch_report_resolves_relative_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/download-report/r1.pdf"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"%PDF report".to_vec()))
            .mount(&server)
            .await;

        let client = ScreeningClient::new(server.uri());
        let bytes = client.fetch_report("/download-report/r1.pdf").await.unwrap();
        assert_eq!(bytes, b"%PDF report".to_vec());
    }
}
