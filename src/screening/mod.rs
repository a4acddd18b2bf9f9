mod client;
mod error;
mod stub;
mod types;

pub use client::{ScreeningBackend, ScreeningClient};
pub use error::ScreeningError;
pub use stub::StubScreeningService;
pub use types::{
    CandidateResult, ContactInfo, RequirementMatch, ScreeningReport, UploadResponse,
};
