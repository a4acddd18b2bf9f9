mod state;
mod step;

pub use state::{DocumentRef, DocumentSource, WorkflowState, MIME_DOCX, MIME_PDF};
pub use step::Step;
