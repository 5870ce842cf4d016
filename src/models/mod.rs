// Models module
// Request payloads and domain records for the portfolio API

pub mod contact;
pub mod project;

pub use contact::{ContactRequest, ContactSubmission};
pub use project::ProjectRecord;
