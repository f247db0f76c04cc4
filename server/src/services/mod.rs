pub mod candidate;
pub mod tabarruat;
pub mod validation;

pub use candidate::SubmissionCandidate;
pub use tabarruat::{SubmissionService, SubmitError};
pub use validation::{validate, FieldErrors, Rejection};
