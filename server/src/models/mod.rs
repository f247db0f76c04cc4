pub mod pasti;
pub mod tabarruat;

pub use pasti::{list_options, PASTI_OPTIONS};
pub use tabarruat::{Confirmation, NewSubmission, Submission};
