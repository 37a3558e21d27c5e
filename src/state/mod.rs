//! Application state module

mod app_state;
mod forms;
pub(crate) mod submission;

pub use app_state::*;
pub use forms::*;
pub use submission::{Submission, SubmissionStatus};
