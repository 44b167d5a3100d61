pub mod aggregate;
pub mod classify;
pub mod questionnaire;
pub mod window;

pub use aggregate::{ProfileWithRatings, build_report};
pub use classify::{LeadershipType, classify};
pub use window::check_submission_window;
