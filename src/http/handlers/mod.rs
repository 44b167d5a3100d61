pub mod admin;
pub mod auth;
pub mod profile;
pub mod questionnaire;
pub mod rating;
pub mod rating_period;
pub mod results;

pub use admin::{
    delete_user_ratings_handler, get_user_ratings_handler, stats_handler, update_role_handler,
};
pub use auth::{admin_access_handler, feedback_access_handler, sign_in_handler, sign_up_handler};
pub use profile::{create_profile_handler, get_profile_handler, get_profiles_handler};
pub use questionnaire::get_questionnaire_handler;
pub use rating::{get_ratings_handler, submit_rating_handler};
pub use rating_period::{
    create_period_handler, delete_period_handler, get_period_handler, update_period_handler,
};
pub use results::get_results_handler;
