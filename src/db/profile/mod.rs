pub mod get;
pub mod post;

pub use get::{get_all_profiles, get_profile, get_profiles_with_ratings};
pub use post::create_profile;
