pub mod delete;
pub mod get;
pub mod post;

pub use delete::delete_ratings_by_user;
pub use get::{count_raters, count_ratings, get_ratings_by_user, get_ratings_for_profile};
pub use post::create_rating;
