pub mod delete;
pub mod get;
pub mod patch;
pub mod post;

pub use delete::delete_rating_period;
pub use get::get_active_period;
pub use patch::update_rating_period;
pub use post::create_rating_period;
