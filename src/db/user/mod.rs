pub mod get;
pub mod patch;
pub mod post;

pub use get::{count_users, get_user_by_email};
pub use patch::update_user_role;
pub use post::create_user;
