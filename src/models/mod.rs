pub mod profile;
pub mod rating;
pub mod rating_period;
pub mod results;
pub mod user;

pub use user::User;
