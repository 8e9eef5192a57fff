pub mod quiz;
pub mod user;
pub use quiz::Quiz;
pub use user::User;
