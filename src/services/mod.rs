pub mod auth_service;
pub mod quiz_service;

pub use auth_service::AuthService;
pub use quiz_service::QuizService;
