pub mod response;
pub use response::{QuizInfo, QuizListEntry, UserDetails};
