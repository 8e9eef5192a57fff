use serde::Serialize;

use crate::models::domain::{Quiz, User};

/// Profile view returned by `AuthService::user_details`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserDetails {
    pub user_id: u64,
    pub name: String,
    pub email: String,
    pub num_successful_logins: u32,
    pub num_failed_passwords_since_last_login: u32,
}

impl From<&User> for UserDetails {
    fn from(user: &User) -> Self {
        UserDetails {
            user_id: user.id,
            name: user.full_name(),
            email: user.email.clone(),
            num_successful_logins: user.successful_login_count,
            num_failed_passwords_since_last_login: user.failed_passwords_since_last_login,
        }
    }
}

/// Full quiz view returned by `QuizService::info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizInfo {
    pub quiz_id: u64,
    pub name: String,
    pub time_created: i64,
    pub time_last_edited: i64,
    pub description: String,
}

impl From<&Quiz> for QuizInfo {
    fn from(quiz: &Quiz) -> Self {
        QuizInfo {
            quiz_id: quiz.id,
            name: quiz.name.clone(),
            time_created: quiz.created_at,
            time_last_edited: quiz.last_edited_at,
            description: quiz.description.clone(),
        }
    }
}

/// Lightweight entry returned by `QuizService::list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizListEntry {
    pub quiz_id: u64,
    pub name: String,
}

impl From<&Quiz> for QuizListEntry {
    fn from(quiz: &Quiz) -> Self {
        QuizListEntry {
            quiz_id: quiz.id,
            name: quiz.name.clone(),
        }
    }
}
