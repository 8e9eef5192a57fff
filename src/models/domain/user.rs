use serde::{Deserialize, Serialize};

/// A registered admin user.
///
/// Passwords are held verbatim; credential storage hardening is out of scope
/// for this core. Users are never deleted, and registration counts as the
/// first successful login.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub successful_login_count: u32,
    pub failed_passwords_since_last_login: u32,
}

impl User {
    pub fn new(id: u64, email: &str, password: &str, first_name: &str, last_name: &str) -> Self {
        User {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            successful_login_count: 1,
            failed_passwords_since_last_login: 0,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
