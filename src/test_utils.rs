#[cfg(test)]
pub mod fixtures {
    use crate::app_state::AppState;
    use crate::models::domain::User;

    /// Creates a fresh, isolated application.
    pub fn app() -> AppState {
        AppState::new()
    }

    /// Registers a standard test user and returns their id.
    pub fn register_test_user(app: &AppState) -> u64 {
        register_user_with_email(app, "test@example.com")
    }

    /// Registers a test user with the given email and returns their id.
    pub fn register_user_with_email(app: &AppState, email: &str) -> u64 {
        app.auth_service
            .register(email, "Password1", "Test", "User")
            .expect("test user registration should succeed")
    }

    /// Builds a bare user entity without going through registration.
    pub fn test_user(id: u64, email: &str) -> User {
        User::new(id, email, "Password1", "Test", "User")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_register_test_user() {
        let app = app();
        let id = register_test_user(&app);
        let details = app.auth_service.user_details(id).unwrap();
        assert_eq!(details.email, "test@example.com");
        assert_eq!(details.name, "Test User");
    }

    #[test]
    fn test_fixtures_test_user() {
        let user = test_user(3, "custom@example.com");
        assert_eq!(user.id, 3);
        assert_eq!(user.email, "custom@example.com");
    }
}
