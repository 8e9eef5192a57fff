use std::rc::Rc;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::User, dto::UserDetails},
    store::SnapshotStore,
    validation,
};

pub struct AuthService {
    store: Rc<dyn SnapshotStore>,
}

impl AuthService {
    pub fn new(store: Rc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    /// Registers a new admin user and returns their id.
    ///
    /// The duplicate-email check runs before any format validation, so a
    /// taken address reports the conflict even when it is also malformed.
    pub fn register(
        &self,
        email: &str,
        password: &str,
        first_name: &str,
        last_name: &str,
    ) -> AppResult<u64> {
        let mut state = self.store.snapshot();

        if state.users.iter().any(|u| u.email == email) {
            return Err(AppError::AlreadyExists(
                "Email address is used by another user".to_string(),
            ));
        }
        validation::validate_email_format(email)?;
        validation::validate_first_name(first_name)?;
        validation::validate_last_name(last_name)?;
        validation::validate_password(password)?;

        let id = state.allocate_user_id();
        state
            .users
            .push(User::new(id, email, password, first_name, last_name));
        self.store.replace(state);

        log::info!("Registered user {} ({})", id, email);
        Ok(id)
    }

    /// Checks an email/password pair and returns the matching user's id.
    ///
    /// A wrong password is recorded on the user matched by email alone, and
    /// that increment is persisted even though the call fails.
    pub fn login(&self, email: &str, password: &str) -> AppResult<u64> {
        let mut state = self.store.snapshot();

        let Some(user) = state.users.iter_mut().find(|u| u.email == email) else {
            return Err(AppError::NotFound("Email does not exist".to_string()));
        };

        if user.password != password {
            user.failed_passwords_since_last_login += 1;
            log::warn!(
                "Failed login for user {} (attempt {})",
                user.id,
                user.failed_passwords_since_last_login
            );
            self.store.replace(state);
            return Err(AppError::InvalidCredentials(
                "Password does not match email".to_string(),
            ));
        }

        user.successful_login_count += 1;
        user.failed_passwords_since_last_login = 0;
        let id = user.id;
        self.store.replace(state);

        log::info!("User {} logged in", id);
        Ok(id)
    }

    /// Returns the profile and login counters for a user. Read-only.
    pub fn user_details(&self, user_id: u64) -> AppResult<UserDetails> {
        let state = self.store.snapshot();
        let user = state
            .find_user(user_id)
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found", user_id)))?;

        Ok(UserDetails::from(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, MockSnapshotStore, Snapshot};

    fn service() -> AuthService {
        AuthService::new(Rc::new(MemoryStore::new()))
    }

    fn register_jo(service: &AuthService) -> u64 {
        service
            .register("a@b.com", "Pass1234", "Jo", "Lee")
            .expect("registration should succeed")
    }

    #[test]
    fn test_register_assigns_sequential_ids() {
        let service = service();
        assert_eq!(register_jo(&service), 1);
        assert_eq!(
            service
                .register("b@c.com", "Pass1234", "Sam", "Hart")
                .unwrap(),
            2
        );
    }

    #[test]
    fn test_register_rejects_duplicate_email() {
        let service = service();
        register_jo(&service);

        let err = service
            .register("a@b.com", "Other123", "Max", "Webb")
            .unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn test_duplicate_check_precedes_format_validation() {
        // a second registration of the same malformed email must report the
        // conflict, not the format problem
        let store = Rc::new(MemoryStore::new());
        let service = AuthService::new(Rc::clone(&store) as Rc<dyn SnapshotStore>);

        let mut state = store.snapshot();
        let id = state.allocate_user_id();
        state
            .users
            .push(User::new(id, "not-an-email", "Pass1234", "Jo", "Lee"));
        store.replace(state);

        let err = service
            .register("not-an-email", "Pass1234", "Jo", "Lee")
            .unwrap_err();
        assert_eq!(err.error_code(), "ALREADY_EXISTS");
    }

    #[test]
    fn test_register_validation_errors() {
        let service = service();
        assert_eq!(
            service
                .register("bad-email", "Pass1234", "Jo", "Lee")
                .unwrap_err()
                .error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            service
                .register("a@b.com", "Pass1234", "J", "Lee")
                .unwrap_err()
                .error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            service
                .register("a@b.com", "Pass1234", "Jo", "L33t")
                .unwrap_err()
                .error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            service
                .register("a@b.com", "short1", "Jo", "Lee")
                .unwrap_err()
                .error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_failed_registration_does_not_write_back() {
        let mut store = MockSnapshotStore::new();
        store.expect_snapshot().return_const(Snapshot::default());
        store.expect_replace().never();

        let service = AuthService::new(Rc::new(store));
        assert!(service
            .register("bad-email", "Pass1234", "Jo", "Lee")
            .is_err());
    }

    #[test]
    fn test_login_success_updates_counters() {
        let service = service();
        let id = register_jo(&service);

        assert_eq!(service.login("a@b.com", "Pass1234").unwrap(), id);

        let details = service.user_details(id).unwrap();
        assert_eq!(details.num_successful_logins, 2);
        assert_eq!(details.num_failed_passwords_since_last_login, 0);
    }

    #[test]
    fn test_login_unknown_email() {
        let service = service();
        let err = service.login("unknown@x.com", "whatever").unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_failed_login_increments_and_persists_counter() {
        let service = service();
        let id = register_jo(&service);

        for attempt in 1..=3u32 {
            let err = service.login("a@b.com", "WrongPass9").unwrap_err();
            assert_eq!(err.error_code(), "INVALID_CREDENTIALS");

            let details = service.user_details(id).unwrap();
            assert_eq!(details.num_failed_passwords_since_last_login, attempt);
            assert_eq!(details.num_successful_logins, 1);
        }

        // a successful login clears the counter again
        service.login("a@b.com", "Pass1234").unwrap();
        let details = service.user_details(id).unwrap();
        assert_eq!(details.num_failed_passwords_since_last_login, 0);
    }

    #[test]
    fn test_user_details_unknown_id() {
        let service = service();
        let err = service.user_details(99).unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_user_details_shape() {
        let service = service();
        let id = register_jo(&service);

        let details = service.user_details(id).unwrap();
        assert_eq!(details.user_id, id);
        assert_eq!(details.name, "Jo Lee");
        assert_eq!(details.email, "a@b.com");
        assert_eq!(details.num_successful_logins, 1);
    }
}
