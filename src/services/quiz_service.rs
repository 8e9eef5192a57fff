use std::rc::Rc;

use crate::{
    errors::{AppError, AppResult},
    models::{
        domain::Quiz,
        dto::{QuizInfo, QuizListEntry},
    },
    store::{Snapshot, SnapshotStore},
    validation,
};

pub struct QuizService {
    store: Rc<dyn SnapshotStore>,
}

impl QuizService {
    pub fn new(store: Rc<dyn SnapshotStore>) -> Self {
        Self { store }
    }

    fn require_user(state: &Snapshot, user_id: u64) -> AppResult<()> {
        if state.find_user(user_id).is_some() {
            Ok(())
        } else {
            Err(AppError::NotFound(format!(
                "User with id '{}' not found",
                user_id
            )))
        }
    }

    /// Validates user, then quiz existence, then ownership, in that order.
    /// Returns the quiz's index into the global collection.
    fn require_owned_quiz(state: &Snapshot, user_id: u64, quiz_id: u64) -> AppResult<usize> {
        Self::require_user(state, user_id)?;

        let idx = state
            .quizzes
            .iter()
            .position(|q| q.id == quiz_id)
            .ok_or_else(|| AppError::NotFound(format!("Quiz with id '{}' not found", quiz_id)))?;

        if state.quizzes[idx].owner_id != user_id {
            return Err(AppError::Unauthorized(
                "You can only access your own quizzes".to_string(),
            ));
        }

        Ok(idx)
    }

    fn check_duplicate_name(
        state: &Snapshot,
        user_id: u64,
        name: &str,
        exclude_quiz_id: Option<u64>,
    ) -> AppResult<()> {
        let taken = state.quizzes.iter().any(|q| {
            q.owner_id == user_id && q.name == name && Some(q.id) != exclude_quiz_id
        });
        if taken {
            Err(AppError::AlreadyExists(format!(
                "Quiz name '{}' is already used by another quiz owned by this user",
                name
            )))
        } else {
            Ok(())
        }
    }

    /// Creates a quiz for the given user and returns its id.
    pub fn create(&self, user_id: u64, name: &str, description: &str) -> AppResult<u64> {
        let mut state = self.store.snapshot();

        Self::require_user(&state, user_id)?;
        validation::validate_quiz_name(name)?;
        Self::check_duplicate_name(&state, user_id, name, None)?;
        validation::validate_quiz_description(description)?;

        let id = state.allocate_quiz_id();
        state.quizzes.push(Quiz::new(id, user_id, name, description));
        self.store.replace(state);

        log::info!("User {} created quiz {} ({:?})", user_id, id, name);
        Ok(id)
    }

    /// Lists the user's quizzes in creation order.
    ///
    /// The list is derived by filtering the global collection by owner, so it
    /// can never drift from the quizzes that actually exist.
    pub fn list(&self, user_id: u64) -> AppResult<Vec<QuizListEntry>> {
        let state = self.store.snapshot();
        Self::require_user(&state, user_id)?;

        Ok(state
            .quizzes
            .iter()
            .filter(|q| q.owner_id == user_id)
            .map(QuizListEntry::from)
            .collect())
    }

    /// Returns the full details of one quiz owned by the user. Read-only.
    pub fn info(&self, user_id: u64, quiz_id: u64) -> AppResult<QuizInfo> {
        let state = self.store.snapshot();
        let idx = Self::require_owned_quiz(&state, user_id, quiz_id)?;
        Ok(QuizInfo::from(&state.quizzes[idx]))
    }

    /// Permanently removes a quiz. Hard delete; the id is never reused.
    pub fn remove(&self, user_id: u64, quiz_id: u64) -> AppResult<()> {
        let mut state = self.store.snapshot();
        Self::require_owned_quiz(&state, user_id, quiz_id)?;

        state.quizzes.retain(|q| q.id != quiz_id);
        self.store.replace(state);

        log::info!("User {} removed quiz {}", user_id, quiz_id);
        Ok(())
    }

    /// Renames a quiz. The new name follows the same rules as creation, with
    /// the duplicate check run against the owner's other quizzes only.
    pub fn update_name(&self, user_id: u64, quiz_id: u64, name: &str) -> AppResult<()> {
        let mut state = self.store.snapshot();
        let idx = Self::require_owned_quiz(&state, user_id, quiz_id)?;

        validation::validate_quiz_name(name)?;
        Self::check_duplicate_name(&state, user_id, name, Some(quiz_id))?;

        let quiz = &mut state.quizzes[idx];
        quiz.name = name.to_string();
        quiz.touch();
        self.store.replace(state);

        Ok(())
    }

    /// Replaces a quiz's description.
    pub fn update_description(
        &self,
        user_id: u64,
        quiz_id: u64,
        description: &str,
    ) -> AppResult<()> {
        let mut state = self.store.snapshot();
        let idx = Self::require_owned_quiz(&state, user_id, quiz_id)?;

        validation::validate_quiz_description(description)?;

        let quiz = &mut state.quizzes[idx];
        quiz.description = description.to_string();
        quiz.touch();
        self.store.replace(state);

        Ok(())
    }
}
