use std::rc::Rc;

use crate::{
    services::{AuthService, QuizService},
    store::{MemoryStore, SnapshotStore},
};

/// Wires one shared store into both services.
///
/// The store is injected rather than reached for as a global, so each test
/// (or embedding) gets its own isolated state. Everything here is
/// single-threaded by design; handles are `Rc`, not `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Rc<AuthService>,
    pub quiz_service: Rc<QuizService>,
    store: Rc<dyn SnapshotStore>,
}

impl AppState {
    pub fn new() -> Self {
        Self::with_store(Rc::new(MemoryStore::new()))
    }

    pub fn with_store(store: Rc<dyn SnapshotStore>) -> Self {
        AppState {
            auth_service: Rc::new(AuthService::new(Rc::clone(&store))),
            quiz_service: Rc::new(QuizService::new(Rc::clone(&store))),
            store,
        }
    }

    /// Resets the application back to its starting state: no users, no
    /// quizzes, id counters back to 1. Infallible.
    pub fn reset_all(&self) {
        self.store.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
