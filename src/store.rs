use std::cell::RefCell;

use serde::{Deserialize, Serialize};

use crate::models::domain::{Quiz, User};

/// The full application state as a single unit: every user, every quiz, and
/// the id counters for both.
///
/// Ids are handed out by explicit monotonic counters owned here, never
/// recomputed from the current maximum, so removing a quiz can never cause an
/// id to be reused.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Snapshot {
    pub users: Vec<User>,
    pub quizzes: Vec<Quiz>,
    next_user_id: u64,
    next_quiz_id: u64,
}

impl Default for Snapshot {
    fn default() -> Self {
        Snapshot {
            users: Vec::new(),
            quizzes: Vec::new(),
            next_user_id: 1,
            next_quiz_id: 1,
        }
    }
}

impl Snapshot {
    pub fn allocate_user_id(&mut self) -> u64 {
        let id = self.next_user_id;
        self.next_user_id += 1;
        id
    }

    pub fn allocate_quiz_id(&mut self) -> u64 {
        let id = self.next_quiz_id;
        self.next_quiz_id += 1;
        id
    }

    pub fn find_user(&self, user_id: u64) -> Option<&User> {
        self.users.iter().find(|u| u.id == user_id)
    }

    pub fn find_quiz(&self, quiz_id: u64) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == quiz_id)
    }
}

/// Storage seam for the services.
///
/// The access pattern is snapshot-in, snapshot-out: a caller takes a cloned
/// copy of the full state, mutates the copy, and swaps it back wholesale with
/// `replace`. An operation that fails validation simply drops its copy, so a
/// partial write is never observable.
#[cfg_attr(test, mockall::automock)]
pub trait SnapshotStore {
    fn snapshot(&self) -> Snapshot;
    fn replace(&self, snapshot: Snapshot);
    fn reset(&self);
}

/// Process-local store backing the whole application.
///
/// Single-threaded and non-reentrant: the `RefCell` is borrowed only for the
/// duration of a copy or a swap, never across calls. A concurrent embedding
/// would need to put a lock at this seam first.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RefCell<Snapshot>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn snapshot(&self) -> Snapshot {
        self.state.borrow().clone()
    }

    fn replace(&self, snapshot: Snapshot) {
        *self.state.borrow_mut() = snapshot;
    }

    fn reset(&self) {
        log::info!("Resetting store to empty state");
        *self.state.borrow_mut() = Snapshot::default();
    }
}
