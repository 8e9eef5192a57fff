use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Quiz metadata. Quiz content (questions, answers) lives outside this core.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub owner_id: u64, // immutable after creation
    pub created_at: i64,
    pub last_edited_at: i64,
}

impl Quiz {
    pub fn new(id: u64, owner_id: u64, name: &str, description: &str) -> Self {
        let now = Utc::now().timestamp();
        Quiz {
            id,
            name: name.to_string(),
            description: description.to_string(),
            owner_id,
            created_at: now,
            last_edited_at: now,
        }
    }

    /// Marks the quiz as edited now. Call after any name/description change.
    pub fn touch(&mut self) {
        self.last_edited_at = Utc::now().timestamp();
    }
}
