//! Card Entity
//!
//! A single task on the board. Its column is implied by containment.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::entity::Entity;

/// A task card inside a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Unique identifier within the column
    pub id: String,
    /// Card text
    pub content: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Optional due date
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Card {
    /// Create a card with a fresh id and the current timestamp
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), content, Utc::now())
    }

    pub fn with_id(id: impl Into<String>, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            created_at,
            due_date: None,
        }
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

impl Entity for Card {
    fn id(&self) -> &str {
        &self.id
    }
}
