//! Column Entity
//!
//! A titled, ranked bucket of cards.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::card::Card;
use super::entity::{position_of, Entity};

/// A column on the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    /// Unique identifier (document id when mirrored remotely)
    pub id: String,
    /// Column title
    pub title: String,
    /// Display rank, contiguous across the board
    pub order: usize,
    /// Cards in display order
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Column {
    /// Create an empty column with a fresh id
    pub fn new(title: impl Into<String>, order: usize) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, order)
    }

    pub fn with_id(id: impl Into<String>, title: impl Into<String>, order: usize) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            order,
            cards: Vec::new(),
        }
    }

    pub fn with_cards(mut self, cards: Vec<Card>) -> Self {
        self.cards = cards;
        self
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn card_index(&self, card_id: &str) -> Option<usize> {
        position_of(&self.cards, card_id)
    }
}

impl Entity for Column {
    fn id(&self) -> &str {
        &self.id
    }
}
