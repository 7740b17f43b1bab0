//! Board Aggregate
//!
//! Ordered columns, each owning its ordered cards. Boards are values:
//! every operation builds a new one instead of mutating a shared instance.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::card::Card;
use super::column::Column;
use super::entity::position_of;

/// The whole board
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from columns in any sequence.
    ///
    /// Columns are sorted by `order` (ties keep their incoming sequence) and
    /// then renumbered `0..n-1`, so the result always satisfies the rank
    /// invariant even when the source had gaps or duplicates.
    pub fn from_columns(mut columns: Vec<Column>) -> Self {
        columns.sort_by_key(|c| c.order);
        let mut board = Self { columns };
        board.renumber();
        board
    }

    /// Starter board used when no document store is connected
    pub fn sample() -> Self {
        let now = Utc::now();
        Self::from_columns(vec![
            Column::with_id("1", "To Do", 0).with_cards(vec![
                Card::with_id("101", "Prepare the weekly report", now),
                Card::with_id("102", "Review open pull requests", now),
            ]),
            Column::with_id("2", "In Progress", 1)
                .with_cards(vec![Card::with_id("201", "Draft release notes", now)]),
            Column::with_id("3", "Done", 2),
        ])
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn column_index(&self, column_id: &str) -> Option<usize> {
        position_of(&self.columns, column_id)
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(|c| c.cards.len()).sum()
    }

    /// True when `order` equals display position for every column
    pub fn is_ranked(&self) -> bool {
        self.columns.iter().enumerate().all(|(i, c)| c.order == i)
    }

    pub(crate) fn columns_mut(&mut self) -> &mut Vec<Column> {
        &mut self.columns
    }

    /// Reset `order` to match display position (0, 1, 2, ...)
    pub(crate) fn renumber(&mut self) {
        for (i, column) in self.columns.iter_mut().enumerate() {
            column.order = i;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_columns_sorts_and_renumbers() {
        let board = Board::from_columns(vec![
            Column::with_id("c", "Done", 7),
            Column::with_id("a", "To Do", 0),
            Column::with_id("b", "Doing", 3),
        ]);

        let ids: Vec<&str> = board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert!(board.is_ranked());
    }

    #[test]
    fn test_sample_board() {
        let board = Board::sample();
        assert_eq!(board.len(), 3);
        assert_eq!(board.card_count(), 3);
        assert!(board.is_ranked());
        assert_eq!(board.column("3").unwrap().title, "Done");
    }
}
