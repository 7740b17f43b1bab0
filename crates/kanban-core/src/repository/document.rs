//! Column Documents
//!
//! Shapes exchanged with the document store. A column is stored as
//! `{ title, order, cards }` under a store-assigned id.

use serde::{Deserialize, Serialize};

use crate::domain::{Board, Card, Column};

/// Stored body of a column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDocument {
    pub title: String,
    pub order: usize,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl From<&Column> for ColumnDocument {
    fn from(column: &Column) -> Self {
        Self {
            title: column.title.clone(),
            order: column.order,
            cards: column.cards.clone(),
        }
    }
}

/// Partial update; absent fields are left as stored
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<Card>>,
}

impl ColumnPatch {
    pub fn cards(cards: Vec<Card>) -> Self {
        Self {
            cards: Some(cards),
            ..Default::default()
        }
    }

    pub fn order(order: usize) -> Self {
        Self {
            order: Some(order),
            ..Default::default()
        }
    }

    pub fn apply(&self, doc: &mut ColumnDocument) {
        if let Some(title) = &self.title {
            doc.title = title.clone();
        }
        if let Some(order) = self.order {
            doc.order = order;
        }
        if let Some(cards) = &self.cards {
            doc.cards = cards.clone();
        }
    }
}

/// A document together with its id, as delivered by snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredColumn {
    pub id: String,
    pub data: ColumnDocument,
}

impl StoredColumn {
    pub fn into_column(self) -> Column {
        Column {
            id: self.id,
            title: self.data.title,
            order: self.data.order,
            cards: self.data.cards,
        }
    }
}

/// Build a board from a remote snapshot
pub fn board_from_snapshot(docs: Vec<StoredColumn>) -> Board {
    Board::from_columns(docs.into_iter().map(StoredColumn::into_column).collect())
}

/// Card patches for the given columns, taken from `board`
pub fn card_patches(board: &Board, column_ids: &[String]) -> Vec<(String, ColumnPatch)> {
    column_ids
        .iter()
        .filter_map(|id| board.column(id))
        .map(|c| (c.id.clone(), ColumnPatch::cards(c.cards.clone())))
        .collect()
}

/// Order patches for every column of `board`
pub fn order_patches(board: &Board) -> Vec<(String, ColumnPatch)> {
    board
        .columns()
        .iter()
        .map(|c| (c.id.clone(), ColumnPatch::order(c.order)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_serializes_only_present_fields() {
        let json = serde_json::to_string(&ColumnPatch::order(2)).unwrap();
        assert_eq!(json, r#"{"order":2}"#);
    }

    #[test]
    fn test_patch_apply() {
        let mut doc = ColumnDocument {
            title: "To Do".to_string(),
            order: 0,
            cards: vec![],
        };
        ColumnPatch::order(3).apply(&mut doc);
        assert_eq!(doc.order, 3);
        assert_eq!(doc.title, "To Do");
    }

    #[test]
    fn test_board_from_snapshot_normalizes_order() {
        let doc = |title: &str, order| ColumnDocument {
            title: title.to_string(),
            order,
            cards: vec![],
        };
        let board = board_from_snapshot(vec![
            StoredColumn { id: "x".into(), data: doc("Done", 4) },
            StoredColumn { id: "y".into(), data: doc("To Do", 0) },
        ]);
        assert_eq!(board.columns()[0].id, "y");
        assert_eq!(board.columns()[1].order, 1);
    }
}
