//! Drag Reorder Resolver
//!
//! Turns a finished drag gesture (active token, optional drop target) into a
//! new board. Anything unrecognised resolves to `None` and leaves the board
//! as it was.

use serde::{Deserialize, Serialize};

use crate::domain::Board;

use super::column_ops::move_column;
use super::positioning::array_move;

/// What is being dragged, or what it is dropped on
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DragToken {
    Card { column_id: String, card_id: String },
    Column { column_id: String },
}

impl DragToken {
    pub fn card(column_id: impl Into<String>, card_id: impl Into<String>) -> Self {
        DragToken::Card {
            column_id: column_id.into(),
            card_id: card_id.into(),
        }
    }

    pub fn column(column_id: impl Into<String>) -> Self {
        DragToken::Column {
            column_id: column_id.into(),
        }
    }

    /// Column the token belongs to (the column itself for column tokens)
    pub fn column_id(&self) -> &str {
        match self {
            DragToken::Card { column_id, .. } => column_id,
            DragToken::Column { column_id } => column_id,
        }
    }
}

/// Which parts of the board a resolved drop changed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Touched {
    /// Card sequences of these columns changed
    Cards(Vec<String>),
    /// Column ranking changed
    Order,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DragOutcome {
    pub board: Board,
    pub touched: Touched,
}

/// Resolve a drop. Returns `None` for no-ops.
pub fn resolve(board: &Board, active: &DragToken, over: Option<&DragToken>) -> Option<DragOutcome> {
    let over = over?;
    if active == over {
        return None;
    }

    match (active, over) {
        (
            DragToken::Card { column_id: from_col, card_id },
            DragToken::Card { column_id: to_col, card_id: over_card },
        ) => {
            if from_col == to_col {
                reorder_within(board, from_col, card_id, over_card)
            } else {
                // Lands in front of the card it was released over.
                let target_index = board.column(to_col)?.card_index(over_card)?;
                transfer(board, from_col, card_id, to_col, Some(target_index))
            }
        }
        (DragToken::Card { column_id: from_col, card_id }, DragToken::Column { column_id: to_col }) => {
            if from_col == to_col {
                return None;
            }
            transfer(board, from_col, card_id, to_col, None)
        }
        // A column released over one of another column's cards lands on that column.
        (DragToken::Column { column_id: active_col }, DragToken::Column { column_id: over_col })
        | (DragToken::Column { column_id: active_col }, DragToken::Card { column_id: over_col, .. }) => {
            reorder_columns(board, active_col, over_col)
        }
    }
}

fn reorder_columns(board: &Board, active_col: &str, over_col: &str) -> Option<DragOutcome> {
    if active_col == over_col {
        return None;
    }
    let next = move_column(board, active_col, over_col).ok()?;
    Some(DragOutcome {
        board: next,
        touched: Touched::Order,
    })
}

fn reorder_within(board: &Board, column_id: &str, card_id: &str, over_card: &str) -> Option<DragOutcome> {
    let col_index = board.column_index(column_id)?;
    let column = &board.columns()[col_index];
    let from = column.card_index(card_id)?;
    let to = column.card_index(over_card)?;

    let mut next = board.clone();
    if !array_move(&mut next.columns_mut()[col_index].cards, from, to) {
        return None;
    }
    Some(DragOutcome {
        board: next,
        touched: Touched::Cards(vec![column_id.to_string()]),
    })
}

/// Move a card into another column, at `at` or at the tail when `None`.
fn transfer(
    board: &Board,
    from_col: &str,
    card_id: &str,
    to_col: &str,
    at: Option<usize>,
) -> Option<DragOutcome> {
    let source = board.column_index(from_col)?;
    let target = board.column_index(to_col)?;
    let card_index = board.columns()[source].card_index(card_id)?;

    let mut next = board.clone();
    let columns = next.columns_mut();
    let card = columns[source].cards.remove(card_index);
    let cards = &mut columns[target].cards;
    match at {
        Some(i) if i <= cards.len() => cards.insert(i, card),
        _ => cards.push(card),
    }

    Some(DragOutcome {
        board: next,
        touched: Touched::Cards(vec![from_col.to_string(), to_col.to_string()]),
    })
}

/// Tracks the token picked up by the current drag gesture
#[derive(Debug, Clone, Default)]
pub struct DragTracker {
    active: Option<DragToken>,
}

impl DragTracker {
    pub fn start(&mut self, token: DragToken) {
        self.active = Some(token);
    }

    pub fn active(&self) -> Option<&DragToken> {
        self.active.as_ref()
    }

    /// Consume the active token; `None` if no drag was started
    pub fn finish(&mut self) -> Option<DragToken> {
        self.active.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Card, Column};
    use chrono::Utc;

    fn board() -> Board {
        let now = Utc::now();
        let cards = |ids: &[&str]| ids.iter().map(|id| Card::with_id(*id, *id, now)).collect::<Vec<_>>();
        Board::from_columns(vec![
            Column::with_id("todo", "To Do", 0).with_cards(cards(&["a", "b", "c", "d"])),
            Column::with_id("doing", "Doing", 1).with_cards(cards(&["e"])),
            Column::with_id("done", "Done", 2),
        ])
    }

    fn card_ids(board: &Board, column_id: &str) -> Vec<String> {
        board.column(column_id).unwrap().cards.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_same_token_is_noop() {
        let t = DragToken::card("todo", "a");
        assert!(resolve(&board(), &t, Some(&t)).is_none());
    }

    #[test]
    fn test_no_target_is_noop() {
        assert!(resolve(&board(), &DragToken::card("todo", "a"), None).is_none());
    }

    #[test]
    fn test_reorder_within_column_matches_array_move() {
        let before = board();
        for (i, j) in [(0usize, 3usize), (3, 0), (1, 2), (2, 1)] {
            let ids = card_ids(&before, "todo");
            let out = resolve(
                &before,
                &DragToken::card("todo", ids[i].clone()),
                Some(&DragToken::card("todo", ids[j].clone())),
            )
            .unwrap();

            let mut expected = ids.clone();
            array_move(&mut expected, i, j);
            assert_eq!(card_ids(&out.board, "todo"), expected);
            assert_eq!(out.board.column("doing"), before.column("doing"));
            assert_eq!(out.board.column("done"), before.column("done"));
            assert_eq!(out.touched, Touched::Cards(vec!["todo".to_string()]));
        }
    }

    #[test]
    fn test_card_onto_other_column_appends() {
        let before = board();
        let out = resolve(&before, &DragToken::card("todo", "b"), Some(&DragToken::column("doing"))).unwrap();

        assert_eq!(card_ids(&out.board, "todo"), vec!["a", "c", "d"]);
        assert_eq!(card_ids(&out.board, "doing"), vec!["e", "b"]);
        assert_eq!(out.board.card_count(), before.card_count());
        assert_eq!(
            out.touched,
            Touched::Cards(vec!["todo".to_string(), "doing".to_string()])
        );
    }

    #[test]
    fn test_card_onto_card_in_other_column_inserts_before_it() {
        let out = resolve(&board(), &DragToken::card("todo", "a"), Some(&DragToken::card("doing", "e"))).unwrap();
        assert_eq!(card_ids(&out.board, "doing"), vec!["a", "e"]);
        assert_eq!(card_ids(&out.board, "todo"), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_card_onto_own_column_is_noop() {
        assert!(resolve(&board(), &DragToken::card("todo", "a"), Some(&DragToken::column("todo"))).is_none());
    }

    #[test]
    fn test_column_reorder_renumbers() {
        let out = resolve(&board(), &DragToken::column("done"), Some(&DragToken::column("todo"))).unwrap();
        let ids: Vec<&str> = out.board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["done", "todo", "doing"]);
        assert!(out.board.is_ranked());
        assert_eq!(out.touched, Touched::Order);
    }

    #[test]
    fn test_column_onto_card_moves_to_its_column() {
        let out = resolve(&board(), &DragToken::column("done"), Some(&DragToken::card("todo", "b"))).unwrap();
        let ids: Vec<&str> = out.board.columns().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["done", "todo", "doing"]);
        assert!(out.board.is_ranked());
        assert_eq!(out.touched, Touched::Order);

        // over one of its own cards
        assert!(resolve(&board(), &DragToken::column("todo"), Some(&DragToken::card("todo", "b"))).is_none());
    }

    #[test]
    fn test_stale_tokens_are_noops() {
        let b = board();
        assert!(resolve(&b, &DragToken::card("todo", "zzz"), Some(&DragToken::column("done"))).is_none());
        assert!(resolve(&b, &DragToken::card("gone", "a"), Some(&DragToken::column("done"))).is_none());
        assert!(resolve(&b, &DragToken::card("todo", "a"), Some(&DragToken::column("gone"))).is_none());
        assert!(resolve(&b, &DragToken::card("todo", "a"), Some(&DragToken::card("todo", "zzz"))).is_none());
        assert!(resolve(&b, &DragToken::column("todo"), Some(&DragToken::column("gone"))).is_none());
        assert!(resolve(&b, &DragToken::column("todo"), Some(&DragToken::card("gone", "e"))).is_none());
    }

    #[test]
    fn test_tracker() {
        let mut tracker = DragTracker::default();
        assert!(tracker.finish().is_none());
        tracker.start(DragToken::column("todo"));
        assert_eq!(tracker.active(), Some(&DragToken::column("todo")));
        assert_eq!(tracker.finish(), Some(DragToken::column("todo")));
        assert!(tracker.active().is_none());
    }
}
