//! Card Operations
//!
//! Pure functions producing a new board for card edits. The caller decides
//! which errors are surfaced to the user.

use chrono::NaiveDate;

use crate::domain::{Board, Card, DomainError, DomainResult};

/// Append a new card holding the trimmed `content` to the end of a column.
pub fn add_card(board: &Board, column_id: &str, content: &str) -> DomainResult<Board> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation("card content is empty".to_string()));
    }

    let index = board
        .column_index(column_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", column_id)))?;

    let mut next = board.clone();
    next.columns_mut()[index].cards.push(Card::new(content));
    Ok(next)
}

/// Remove a card from a column. Other columns are left untouched.
pub fn delete_card(board: &Board, column_id: &str, card_id: &str) -> DomainResult<Board> {
    let index = board
        .column_index(column_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", column_id)))?;
    let card_index = board.columns()[index]
        .card_index(card_id)
        .ok_or_else(|| DomainError::NotFound(format!("card {} in column {}", card_id, column_id)))?;

    let mut next = board.clone();
    next.columns_mut()[index].cards.remove(card_index);
    Ok(next)
}

/// Replace a card's content and due date, keeping its id and creation time.
pub fn update_card(
    board: &Board,
    column_id: &str,
    card_id: &str,
    content: &str,
    due_date: Option<NaiveDate>,
) -> DomainResult<Board> {
    let content = content.trim();
    if content.is_empty() {
        return Err(DomainError::Validation("card content is empty".to_string()));
    }

    let index = board
        .column_index(column_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", column_id)))?;
    let card_index = board.columns()[index]
        .card_index(card_id)
        .ok_or_else(|| DomainError::NotFound(format!("card {} in column {}", card_id, column_id)))?;

    let mut next = board.clone();
    let card = &mut next.columns_mut()[index].cards[card_index];
    card.content = content.to_string();
    card.due_date = due_date;
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Column;
    use chrono::Utc;

    fn board() -> Board {
        let now = Utc::now();
        Board::from_columns(vec![
            Column::with_id("todo", "To Do", 0).with_cards(vec![
                Card::with_id("a", "first", now),
                Card::with_id("b", "second", now),
            ]),
            Column::with_id("done", "Done", 1).with_cards(vec![Card::with_id("c", "third", now)]),
        ])
    }

    #[test]
    fn test_add_card_appends() {
        let before = board();
        let after = add_card(&before, "todo", "  buy milk ").unwrap();

        let todo = after.column("todo").unwrap();
        assert_eq!(todo.cards.len(), 3);
        assert_eq!(todo.cards[2].content, "buy milk");
        assert!(todo.cards[2].due_date.is_none());
        assert_eq!(after.column("done"), before.column("done"));
        // the original snapshot is not modified
        assert_eq!(before.column("todo").unwrap().cards.len(), 2);
    }

    #[test]
    fn test_add_card_rejects_blank_content() {
        let b = board();
        assert!(add_card(&b, "todo", "").unwrap_err().is_validation());
        assert!(add_card(&b, "todo", "   ").unwrap_err().is_validation());
    }

    #[test]
    fn test_add_card_unknown_column() {
        assert!(add_card(&board(), "nope", "x").unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_card() {
        let before = board();
        let after = delete_card(&before, "todo", "a").unwrap();
        let ids: Vec<&str> = after.column("todo").unwrap().cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
        assert_eq!(after.column("done"), before.column("done"));

        assert!(delete_card(&after, "todo", "a").unwrap_err().is_not_found());
    }

    #[test]
    fn test_update_card_preserves_identity() {
        let before = board();
        let due = NaiveDate::from_ymd_opt(2024, 1, 1);
        let after = update_card(&before, "todo", "b", " rewritten ", due).unwrap();

        let old = before.column("todo").unwrap().card("b").unwrap();
        let new = after.column("todo").unwrap().card("b").unwrap();
        assert_eq!(new.content, "rewritten");
        assert_eq!(new.due_date, due);
        assert_eq!(new.id, old.id);
        assert_eq!(new.created_at, old.created_at);
    }

    #[test]
    fn test_update_card_validation_comes_first() {
        let err = update_card(&board(), "missing", "b", " ", None).unwrap_err();
        assert!(err.is_validation());
    }
}
