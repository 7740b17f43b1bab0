//! Column Operations
//!
//! Every function that changes the set or sequence of columns renumbers
//! `order` before returning.

use crate::domain::{Board, Column, DomainError, DomainResult};

use super::positioning::array_move;

/// Append an empty column ranked after the existing ones.
pub fn add_column(board: &Board, title: &str) -> DomainResult<Board> {
    let title = title.trim();
    if title.is_empty() {
        return Err(DomainError::Validation("column title is empty".to_string()));
    }

    let mut next = board.clone();
    let order = next.len();
    next.columns_mut().push(Column::new(title, order));
    Ok(next)
}

/// Remove a column and close the gap in the ranking.
pub fn delete_column(board: &Board, column_id: &str) -> DomainResult<Board> {
    let index = board
        .column_index(column_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", column_id)))?;

    let mut next = board.clone();
    next.columns_mut().remove(index);
    next.renumber();
    Ok(next)
}

/// Move the `active_id` column to the position held by `over_id`.
pub fn move_column(board: &Board, active_id: &str, over_id: &str) -> DomainResult<Board> {
    let from = board
        .column_index(active_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", active_id)))?;
    let to = board
        .column_index(over_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", over_id)))?;

    let mut next = board.clone();
    array_move(next.columns_mut(), from, to);
    next.renumber();
    Ok(next)
}

/// Replace the id of a column, used once the document store assigns one.
pub(crate) fn rekey_column(board: &Board, old_id: &str, new_id: &str) -> DomainResult<Board> {
    if board.column_index(new_id).is_some() {
        return Err(DomainError::Validation(format!("column id {} already in use", new_id)));
    }
    let index = board
        .column_index(old_id)
        .ok_or_else(|| DomainError::NotFound(format!("column {}", old_id)))?;

    let mut next = board.clone();
    next.columns_mut()[index].id = new_id.to_string();
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(board: &Board) -> Vec<&str> {
        board.columns().iter().map(|c| c.title.as_str()).collect()
    }

    #[test]
    fn test_add_column() {
        let board = add_column(&Board::new(), "To Do").unwrap();
        let board = add_column(&board, " Done ").unwrap();
        assert_eq!(titles(&board), vec!["To Do", "Done"]);
        assert_eq!(board.columns()[1].order, 1);
        assert!(board.columns()[1].cards.is_empty());
        assert!(add_column(&board, "  ").unwrap_err().is_validation());
    }

    #[test]
    fn test_ranking_survives_add_delete_sequences() {
        let mut board = Board::new();
        for title in ["a", "b", "c", "d", "e"] {
            board = add_column(&board, title).unwrap();
        }
        let ids: Vec<String> = board.columns().iter().map(|c| c.id.clone()).collect();

        board = delete_column(&board, &ids[1]).unwrap();
        assert!(board.is_ranked());
        board = add_column(&board, "f").unwrap();
        board = delete_column(&board, &ids[0]).unwrap();
        board = delete_column(&board, &ids[4]).unwrap();
        assert!(board.is_ranked());
        assert_eq!(titles(&board), vec!["c", "d", "f"]);
    }

    #[test]
    fn test_delete_unknown_column() {
        let board = add_column(&Board::new(), "a").unwrap();
        assert!(delete_column(&board, "missing").unwrap_err().is_not_found());
    }

    #[test]
    fn test_move_column() {
        let mut board = Board::new();
        for title in ["a", "b", "c"] {
            board = add_column(&board, title).unwrap();
        }
        let first = board.columns()[0].id.clone();
        let last = board.columns()[2].id.clone();

        let moved = move_column(&board, &first, &last).unwrap();
        assert_eq!(titles(&moved), vec!["b", "c", "a"]);
        assert!(moved.is_ranked());
    }

    #[test]
    fn test_rekey_column() {
        let board = add_column(&Board::new(), "a").unwrap();
        let old = board.columns()[0].id.clone();
        let rekeyed = rekey_column(&board, &old, "doc-1").unwrap();
        assert!(rekeyed.column("doc-1").is_some());
        assert!(rekey_column(&rekeyed, &old, "doc-2").unwrap_err().is_not_found());
    }
}
