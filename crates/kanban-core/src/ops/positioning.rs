//! Positioning Helpers
//!
//! Sequence moves shared by card and column reordering.

/// Remove the element at `from` and reinsert it at `to`, shifting the
/// elements in between by one.
///
/// Returns `false` and leaves `items` untouched when either index is out of
/// range.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from >= items.len() || to >= items.len() {
        return false;
    }
    if from != to {
        let moved = items.remove(from);
        items.insert(to, moved);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(array_move(&mut v, 0, 2));
        assert_eq!(v, vec!['b', 'c', 'a', 'd']);
    }

    #[test]
    fn test_move_backward() {
        let mut v = vec!['a', 'b', 'c', 'd'];
        assert!(array_move(&mut v, 3, 1));
        assert_eq!(v, vec!['a', 'd', 'b', 'c']);
    }

    #[test]
    fn test_out_of_range_is_rejected() {
        let mut v = vec![1, 2, 3];
        assert!(!array_move(&mut v, 0, 3));
        assert!(!array_move(&mut v, 5, 0));
        assert_eq!(v, vec![1, 2, 3]);
    }
}
