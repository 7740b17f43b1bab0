//! Board State Store
//!
//! Holds the current board snapshot. Writers replace the snapshot as a
//! whole; readers get a shared handle that never changes underneath them.

use std::sync::{Arc, Mutex, RwLock};

use crate::domain::Board;

/// Callback invoked after every commit
pub type BoardListener = Arc<dyn Fn(&Arc<Board>) + Send + Sync>;

struct Snapshot {
    board: Arc<Board>,
    version: u64,
}

/// Single source of truth for the board
pub struct BoardStore {
    current: RwLock<Snapshot>,
    listeners: Mutex<Vec<BoardListener>>,
}

impl BoardStore {
    pub fn new(board: Board) -> Self {
        Self {
            current: RwLock::new(Snapshot {
                board: Arc::new(board),
                version: 0,
            }),
            listeners: Mutex::new(Vec::new()),
        }
    }

    /// Current snapshot
    pub fn board(&self) -> Arc<Board> {
        match self.current.read() {
            Ok(guard) => guard.board.clone(),
            Err(poisoned) => poisoned.into_inner().board.clone(),
        }
    }

    /// Number of commits applied so far
    pub fn version(&self) -> u64 {
        match self.current.read() {
            Ok(guard) => guard.version,
            Err(poisoned) => poisoned.into_inner().version,
        }
    }

    /// Replace the board. Returns the version of the new snapshot.
    pub fn commit(&self, board: Board) -> u64 {
        let board = Arc::new(board);
        let version = {
            let mut guard = match self.current.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.board = board.clone();
            guard.version += 1;
            guard.version
        };
        self.notify(&board);
        version
    }

    /// Replace the board only if nothing else committed since `expected`.
    pub fn commit_if_version(&self, expected: u64, board: Board) -> Option<u64> {
        let board = Arc::new(board);
        let version = {
            let mut guard = match self.current.write() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            if guard.version != expected {
                return None;
            }
            guard.board = board.clone();
            guard.version += 1;
            guard.version
        };
        self.notify(&board);
        Some(version)
    }

    /// Register a listener called after each commit
    pub fn watch(&self, listener: BoardListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    pub fn clear_watchers(&self) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.clear();
        }
    }

    fn notify(&self, board: &Arc<Board>) {
        // Listeners run outside the lock so they may read the store.
        let listeners: Vec<BoardListener> = match self.listeners.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(board);
        }
    }
}

impl Default for BoardStore {
    fn default() -> Self {
        Self::new(Board::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::add_column;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_commit_replaces_snapshot() {
        let store = BoardStore::default();
        let before = store.board();

        let next = add_column(&before, "To Do").unwrap();
        assert_eq!(store.commit(next), 1);

        // an earlier handle still sees the old value
        assert!(before.is_empty());
        assert_eq!(store.board().len(), 1);
        assert_eq!(store.version(), 1);
    }

    #[test]
    fn test_commit_if_version() {
        let store = BoardStore::default();
        let v1 = store.commit(add_column(&Board::new(), "a").unwrap());
        store.commit(add_column(&Board::new(), "b").unwrap());

        assert!(store.commit_if_version(v1, Board::new()).is_none());
        assert_eq!(store.board().columns()[0].title, "b");
        assert_eq!(store.commit_if_version(2, Board::new()), Some(3));
        assert!(store.board().is_empty());
    }

    #[test]
    fn test_watchers_see_each_commit() {
        let store = Arc::new(BoardStore::default());
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = seen.clone();
        let reader = store.clone();
        store.watch(Arc::new(move |board: &Arc<Board>| {
            // reading the store from inside a listener must not deadlock
            assert_eq!(reader.board().len(), board.len());
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        store.commit(add_column(&Board::new(), "a").unwrap());
        store.commit(Board::new());
        assert_eq!(seen.load(Ordering::SeqCst), 2);

        store.clear_watchers();
        store.commit(Board::new());
        assert_eq!(seen.load(Ordering::SeqCst), 2);
    }
}
