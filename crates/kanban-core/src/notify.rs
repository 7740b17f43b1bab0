//! Notification Queue
//!
//! Toasts live until their deadline passes. Nothing removes an entry early:
//! the expiry timer calls [`NotificationQueue::sweep`] and that is the only
//! way out, apart from clearing the whole queue on teardown. A closed queue
//! accepts no new entries.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

use crate::clock::Clock;
use crate::domain::{Notification, NotificationKind};

pub const DEFAULT_TTL_MS: u64 = 5_000;

/// Longest accepted toast lifetime (one day)
pub const MAX_TTL_MS: u64 = 86_400_000;

/// Change reported to queue listeners
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    /// A new entry; schedule its expiry timer for `ttl`
    Pushed { notification: Notification, ttl: std::time::Duration },
    /// Entries removed by a sweep
    Expired(Vec<String>),
    Cleared,
}

pub type NotificationListener = Arc<dyn Fn(&NotificationEvent) + Send + Sync>;

struct Entry {
    notification: Notification,
    expires_at: DateTime<Utc>,
}

pub struct NotificationQueue {
    entries: Mutex<Vec<Entry>>,
    listeners: Mutex<Vec<NotificationListener>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    seq: AtomicU64,
    closed: AtomicBool,
}

impl NotificationQueue {
    /// `ttl_ms` is capped at [`MAX_TTL_MS`].
    pub fn new(clock: Arc<dyn Clock>, ttl_ms: u64) -> Self {
        let ttl_ms = i64::try_from(ttl_ms.min(MAX_TTL_MS)).unwrap_or(0);
        Self {
            entries: Mutex::new(Vec::new()),
            listeners: Mutex::new(Vec::new()),
            clock,
            ttl: Duration::milliseconds(ttl_ms),
            seq: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    /// Append a notification and return its id.
    /// After [`NotificationQueue::close`] nothing is stored or emitted.
    pub fn push(&self, kind: NotificationKind, message: impl Into<String>) -> String {
        let now = self.clock.now();
        let seq = self.seq.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id: format!("{}-{}", now.timestamp_millis(), seq),
            kind,
            message: message.into(),
        };
        let id = notification.id.clone();

        if self.is_closed() {
            log::debug!("notification after close dropped: {}", notification.message);
            return id;
        }

        if let Ok(mut entries) = self.entries.lock() {
            entries.push(Entry {
                notification: notification.clone(),
                expires_at: now.checked_add_signed(self.ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
            });
        }

        let ttl = self.ttl.to_std().unwrap_or_default();
        self.emit(&NotificationEvent::Pushed { notification, ttl });
        id
    }

    /// Entries in insertion order
    pub fn list(&self) -> Vec<Notification> {
        match self.entries.lock() {
            Ok(entries) => entries.iter().map(|e| e.notification.clone()).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every entry whose deadline is at or before the clock's now.
    /// Returns the ids removed.
    pub fn sweep(&self) -> Vec<String> {
        let now = self.clock.now();
        let expired: Vec<String> = match self.entries.lock() {
            Ok(mut entries) => {
                let expired = entries
                    .iter()
                    .filter(|e| e.expires_at <= now)
                    .map(|e| e.notification.id.clone())
                    .collect();
                entries.retain(|e| e.expires_at > now);
                expired
            }
            Err(_) => Vec::new(),
        };

        if !expired.is_empty() {
            self.emit(&NotificationEvent::Expired(expired.clone()));
        }
        expired
    }

    /// Drop all entries, used when the board view goes away
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
        self.emit(&NotificationEvent::Cleared);
    }

    /// Clear the queue and refuse later pushes
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn watch(&self, listener: NotificationListener) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push(listener);
        }
    }

    pub fn clear_watchers(&self) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.clear();
        }
    }

    fn emit(&self, event: &NotificationEvent) {
        let listeners: Vec<NotificationListener> = match self.listeners.lock() {
            Ok(guard) => guard.clone(),
            Err(_) => return,
        };
        for listener in listeners {
            listener(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn queue() -> (Arc<ManualClock>, NotificationQueue) {
        let start = DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z").unwrap().with_timezone(&Utc);
        let clock = Arc::new(ManualClock::new(start));
        let queue = NotificationQueue::new(clock.clone(), DEFAULT_TTL_MS);
        (clock, queue)
    }

    #[test]
    fn test_push_then_expire() {
        let (clock, queue) = queue();
        let id = queue.push(NotificationKind::Success, "x");

        let listed = queue.list();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, id);
        assert_eq!(listed[0].message, "x");

        clock.advance(Duration::milliseconds(4_999));
        assert!(queue.sweep().is_empty());
        assert_eq!(queue.len(), 1);

        clock.advance(Duration::milliseconds(1));
        assert_eq!(queue.sweep(), vec![id]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_insertion_order_and_unique_ids() {
        let (clock, queue) = queue();
        let first = queue.push(NotificationKind::Info, "one");
        let second = queue.push(NotificationKind::Error, "two");
        assert_ne!(first, second);

        clock.advance(Duration::seconds(2));
        queue.push(NotificationKind::Warning, "three");

        let messages: Vec<String> = queue.list().into_iter().map(|n| n.message).collect();
        assert_eq!(messages, vec!["one", "two", "three"]);

        // only the first two are due
        clock.advance(Duration::seconds(3));
        assert_eq!(queue.sweep().len(), 2);
        assert_eq!(queue.list()[0].message, "three");
    }

    #[test]
    fn test_listeners_get_events() {
        let (clock, queue) = queue();
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        queue.watch(Arc::new(move |event: &NotificationEvent| {
            sink.lock().unwrap().push(event.clone());
        }));

        queue.push(NotificationKind::Success, "saved");
        clock.advance(Duration::seconds(5));
        queue.sweep();
        queue.clear();

        let events = events.lock().unwrap();
        assert_eq!(events.len(), 3);
        match &events[0] {
            NotificationEvent::Pushed { notification, ttl } => {
                assert_eq!(notification.message, "saved");
                assert_eq!(*ttl, std::time::Duration::from_secs(5));
            }
            other => panic!("unexpected event {:?}", other),
        }
        assert!(matches!(events[1], NotificationEvent::Expired(ref ids) if ids.len() == 1));
        assert_eq!(events[2], NotificationEvent::Cleared);
    }

    #[test]
    fn test_ttl_is_capped() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T12:00:00Z").unwrap().with_timezone(&Utc);
        let clock = Arc::new(ManualClock::new(start));
        let queue = NotificationQueue::new(clock.clone(), 9_000_000_000_000_000_000);

        let id = queue.push(NotificationKind::Success, "saved");
        clock.advance(Duration::milliseconds(MAX_TTL_MS as i64 - 1));
        assert!(queue.sweep().is_empty());
        clock.advance(Duration::milliseconds(1));
        assert_eq!(queue.sweep(), vec![id]);
    }

    #[test]
    fn test_closed_queue_ignores_pushes() {
        let (_, queue) = queue();
        let events = Arc::new(Mutex::new(0usize));
        let sink = events.clone();
        queue.watch(Arc::new(move |_: &NotificationEvent| {
            *sink.lock().unwrap() += 1;
        }));

        queue.push(NotificationKind::Info, "before");
        queue.close();
        assert!(queue.is_closed());
        assert!(queue.is_empty());

        queue.push(NotificationKind::Error, "after");
        assert!(queue.is_empty());
        // Pushed + Cleared only
        assert_eq!(*events.lock().unwrap(), 2);
    }
}
