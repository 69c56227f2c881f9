//! Transient user notifications.
//!
//! A notice lives through a fixed window: fully visible for two seconds,
//! then a short exit transition, then gone. Notices stack in post order;
//! duplicates are not merged and a posted notice cannot be cancelled.
//! Expiry is cooperative: the board is swept when state is rendered, not by
//! a background timer.

use std::time::{Duration, Instant};

/// How long a notice stays fully visible.
pub const VISIBLE: Duration = Duration::from_millis(2000);

/// Length of the exit transition that follows the visible window.
pub const EXIT: Duration = Duration::from_millis(300);

/// A single transient message.
#[derive(Debug, Clone)]
pub struct Notice {
    message: String,
    posted_at: Instant,
}

impl Notice {
    const fn new(message: String, posted_at: Instant) -> Self {
        Self { message, posted_at }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.posted_at)
    }

    /// Whether the notice is inside its fully-visible window.
    #[must_use]
    pub fn is_visible(&self, now: Instant) -> bool {
        self.age(now) < VISIBLE
    }

    /// Whether the notice is inside its exit transition.
    #[must_use]
    pub fn is_leaving(&self, now: Instant) -> bool {
        let age = self.age(now);
        age >= VISIBLE && age < VISIBLE + EXIT
    }

    /// Whether the exit transition has finished.
    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.age(now) >= VISIBLE + EXIT
    }
}

/// An ordered collection of live notices.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
}

impl NoticeBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice now.
    pub fn push(&mut self, message: impl Into<String>) {
        self.push_at(message, Instant::now());
    }

    /// Post a notice with an explicit timestamp.
    pub fn push_at(&mut self, message: impl Into<String>, posted_at: Instant) {
        self.notices.push(Notice::new(message.into(), posted_at));
    }

    /// Drop notices whose exit transition has finished.
    pub fn sweep(&mut self, now: Instant) {
        self.notices.retain(|notice| !notice.is_expired(now));
    }

    /// Sweep, then return the notices still alive at `now`, oldest first.
    pub fn active(&mut self, now: Instant) -> &[Notice] {
        self.sweep(now);
        &self.notices
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn at(t0: Instant, millis: u64) -> Instant {
        t0 + Duration::from_millis(millis)
    }

    #[test]
    fn test_notice_lifecycle_windows() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("Added to cart!", t0);
        let notice = board.active(at(t0, 0))[0].clone();

        assert!(notice.is_visible(at(t0, 0)));
        assert!(notice.is_visible(at(t0, 1999)));
        assert!(!notice.is_leaving(at(t0, 1999)));

        assert!(!notice.is_visible(at(t0, 2000)));
        assert!(notice.is_leaving(at(t0, 2000)));
        assert!(notice.is_leaving(at(t0, 2299)));

        assert!(!notice.is_leaving(at(t0, 2300)));
        assert!(notice.is_expired(at(t0, 2300)));
    }

    #[test]
    fn test_duplicate_messages_stack() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("Added to cart!", t0);
        board.push_at("Added to cart!", t0);

        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_sweep_drops_only_expired_notices() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("first", t0);
        board.push_at("second", at(t0, 1000));

        board.sweep(at(t0, 2300));
        assert_eq!(board.len(), 1);
        assert_eq!(board.active(at(t0, 2300))[0].message(), "second");
    }

    #[test]
    fn test_active_returns_oldest_first() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("first", t0);
        board.push_at("second", at(t0, 10));

        let messages: Vec<&str> = board
            .active(at(t0, 20))
            .iter()
            .map(Notice::message)
            .collect();
        assert_eq!(messages, vec!["first", "second"]);
    }

    #[test]
    fn test_notice_posted_in_future_counts_as_visible() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        board.push_at("early", at(t0, 10_000));

        // Clock skew saturates to zero age rather than wrapping.
        assert!(board.active(t0)[0].is_visible(t0));
    }

    #[test]
    fn test_empty_board() {
        let t0 = Instant::now();
        let mut board = NoticeBoard::new();
        assert!(board.is_empty());
        assert!(board.active(t0).is_empty());
    }
}
