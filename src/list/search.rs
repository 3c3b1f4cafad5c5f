//! Debounced free-text search.
//!
//! The local text follows every keystroke. The committed value only moves
//! after `delay` has passed without further input, and a navigation is asked
//! for only when the committed value differs from the one in the URL. Time is
//! passed in explicitly so the owner decides how the timer is driven.

use std::time::{Duration, Instant};

#[derive(Clone, Debug)]
pub struct DebouncedSearch {
    text: String,
    committed: String,
    delay: Duration,
    deadline: Option<Instant>,
}

impl DebouncedSearch {
    pub fn new(url_value: &str, delay: Duration) -> Self {
        let value = url_value.trim().to_string();
        Self {
            text: value.clone(),
            committed: value,
            delay,
            deadline: None,
        }
    }

    /// Text currently shown in the input.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn committed(&self) -> &str {
        &self.committed
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the pending commit fires, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Records a keystroke and restarts the quiet period.
    pub fn input(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.deadline = Some(now + self.delay);
    }

    /// Commits the text once the quiet period has elapsed. Returns the value
    /// to navigate to when it differs from `url_value`.
    pub fn poll(&mut self, now: Instant, url_value: &str) -> Option<String> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }

        self.deadline = None;
        self.committed = self.text.trim().to_string();
        (self.committed != url_value.trim()).then(|| self.committed.clone())
    }

    /// Follows a URL change. A value equal to the last commit is the echo of
    /// our own navigation and leaves the input alone; anything else (back,
    /// forward, a link) replaces the text and drops the pending commit.
    pub fn sync_from_url(&mut self, url_value: &str) {
        let url_value = url_value.trim();
        if url_value == self.committed {
            return;
        }
        self.text = url_value.to_string();
        self.committed = url_value.to_string();
        self.deadline = None;
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn commit_waits_for_quiet_period() {
        let t0 = Instant::now();
        let mut search = DebouncedSearch::new("", DELAY);

        search.input("m", t0);
        assert_eq!(search.text(), "m");
        assert_eq!(search.poll(t0 + Duration::from_millis(299), ""), None);
        assert_eq!(search.committed(), "");
        assert_eq!(search.poll(t0 + DELAY, ""), Some("m".to_string()));
        assert!(!search.is_pending());
    }

    #[test]
    fn no_navigation_when_url_already_matches() {
        let t0 = Instant::now();
        let mut search = DebouncedSearch::new("moon", DELAY);
        search.input("moo", t0);
        search.input("moon ", t0 + Duration::from_millis(50));
        assert_eq!(search.poll(t0 + Duration::from_secs(1), "moon"), None);
        assert_eq!(search.committed(), "moon");
    }

    #[test]
    fn external_url_change_resyncs_input() {
        let t0 = Instant::now();
        let mut search = DebouncedSearch::new("moon", DELAY);
        search.input("moonlight", t0);
        search.sync_from_url("sun");
        assert_eq!(search.text(), "sun");
        assert!(!search.is_pending());
        assert_eq!(search.poll(t0 + Duration::from_secs(1), "sun"), None);
    }

    #[test]
    fn own_navigation_echo_keeps_newer_text() {
        let t0 = Instant::now();
        let mut search = DebouncedSearch::new("", DELAY);
        search.input("mars", t0);
        assert_eq!(search.poll(t0 + DELAY, ""), Some("mars".to_string()));

        search.input("mars rover", t0 + DELAY + Duration::from_millis(10));
        search.sync_from_url("mars");
        assert_eq!(search.text(), "mars rover");
        assert!(search.is_pending());
    }

    #[test]
    fn cancel_drops_pending_commit() {
        let t0 = Instant::now();
        let mut search = DebouncedSearch::new("", DELAY);
        search.input("venus", t0);
        search.cancel();
        assert_eq!(search.poll(t0 + Duration::from_secs(5), ""), None);
    }
}
