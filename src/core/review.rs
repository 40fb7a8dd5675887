/// Wrong-answer notebook for the most recent quiz run.
///
/// Ids are appended in the order they were missed. The cursor is bounded to
/// `[0, len - 1]`; moves past either end are refused so the caller can simply
/// disable the matching button.
#[derive(Debug, Default)]
pub struct ReviewTracker {
    wrong_ids: Vec<String>,
    cursor: usize,
}

impl ReviewTracker {
    pub fn reset(&mut self) {
        self.wrong_ids.clear();
        self.cursor = 0;
    }

    pub fn record(&mut self, id: String) {
        self.wrong_ids.push(id);
    }

    pub fn wrong_ids(&self) -> &[String] {
        &self.wrong_ids
    }

    pub fn len(&self) -> usize {
        self.wrong_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wrong_ids.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current_id(&self) -> Option<&str> {
        self.wrong_ids.get(self.cursor).map(String::as_str)
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.wrong_ids.len()
    }

    pub fn previous(&mut self) -> bool {
        if self.has_previous() {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    pub fn next(&mut self) -> bool {
        if self.has_next() {
            self.cursor += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ids_in_answer_order() {
        let mut tracker = ReviewTracker::default();
        tracker.record("3".to_string());
        tracker.record("1".to_string());
        tracker.record("2".to_string());
        assert_eq!(tracker.wrong_ids(), ["3", "1", "2"]);
    }

    #[test]
    fn navigation_stops_at_both_ends() {
        let mut tracker = ReviewTracker::default();
        tracker.record("a".to_string());
        tracker.record("b".to_string());

        assert!(!tracker.has_previous());
        assert!(!tracker.previous());
        assert_eq!(tracker.current_id(), Some("a"));

        assert!(tracker.next());
        assert_eq!(tracker.current_id(), Some("b"));
        assert!(!tracker.has_next());
        assert!(!tracker.next());
        assert_eq!(tracker.cursor(), 1);
    }

    #[test]
    fn reset_clears_log_and_cursor() {
        let mut tracker = ReviewTracker::default();
        tracker.record("a".to_string());
        tracker.record("b".to_string());
        tracker.next();

        tracker.reset();
        assert!(tracker.is_empty());
        assert_eq!(tracker.cursor(), 0);
        assert_eq!(tracker.current_id(), None);
    }

    #[test]
    fn empty_tracker_has_nowhere_to_go() {
        let mut tracker = ReviewTracker::default();
        assert!(!tracker.next());
        assert!(!tracker.previous());
        assert_eq!(tracker.current_id(), None);
    }
}
