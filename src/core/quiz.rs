use rand::{
    seq::SliceRandom,
    Rng,
};

use super::{
    review::ReviewTracker,
    store::EntryStore,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub correct: u32,
    pub wrong: u32,
}

/// One run through the active dataset in random order.
///
/// The queue is a uniform permutation of the dataset's ids (Fisher-Yates via
/// `SliceRandom::shuffle`). Calls that arrive out of turn are ignored rather
/// than treated as errors: `reveal` when already revealed or finished does
/// nothing, and `answer` before `reveal` does nothing.
#[derive(Debug)]
pub struct QuizSession {
    queue: Vec<String>,
    position: usize,
    revealed: bool,
    score: Score,
    finished: bool,
}

impl QuizSession {
    pub fn new(store: &EntryStore) -> Self {
        Self::with_rng(store, &mut rand::rng())
    }

    pub fn with_rng(store: &EntryStore, rng: &mut impl Rng) -> Self {
        let mut queue: Vec<String> = store.ids().to_vec();
        queue.shuffle(rng);

        // An empty dataset makes for a session that is over before it starts.
        let finished = queue.is_empty();

        Self { queue, position: 0, revealed: false, score: Score::default(), finished }
    }

    pub fn queue(&self) -> &[String] {
        &self.queue
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn revealed(&self) -> bool {
        self.revealed
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn current_id(&self) -> Option<&str> {
        if self.finished {
            None
        } else {
            self.queue.get(self.position).map(String::as_str)
        }
    }

    pub fn reveal(&mut self) {
        if !self.finished {
            self.revealed = true;
        }
    }

    /// Scores the current card and advances. A wrong answer logs the id with
    /// the tracker in answer order.
    pub fn answer(&mut self, known: bool, tracker: &mut ReviewTracker) {
        if self.finished || !self.revealed {
            return;
        }

        if known {
            self.score.correct += 1;
        } else {
            self.score.wrong += 1;
            if let Some(id) = self.queue.get(self.position) {
                tracker.record(id.clone());
            }
        }

        if self.position + 1 < self.queue.len() {
            self.position += 1;
            self.revealed = false;
        } else {
            self.finished = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{
        rngs::StdRng,
        SeedableRng,
    };

    use super::*;

    fn store_of(ids: &[&str]) -> EntryStore {
        let body: Vec<String> =
            ids.iter().map(|id| format!(r#""{}": ["", "", "", [], []]"#, id)).collect();
        EntryStore::from_json(&format!("{{{}}}", body.join(","))).unwrap()
    }

    #[test]
    fn queue_is_a_permutation_of_the_dataset() {
        let store = store_of(&["1", "2", "3", "4", "5", "6", "7"]);
        let mut rng = StdRng::seed_from_u64(7);
        let session = QuizSession::with_rng(&store, &mut rng);

        assert_eq!(session.len(), store.len());
        let queued: BTreeSet<&String> = session.queue().iter().collect();
        let expected: BTreeSet<&String> = store.ids().iter().collect();
        assert_eq!(queued, expected);
    }

    #[test]
    fn shuffle_positions_are_roughly_uniform() {
        // With 5 ids over 2000 sessions, each id lands at position 0 about
        // 400 times. A 300..=500 window is far outside normal variation only
        // if the shuffle is biased.
        let store = store_of(&["a", "b", "c", "d", "e"]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut first_slot_hits = 0;
        for _ in 0..2000 {
            let session = QuizSession::with_rng(&store, &mut rng);
            if session.queue()[0] == "a" {
                first_slot_hits += 1;
            }
        }

        assert!(
            (300..=500).contains(&first_slot_hits),
            "id 'a' led the queue {} times out of 2000",
            first_slot_hits
        );
    }

    #[test]
    fn full_session_keeps_score_and_tracker_consistent() {
        let store = store_of(&["1", "2", "3", "4"]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut session = QuizSession::with_rng(&store, &mut rng);
        let mut tracker = ReviewTracker::default();

        // Miss every other card.
        let mut missed = Vec::new();
        for turn in 0..4 {
            let known = turn % 2 == 0;
            if !known {
                missed.push(session.current_id().unwrap().to_string());
            }
            session.reveal();
            session.answer(known, &mut tracker);
        }

        assert!(session.is_finished());
        let score = session.score();
        assert_eq!(score.correct + score.wrong, 4);
        assert_eq!(score, Score { correct: 2, wrong: 2 });
        assert_eq!(tracker.len() as u32, score.wrong);
        assert_eq!(tracker.wrong_ids(), missed);
    }

    #[test]
    fn answer_requires_a_reveal_first() {
        let store = store_of(&["1", "2"]);
        let mut session = QuizSession::new(&store);
        let mut tracker = ReviewTracker::default();

        session.answer(true, &mut tracker);
        assert_eq!(session.position(), 0);
        assert_eq!(session.score(), Score::default());

        session.reveal();
        session.answer(false, &mut tracker);
        assert_eq!(session.position(), 1);
        assert!(!session.revealed());
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn empty_dataset_finishes_immediately() {
        let store = EntryStore::default();
        let mut session = QuizSession::new(&store);
        assert!(session.is_finished());
        assert_eq!(session.score(), Score { correct: 0, wrong: 0 });
        assert_eq!(session.current_id(), None);

        // Nothing to reveal or answer; calls stay inert.
        let mut tracker = ReviewTracker::default();
        session.reveal();
        session.answer(true, &mut tracker);
        assert_eq!(session.score(), Score { correct: 0, wrong: 0 });
        assert!(tracker.is_empty());
    }
}
