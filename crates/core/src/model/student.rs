use chrono::NaiveDate;

//
// ─── OUTCOME ───────────────────────────────────────────────────────────────────
//

/// Whether a submitted answer matched the passage's answer key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Correct,
    Incorrect,
}

impl Outcome {
    #[must_use]
    pub fn from_correct(is_correct: bool) -> Self {
        if is_correct {
            Self::Correct
        } else {
            Self::Incorrect
        }
    }

    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, Outcome::Correct)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Incorrect => "incorrect",
        }
    }
}

//
// ─── HISTORY ENTRY ─────────────────────────────────────────────────────────────
//

/// One completed read-and-answer cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptEntry {
    pub title: String,
    pub outcome: Outcome,
    pub date: NaiveDate,
}

impl AttemptEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, outcome: Outcome, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            outcome,
            date,
        }
    }
}

//
// ─── STUDENT RECORD ────────────────────────────────────────────────────────────
//

/// Progress for a single student: points, streak and attempt log.
///
/// Only the streak engine mutates a record, so `points` never decreases and
/// `history` grows by exactly one entry per attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentRecord {
    points: u32,
    history: Vec<AttemptEntry>,
    streak: u32,
    last_read_date: Option<NaiveDate>,
}

impl StudentRecord {
    /// A brand-new student: no points, no history, no streak.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate a record from persisted storage.
    #[must_use]
    pub fn from_persisted(
        points: u32,
        history: Vec<AttemptEntry>,
        streak: u32,
        last_read_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            points,
            history,
            streak,
            last_read_date,
        }
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn history(&self) -> &[AttemptEntry] {
        &self.history
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak
    }

    #[must_use]
    pub fn last_read_date(&self) -> Option<NaiveDate> {
        self.last_read_date
    }

    pub(crate) fn add_points(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub(crate) fn set_streak(&mut self, streak: u32, read_on: NaiveDate) {
        self.streak = streak;
        self.last_read_date = Some(read_on);
    }

    pub(crate) fn push_history(&mut self, entry: AttemptEntry) {
        self.history.push(entry);
    }
}

//
// ─── STUDENT BOOK ──────────────────────────────────────────────────────────────
//

/// Mapping from student name to progress, in first-seen order.
///
/// Names are compared exactly (case-sensitive, no trimming). Records are
/// never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentBook {
    entries: Vec<(String, StudentRecord)>,
}

impl StudentBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a book from persisted entries, keeping their order.
    ///
    /// A repeated name replaces the earlier record in place.
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (String, StudentRecord)>) -> Self {
        let mut book = Self::new();
        for (name, record) in entries {
            match book.position(&name) {
                Some(idx) => book.entries[idx].1 = record,
                None => book.entries.push((name, record)),
            }
        }
        book
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StudentRecord> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut StudentRecord> {
        self.entries
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, record)| record)
    }

    /// Return the record for `name`, inserting a fresh one on first sight.
    pub fn get_or_create(&mut self, name: &str) -> &mut StudentRecord {
        let idx = match self.position(name) {
            Some(idx) => idx,
            None => {
                self.entries.push((name.to_owned(), StudentRecord::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// All students ordered by points, highest first.
    ///
    /// Ties keep first-seen order.
    #[must_use]
    pub fn ranking(&self) -> Vec<(&str, &StudentRecord)> {
        let mut ranked: Vec<(&str, &StudentRecord)> = self
            .entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
            .collect();
        // `sort_by` is stable, which is what keeps tied students in order.
        ranked.sort_by(|a, b| b.1.points.cmp(&a.1.points));
        ranked
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StudentRecord)> {
        self.entries
            .iter()
            .map(|(name, record)| (name.as_str(), record))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
