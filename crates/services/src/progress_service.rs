use std::sync::Arc;

use literacy_core::model::{Outcome, Passage, StudentBook, StudentRecord};
use literacy_core::streak::{self, AttemptResult};
use storage::repository::StudentRepository;

use crate::Clock;
use crate::error::ProgressServiceError;

/// Owns the student records for a session: login, attempts and ranking.
///
/// Records are saved after every attempt. A first login only adds the record
/// in memory; it reaches disk with the student's first attempt.
pub struct ProgressService {
    clock: Clock,
    repo: Arc<dyn StudentRepository>,
    book: StudentBook,
}

impl ProgressService {
    /// Load every student record once from the repository.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::Storage` if the backend is unavailable.
    pub fn load(
        clock: Clock,
        repo: Arc<dyn StudentRepository>,
    ) -> Result<Self, ProgressServiceError> {
        let book = repo.load_students()?;
        tracing::info!(students = book.len(), "student records loaded");
        Ok(Self { clock, repo, book })
    }

    /// Return the student's record, creating an empty one on first login.
    pub fn login(&mut self, name: &str) -> &StudentRecord {
        if !self.book.contains(name) {
            tracing::info!(student = name, "new student");
        }
        self.book.get_or_create(name)
    }

    #[must_use]
    pub fn student(&self, name: &str) -> Option<&StudentRecord> {
        self.book.get(name)
    }

    #[must_use]
    pub fn students(&self) -> &StudentBook {
        &self.book
    }

    /// Check `answer` against the passage and record the attempt.
    ///
    /// # Errors
    ///
    /// See [`ProgressService::record_attempt`].
    pub fn submit_answer(
        &mut self,
        name: &str,
        passage: &Passage,
        answer: &str,
    ) -> Result<AttemptResult, ProgressServiceError> {
        let outcome = Outcome::from_correct(passage.accepts(answer));
        self.record_attempt(name, passage.title(), outcome)
    }

    /// Apply one attempt dated today to a logged-in student and persist all records.
    ///
    /// If persistence fails, the student's record is restored.
    ///
    /// # Errors
    ///
    /// Returns `ProgressServiceError::UnknownStudent` if `name` never logged in.
    /// Returns `ProgressServiceError::Storage` if persistence fails.
    pub fn record_attempt(
        &mut self,
        name: &str,
        title: &str,
        outcome: Outcome,
    ) -> Result<AttemptResult, ProgressServiceError> {
        let today = self.clock.today();
        let record = self
            .book
            .get_mut(name)
            .ok_or_else(|| ProgressServiceError::UnknownStudent(name.to_owned()))?;
        let original = record.clone();

        let result = streak::record_attempt(record, title, outcome, today);

        if let Err(err) = self.repo.save_students(&self.book) {
            if let Some(record) = self.book.get_mut(name) {
                *record = original;
            }
            return Err(err.into());
        }

        tracing::debug!(student = name, transition = ?result.transition, "streak updated");
        tracing::info!(
            student = name,
            %title,
            outcome = outcome.as_str(),
            streak = result.streak,
            points = result.total_points,
            "attempt recorded"
        );
        if let Some(bonus) = result.bonus {
            tracing::info!(student = name, streak = bonus.streak, "streak bonus reached");
        }

        Ok(result)
    }

    /// All students ordered by points, highest first; ties keep first-seen order.
    #[must_use]
    pub fn ranking(&self) -> Vec<(&str, &StudentRecord)> {
        self.book.ranking()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use literacy_core::model::PassageDraft;
    use literacy_core::streak::StreakTransition;
    use literacy_core::time::{fixed_clock, fixed_today};
    use storage::repository::{InMemoryRepository, StorageError};

    struct ReadOnlyRepository;

    impl StudentRepository for ReadOnlyRepository {
        fn load_students(&self) -> Result<StudentBook, StorageError> {
            Ok(StudentBook::new())
        }

        fn save_students(&self, _book: &StudentBook) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "read-only.json".into(),
                source: std::io::Error::other("read-only"),
            })
        }
    }

    fn passage() -> Passage {
        PassageDraft::new("Kancil", "Si kancil cerdik.", "Siapa yang cerdik?", "kancil")
            .validate()
            .unwrap()
    }

    #[test]
    fn login_creates_record_without_saving() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut service = ProgressService::load(fixed_clock(), repo.clone()).unwrap();

        assert_eq!(service.login("Ana").points(), 0);
        assert!(service.student("Ana").is_some());
        assert!(repo.load_students().unwrap().is_empty());
    }

    #[test]
    fn submit_answer_scores_and_persists() {
        let repo = Arc::new(InMemoryRepository::new());
        let mut service = ProgressService::load(fixed_clock(), repo.clone()).unwrap();
        service.login("Ana");

        let result = service
            .submit_answer("Ana", &passage(), "Itu si KANCIL!")
            .unwrap();
        assert_eq!(result.outcome, Outcome::Correct);
        assert_eq!(result.transition, StreakTransition::Started);
        assert_eq!(result.total_points, 10);

        let stored = repo.load_students().unwrap();
        let ana = stored.get("Ana").unwrap();
        assert_eq!(ana.points(), 10);
        assert_eq!(ana.history()[0].date, fixed_today());
    }

    #[test]
    fn wrong_answer_still_counts_as_attempt() {
        let mut service =
            ProgressService::load(fixed_clock(), Arc::new(InMemoryRepository::new())).unwrap();
        service.login("Ana");

        let result = service.submit_answer("Ana", &passage(), "buaya").unwrap();
        assert_eq!(result.outcome, Outcome::Incorrect);
        assert_eq!(result.total_points, 0);
        assert_eq!(result.streak, 1);
        assert_eq!(service.student("Ana").unwrap().history().len(), 1);
    }

    #[test]
    fn attempt_for_unknown_student_fails() {
        let mut service =
            ProgressService::load(fixed_clock(), Arc::new(InMemoryRepository::new())).unwrap();
        let err = service
            .record_attempt("Ghost", "Kancil", Outcome::Correct)
            .unwrap_err();
        assert!(matches!(err, ProgressServiceError::UnknownStudent(name) if name == "Ghost"));
    }

    #[test]
    fn failed_save_restores_record() {
        let mut service = ProgressService::load(fixed_clock(), Arc::new(ReadOnlyRepository)).unwrap();
        service.login("Ana");

        let err = service
            .record_attempt("Ana", "Kancil", Outcome::Correct)
            .unwrap_err();
        assert!(matches!(err, ProgressServiceError::Storage(_)));

        let ana = service.student("Ana").unwrap();
        assert_eq!(ana.points(), 0);
        assert!(ana.history().is_empty());
        assert_eq!(ana.last_read_date(), None);
    }

    #[test]
    fn ranking_reflects_attempts() {
        let mut service =
            ProgressService::load(fixed_clock(), Arc::new(InMemoryRepository::new())).unwrap();
        for name in ["A", "B", "C"] {
            service.login(name);
        }
        service.record_attempt("C", "T", Outcome::Correct).unwrap();

        let names: Vec<&str> = service.ranking().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }
}
