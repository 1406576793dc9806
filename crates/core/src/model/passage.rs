use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PassageError {
    #[error("passage title cannot be empty")]
    EmptyTitle,

    #[error("answer key cannot be empty")]
    EmptyAnswerKey,
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated passage input, as typed by an administrator.
#[derive(Debug, Clone, Default)]
pub struct PassageDraft {
    pub title: String,
    pub body: String,
    pub question: String,
    pub answer_key: String,
}

impl PassageDraft {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        question: impl Into<String>,
        answer_key: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            question: question.into(),
            answer_key: answer_key.into(),
        }
    }

    /// Validate and normalize the draft into a passage.
    ///
    /// The title is trimmed and the answer key is trimmed and lowercased.
    ///
    /// # Errors
    ///
    /// Returns `PassageError::EmptyTitle` or `PassageError::EmptyAnswerKey`
    /// when either field is blank.
    pub fn validate(self) -> Result<Passage, PassageError> {
        let title = self.title.trim().to_owned();
        if title.is_empty() {
            return Err(PassageError::EmptyTitle);
        }

        let answer_key = self.answer_key.trim().to_lowercase();
        if answer_key.is_empty() {
            return Err(PassageError::EmptyAnswerKey);
        }

        Ok(Passage {
            title,
            body: self.body,
            question: self.question,
            answer_key,
        })
    }
}

//
// ─── PASSAGE ───────────────────────────────────────────────────────────────────
//

/// A reading text with its comprehension question and accepted answer.
///
/// Passages have no stable identifier; they are addressed by position in a
/// [`PassageCatalog`](crate::model::PassageCatalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passage {
    title: String,
    body: String,
    question: String,
    answer_key: String,
}

impl Passage {
    /// Rehydrate a passage from persisted storage.
    ///
    /// Stored documents are trusted as-is; no validation is applied.
    #[must_use]
    pub fn from_persisted(
        title: String,
        body: String,
        question: String,
        answer_key: String,
    ) -> Self {
        Self {
            title,
            body,
            question,
            answer_key,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer_key(&self) -> &str {
        &self.answer_key
    }

    /// Returns true if `answer` contains the answer key, ignoring case.
    ///
    /// This is plain substring containment: `"the cat sat"` is accepted for
    /// the key `"cat"`, and so is `"concatenate"`.
    #[must_use]
    pub fn accepts(&self, answer: &str) -> bool {
        answer
            .to_lowercase()
            .contains(&self.answer_key.to_lowercase())
    }
}
