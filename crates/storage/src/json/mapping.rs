use std::fmt;

use chrono::NaiveDate;
use literacy_core::model::{
    AttemptEntry, Outcome, Passage, PassageCatalog, StudentBook, StudentRecord,
};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

//
// ─── PASSAGES ──────────────────────────────────────────────────────────────────
//

/// Persisted shape of one passage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageDoc {
    pub title: String,
    pub body: String,
    pub question: String,
    pub answer_key: String,
}

impl PassageDoc {
    #[must_use]
    pub fn from_passage(passage: &Passage) -> Self {
        Self {
            title: passage.title().to_owned(),
            body: passage.body().to_owned(),
            question: passage.question().to_owned(),
            answer_key: passage.answer_key().to_owned(),
        }
    }

    #[must_use]
    pub fn into_passage(self) -> Passage {
        Passage::from_persisted(self.title, self.body, self.question, self.answer_key)
    }
}

#[must_use]
pub fn catalog_to_docs(catalog: &PassageCatalog) -> Vec<PassageDoc> {
    catalog.list().iter().map(PassageDoc::from_passage).collect()
}

#[must_use]
pub fn catalog_from_docs(docs: Vec<PassageDoc>) -> PassageCatalog {
    PassageCatalog::from_passages(docs.into_iter().map(PassageDoc::into_passage).collect())
}

//
// ─── STUDENTS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeDoc {
    Correct,
    Incorrect,
}

impl From<Outcome> for OutcomeDoc {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Correct => Self::Correct,
            Outcome::Incorrect => Self::Incorrect,
        }
    }
}

impl From<OutcomeDoc> for Outcome {
    fn from(doc: OutcomeDoc) -> Self {
        match doc {
            OutcomeDoc::Correct => Self::Correct,
            OutcomeDoc::Incorrect => Self::Incorrect,
        }
    }
}

/// Persisted shape of one history entry. Dates are `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryDoc {
    pub title: String,
    pub outcome: OutcomeDoc,
    pub date: NaiveDate,
}

/// Persisted shape of one student record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDoc {
    pub points: u32,
    pub history: Vec<HistoryDoc>,
    pub streak: u32,
    pub last_read_date: Option<NaiveDate>,
}

impl StudentDoc {
    #[must_use]
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            points: record.points(),
            history: record
                .history()
                .iter()
                .map(|entry| HistoryDoc {
                    title: entry.title.clone(),
                    outcome: entry.outcome.into(),
                    date: entry.date,
                })
                .collect(),
            streak: record.streak(),
            last_read_date: record.last_read_date(),
        }
    }

    #[must_use]
    pub fn into_record(self) -> StudentRecord {
        let history = self
            .history
            .into_iter()
            .map(|h| AttemptEntry::new(h.title, h.outcome.into(), h.date))
            .collect();
        StudentRecord::from_persisted(self.points, history, self.streak, self.last_read_date)
    }
}

/// The students document: a JSON object keyed by name, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentsDoc(pub Vec<(String, StudentDoc)>);

impl StudentsDoc {
    #[must_use]
    pub fn from_book(book: &StudentBook) -> Self {
        Self(
            book.iter()
                .map(|(name, record)| (name.to_owned(), StudentDoc::from_record(record)))
                .collect(),
        )
    }

    #[must_use]
    pub fn into_book(self) -> StudentBook {
        StudentBook::from_entries(
            self.0
                .into_iter()
                .map(|(name, doc)| (name, doc.into_record())),
        )
    }
}

impl Serialize for StudentsDoc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, doc) in &self.0 {
            map.serialize_entry(name, doc)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for StudentsDoc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct StudentsVisitor;

        impl<'de> Visitor<'de> for StudentsVisitor {
            type Value = StudentsDoc;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map from student name to student record")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, doc)) = access.next_entry::<String, StudentDoc>()? {
                    entries.push((name, doc));
                }
                Ok(StudentsDoc(entries))
            }
        }

        deserializer.deserialize_map(StudentsVisitor)
    }
}
