use literacy_core::model::StudentRecord;
use literacy_core::streak::{AttemptResult, CORRECT_POINTS};

use crate::vm::time_fmt::format_date;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub points_label: String,
    pub streak_label: String,
    pub history_rows: Vec<String>,
}

#[must_use]
pub fn map_progress(record: &StudentRecord) -> ProgressVm {
    ProgressVm {
        points_label: format!("Total points : {}", record.points()),
        streak_label: format!("Streak       : {}", record.streak()),
        history_rows: record
            .history()
            .iter()
            .map(|h| {
                format!(
                    "- {} | {} : {}",
                    format_date(h.date),
                    h.title,
                    h.outcome.as_str()
                )
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptFeedbackVm {
    pub verdict: String,
    pub bonus: Option<String>,
}

#[must_use]
pub fn map_attempt_feedback(result: &AttemptResult) -> AttemptFeedbackVm {
    let verdict = if result.outcome.is_correct() {
        format!("✔ Correct answer! +{CORRECT_POINTS} points")
    } else {
        "✘ Wrong answer. +0 points".to_string()
    };
    let bonus = result.bonus.map(|b| {
        format!(
            "🔥 BONUS! You reached a {}-day streak! +{} points",
            b.streak, b.points
        )
    });
    AttemptFeedbackVm { verdict, bonus }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RankingRowVm {
    pub label: String,
}

#[must_use]
pub fn map_ranking(ranked: &[(&str, &StudentRecord)]) -> Vec<RankingRowVm> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, (name, record))| RankingRowVm {
            label: format!(
                "{}. {} - {} points | streak {}",
                i + 1,
                name,
                record.points(),
                record.streak()
            ),
        })
        .collect()
}
