use chrono::NaiveDate;

use crate::model::{AttemptEntry, Outcome, StudentRecord};

/// Points for a correct answer.
pub const CORRECT_POINTS: u32 = 10;
/// Extra points when the streak lands on a multiple of [`BONUS_EVERY`].
pub const BONUS_POINTS: u32 = 20;
/// Streak length that triggers a bonus (and every multiple of it).
pub const BONUS_EVERY: u32 = 5;

//
// ─── TRANSITION ────────────────────────────────────────────────────────────────
//

/// How a single attempt moved the daily streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakTransition {
    /// First attempt ever: streak starts at 1.
    Started,
    /// Last reading was yesterday: streak grows by one.
    Extended,
    /// Already read today: streak is unchanged.
    SameDay,
    /// Any other gap (including dates in the future): streak restarts at 1.
    Reset,
}

/// Compute the next streak value from the last reading date.
///
/// Checks run in a fixed order: absent, yesterday, today, anything else.
///
/// ```
/// # use chrono::NaiveDate;
/// # use literacy_core::streak::{next_streak, StreakTransition};
/// let today = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
/// let yesterday = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(next_streak(Some(yesterday), 4, today), (5, StreakTransition::Extended));
/// assert_eq!(next_streak(None, 0, today), (1, StreakTransition::Started));
/// ```
#[must_use]
pub fn next_streak(
    last_read_date: Option<NaiveDate>,
    current: u32,
    today: NaiveDate,
) -> (u32, StreakTransition) {
    let Some(last) = last_read_date else {
        return (1, StreakTransition::Started);
    };

    if today.pred_opt() == Some(last) {
        (current.saturating_add(1), StreakTransition::Extended)
    } else if last == today {
        (current, StreakTransition::SameDay)
    } else {
        (1, StreakTransition::Reset)
    }
}

//
// ─── ATTEMPT RESULT ────────────────────────────────────────────────────────────
//

/// Signalled when an attempt lands the streak on a bonus multiple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakBonus {
    pub streak: u32,
    pub points: u32,
}

/// What a recorded attempt changed on the student record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttemptResult {
    pub outcome: Outcome,
    pub transition: StreakTransition,
    /// Points for the answer itself (0 or [`CORRECT_POINTS`]).
    pub answer_points: u32,
    pub bonus: Option<StreakBonus>,
    /// Streak after the attempt.
    pub streak: u32,
    /// Running total after the attempt.
    pub total_points: u32,
}

impl AttemptResult {
    #[must_use]
    pub fn points_awarded(&self) -> u32 {
        self.answer_points + self.bonus.map_or(0, |b| b.points)
    }
}

//
// ─── ENGINE ────────────────────────────────────────────────────────────────────
//

/// Apply one completed attempt to a student record.
///
/// Awards answer points, updates the streak and last reading date together,
/// adds the bonus if the new streak is a positive multiple of
/// [`BONUS_EVERY`], then appends a history entry dated `today`.
///
/// A second same-day attempt still earns answer points and a history entry;
/// since the streak does not move, a bonus day pays out again.
pub fn record_attempt(
    record: &mut StudentRecord,
    title: &str,
    outcome: Outcome,
    today: NaiveDate,
) -> AttemptResult {
    let answer_points = if outcome.is_correct() {
        CORRECT_POINTS
    } else {
        0
    };
    record.add_points(answer_points);

    let (streak, transition) = next_streak(record.last_read_date(), record.streak(), today);
    record.set_streak(streak, today);

    let bonus = (streak > 0 && streak % BONUS_EVERY == 0).then_some(StreakBonus {
        streak,
        points: BONUS_POINTS,
    });
    if let Some(b) = bonus {
        record.add_points(b.points);
    }

    record.push_history(AttemptEntry::new(title, outcome, today));

    AttemptResult {
        outcome,
        transition,
        answer_points,
        bonus,
        streak,
        total_points: record.points(),
    }
}
