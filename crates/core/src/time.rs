use chrono::{Days, Local, NaiveDate};

/// A simple clock abstraction for deterministic dates in services and tests.
///
/// Streak rules only care about calendar days, so the clock hands out a
/// `NaiveDate` in the local timezone rather than a full timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDate),
}

impl Clock {
    /// Returns a clock that uses the current local date.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given date.
    #[must_use]
    pub fn fixed(on: NaiveDate) -> Self {
        Self::Fixed(on)
    }

    /// Returns today's date according to the clock.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::Default => Local::now().date_naive(),
            Clock::Fixed(d) => *d,
        }
    }

    /// If this is a fixed clock, advance it by the given number of days.
    ///
    /// Has no effect on `Clock::Default`.
    pub fn advance_days(&mut self, days: u64) {
        if let Clock::Fixed(d) = self {
            if let Some(next) = d.checked_add_days(Days::new(days)) {
                *d = next;
            }
        }
    }
}

/// Deterministic date for tests and examples (2024-01-01).
pub const FIXED_TEST_DATE: (i32, u32, u32) = (2024, 1, 1);

/// Returns a deterministic `NaiveDate` for tests and doc examples.
///
/// # Panics
///
/// Panics if the fixed date cannot be represented.
#[must_use]
pub fn fixed_today() -> NaiveDate {
    let (y, m, d) = FIXED_TEST_DATE;
    NaiveDate::from_ymd_opt(y, m, d).expect("fixed date should be valid")
}

/// Returns a `Clock` fixed at the deterministic test date.
#[must_use]
pub fn fixed_clock() -> Clock {
    Clock::fixed(fixed_today())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_advances_by_whole_days() {
        let mut clock = fixed_clock();
        clock.advance_days(9);
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn default_clock_ignores_advance() {
        let mut clock = Clock::default_clock();
        clock.advance_days(3);
        assert!(matches!(clock, Clock::Default));
    }
}
