//! Exercise records and the per-user exercise log.

use std::fmt;

use chrono::NaiveDate;
use uuid::Uuid;

use super::{User, UserId};

/// Validation errors returned by the exercise field constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExerciseValidationError {
    #[error("description must not be empty")]
    EmptyDescription,
    #[error("duration must be a positive whole number of minutes, got {value}")]
    NonPositiveDuration { value: i64 },
    #[error("duration of {value} minutes exceeds the supported maximum")]
    DurationTooLarge { value: i64 },
}

/// Opaque exercise identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text description of the activity, stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    /// Validate and construct a [`Description`].
    pub fn new(description: impl AsRef<str>) -> Result<Self, ExerciseValidationError> {
        let trimmed = description.as_ref().trim();
        if trimmed.is_empty() {
            return Err(ExerciseValidationError::EmptyDescription);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Exercise duration in whole minutes.
///
/// ## Invariants
/// - `1 <= minutes <= i32::MAX`, so the value always fits a 32-bit SQL integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DurationMinutes(u32);

impl DurationMinutes {
    /// Largest accepted duration.
    pub const MAX: u32 = i32::MAX.unsigned_abs();

    /// Number of minutes.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for DurationMinutes {
    type Error = ExerciseValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(ExerciseValidationError::NonPositiveDuration { value });
        }
        u32::try_from(value)
            .ok()
            .filter(|minutes| *minutes <= Self::MAX)
            .map(Self)
            .ok_or(ExerciseValidationError::DurationTooLarge { value })
    }
}

/// A single recorded activity owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseId,
    pub user_id: UserId,
    pub description: Description,
    pub duration: DurationMinutes,
    pub date: NaiveDate,
}

impl Exercise {
    /// Record a new exercise for `user_id` with a fresh identifier.
    pub fn record(
        user_id: UserId,
        description: Description,
        duration: DurationMinutes,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExerciseId::random(),
            user_id,
            description,
            duration,
            date,
        }
    }
}

/// Date range and size constraints applied when reading a user's log.
///
/// Both bounds are inclusive. Stores return matching entries sorted
/// ascending by date and truncate to `limit` after sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

impl LogFilter {
    /// Whether `date` falls inside the configured bounds.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use exercise_tracker::domain::LogFilter;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).expect("valid date");
    /// let filter = LogFilter { from: Some(day(2)), to: Some(day(3)), limit: None };
    /// assert!(!filter.admits(day(1)));
    /// assert!(filter.admits(day(2)));
    /// assert!(filter.admits(day(3)));
    /// assert!(!filter.admits(day(4)));
    /// ```
    pub fn admits(&self, date: NaiveDate) -> bool {
        self.from.is_none_or(|from| date >= from) && self.to.is_none_or(|to| date <= to)
    }
}

/// A user's exercises after filtering, sorting, and limiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLog {
    pub user: User,
    pub entries: Vec<Exercise>,
}

impl ExerciseLog {
    /// Number of entries returned.
    pub fn count(&self) -> usize {
        self.entries.len()
    }
}

/// Render a calendar date without time of day, e.g. `Mon Jan 01 2024`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use exercise_tracker::domain::format_calendar_date;
///
/// let date = NaiveDate::from_ymd_opt(1990, 1, 1).expect("valid date");
/// assert_eq!(format_calendar_date(date), "Mon Jan 01 1990");
/// ```
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-5)]
    fn duration_rejects_non_positive(#[case] value: i64) {
        assert_eq!(
            DurationMinutes::try_from(value),
            Err(ExerciseValidationError::NonPositiveDuration { value })
        );
    }

    #[rstest]
    fn duration_rejects_values_beyond_sql_integer() {
        let value = i64::from(i32::MAX) + 1;
        assert_eq!(
            DurationMinutes::try_from(value),
            Err(ExerciseValidationError::DurationTooLarge { value })
        );
    }

    #[rstest]
    fn duration_accepts_upper_bound() {
        let minutes = DurationMinutes::try_from(i64::from(i32::MAX)).expect("fits");
        assert_eq!(minutes.get(), DurationMinutes::MAX);
    }

    #[rstest]
    fn description_is_trimmed() {
        let description = Description::new("  pushups \n").expect("valid description");
        assert_eq!(description.as_ref(), "pushups");
    }

    #[rstest]
    fn unbounded_filter_admits_everything() {
        assert!(LogFilter::default().admits(NaiveDate::MIN));
        assert!(LogFilter::default().admits(NaiveDate::MAX));
    }

    #[rstest]
    #[case(2024, 2, 29, "Thu Feb 29 2024")]
    #[case(2023, 12, 31, "Sun Dec 31 2023")]
    fn calendar_date_has_no_time_component(
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
        #[case] expected: &str,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        assert_eq!(format_calendar_date(date), expected);
    }
}
