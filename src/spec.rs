use std::fmt::{self, Display};
use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use crate::error::SpecError;
use crate::set::OrdinalSet;

// Structural pre-checks. Rejecting malformed input up front keeps the numeric
// parsing below free of partial-parse states: by the time we split on `#` and
// `,`, every token is a bare run of digits.
static MONTH_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d(,\d)*#\d(,\d)*$").expect("month pattern compiles"));
static YEAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}(,\d{1,2})*#\d(,\d)*$").expect("year pattern compiles"));

static WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Suffix for an occurrence ordinal in friendly output, keyed off the final
/// digit only. 11, 12, and 13 therefore render as `11st`, `12nd`, and `13rd`.
fn ordinal_suffix(value: u32) -> &'static str {
    match value % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// The period an occurrence ordinal counts within.
///
/// The mode determines the legal upper bound for occurrence ordinals: a month
/// holds at most 5 occurrences of any weekday, while a year can hold up to 53.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Occurrences count within a calendar month.
    Month,
    /// Occurrences count within a calendar year.
    Year,
}

impl Mode {
    /// Returns the largest legal occurrence ordinal for this mode.
    pub fn max_occurrence(&self) -> u32 {
        match self {
            Mode::Month => 5,
            Mode::Year => 53,
        }
    }

    /// Returns the period noun used in friendly output ("month" or "year").
    pub fn period_name(&self) -> &'static str {
        match self {
            Mode::Month => "month",
            Mode::Year => "year",
        }
    }

    fn pattern(&self) -> &'static Regex {
        match self {
            Mode::Month => &MONTH_PATTERN,
            Mode::Year => &YEAR_PATTERN,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.period_name())
    }
}

/// A recurrence rule over relative dates, such as "the second Monday of the
/// month" (`2#1`) or "the 42nd Friday of the year" (`42#5`).
///
/// A `Specification` is a pair of sets: occurrence ordinals (which 7-day
/// bucket of the period a date falls in) and weekday ordinals (0 = Sunday
/// through 6 = Saturday). It is immutable once constructed, either by
/// [parsing](Specification::parse) a specification string or by
/// [deriving](Specification::from_date) the one implied by a concrete date.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use nthday::{Mode, Specification};
///
/// let spec = Specification::parse("2#1", Mode::Month).unwrap();
/// let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(); // 2nd Monday
/// assert!(Specification::from_date(date, Mode::Month).intersects(&spec));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specification {
    occurrences: OrdinalSet,
    days_of_week: OrdinalSet,
}

impl Specification {
    /// Parses a specification string in the form
    /// `<occurrence>(,<occurrence>)*#<weekday>(,<weekday>)*` and validates
    /// every ordinal against the ranges for `mode`. Duplicate ordinals
    /// collapse; ordering in the input is irrelevant.
    ///
    /// # Errors
    ///
    /// - [`SpecError::MalformedSpecification`] if the string does not match
    ///   the digit-comma grammar with exactly one `#`.
    /// - [`SpecError::OccurrenceOutOfRange`] if an occurrence ordinal is 0 or
    ///   exceeds [`Mode::max_occurrence`].
    /// - [`SpecError::WeekdayOutOfRange`] if a weekday ordinal exceeds 6.
    pub fn parse(text: &str, mode: Mode) -> Result<Self, SpecError> {
        if !mode.pattern().is_match(text) {
            return Err(SpecError::MalformedSpecification {
                text: text.to_owned(),
            });
        }

        let (occurrence_part, weekday_part) =
            text.split_once('#')
                .ok_or_else(|| SpecError::MalformedSpecification {
                    text: text.to_owned(),
                })?;

        let mut occurrences = OrdinalSet::new();
        for ordinal in parse_ordinals(occurrence_part, text)? {
            if ordinal < 1 || ordinal > mode.max_occurrence() {
                return Err(SpecError::OccurrenceOutOfRange {
                    value: ordinal,
                    mode,
                });
            }
            occurrences.insert(ordinal);
        }

        let mut days_of_week = OrdinalSet::new();
        for ordinal in parse_ordinals(weekday_part, text)? {
            if ordinal > 6 {
                return Err(SpecError::WeekdayOutOfRange { value: ordinal });
            }
            days_of_week.insert(ordinal);
        }

        Ok(Self {
            occurrences,
            days_of_week,
        })
    }

    /// Checks a specification string without constructing anything. Used for
    /// argument-level rejection before any date work begins.
    ///
    /// # Errors
    ///
    /// Same as [`Specification::parse`].
    pub fn validate(text: &str, mode: Mode) -> Result<(), SpecError> {
        Self::parse(text, mode).map(|_| ())
    }

    /// Derives the specification a concrete date implies: exactly one
    /// occurrence ordinal (`ceil(day / 7)`, where `day` is the day of the
    /// month or — leap-year aware — the day of the year, per `mode`) and
    /// exactly one weekday ordinal.
    ///
    /// Same date and mode always produce the same result.
    pub fn from_date(date: NaiveDate, mode: Mode) -> Self {
        let day = match mode {
            Mode::Month => date.day(),
            Mode::Year => date.ordinal(),
        };

        let mut occurrences = OrdinalSet::new();
        occurrences.insert(day.div_ceil(7));

        let mut days_of_week = OrdinalSet::new();
        days_of_week.insert(date.weekday().num_days_from_sunday());

        Self {
            occurrences,
            days_of_week,
        }
    }

    /// Returns true if `self` and `other` can describe the same date: the two
    /// occurrence sets overlap *and* the two weekday sets overlap. Symmetric.
    pub fn intersects(&self, other: &Self) -> bool {
        self.occurrences.intersects(&other.occurrences)
            && self.days_of_week.intersects(&other.days_of_week)
    }

    /// Iterates the occurrence ordinals in ascending order.
    pub fn occurrences(&self) -> impl Iterator<Item = u32> + '_ {
        self.occurrences.iter()
    }

    /// Iterates the weekday ordinals in ascending order.
    pub fn days_of_week(&self) -> impl Iterator<Item = u32> + '_ {
        self.days_of_week.iter()
    }

    /// Renders one human-readable phrase per (occurrence, weekday) pair,
    /// occurrences ascending, such as `2nd Monday of the month (2#1)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nthday::{Mode, Specification};
    ///
    /// let spec = Specification::parse("2#1", Mode::Month).unwrap();
    /// assert_eq!(
    ///     vec!["2nd Monday of the month (2#1)".to_string()],
    ///     spec.friendly_strings(Mode::Month),
    /// );
    /// ```
    pub fn friendly_strings(&self, mode: Mode) -> Vec<String> {
        let mut results = Vec::new();
        for occurrence in self.occurrences.iter() {
            let suffix = ordinal_suffix(occurrence);
            for day in self.days_of_week.iter() {
                results.push(format!(
                    "{occurrence}{suffix} {} of the {} ({occurrence}#{day})",
                    WEEKDAY_NAMES[day as usize],
                    mode.period_name(),
                ));
            }
        }
        results
    }
}

/// The canonical form: both sides ascending and deduplicated, so
/// `parse("3,1,3#2", mode).to_string()` is `"1,3#2"`. Reparsing the canonical
/// form yields an equal `Specification`.
impl Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(set: &OrdinalSet) -> String {
            set.iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(",")
        }

        write!(f, "{}#{}", join(&self.occurrences), join(&self.days_of_week))
    }
}

fn parse_ordinals(part: &str, whole: &str) -> Result<Vec<u32>, SpecError> {
    part.split(',')
        .map(|token| {
            token
                .parse::<u32>()
                .map_err(|_| SpecError::MalformedSpecification {
                    text: whole.to_owned(),
                })
        })
        .collect()
}
