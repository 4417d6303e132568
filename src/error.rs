use crate::spec::Mode;

/// An error from parsing or validating an occurrence specification string.
///
/// All validation is eager: the first problem found is returned immediately
/// and no partially-built [`Specification`](crate::Specification) ever
/// escapes.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SpecError {
    /// The string does not match the `occ,..#day,..` grammar: digits and
    /// commas split into exactly two non-empty segments by a single `#`.
    #[error("invalid specification: wrong format: {text}")]
    MalformedSpecification {
        /// The offending specification string.
        text: String,
    },

    /// An occurrence ordinal fell outside the legal range for the active
    /// mode. A month holds at most 5 occurrences of a weekday; a year can
    /// hold up to 53.
    #[error(
        "invalid occurrence ordinal value in {mode} mode: {value} (allowed 1-{})",
        .mode.max_occurrence()
    )]
    OccurrenceOutOfRange {
        /// The rejected ordinal.
        value: u32,
        /// The mode whose range was violated.
        mode: Mode,
    },

    /// A weekday ordinal fell outside `0..=6` (0 = Sunday).
    #[error("invalid day of week ordinal value: {value} (allowed 0-6)")]
    WeekdayOutOfRange {
        /// The rejected ordinal.
        value: u32,
    },
}
