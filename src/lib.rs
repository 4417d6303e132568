//! # nthday
//!
//! A library for checking calendar dates against compact *occurrence
//! specifications* describing recurring relative dates, such as "the second
//! Monday of the month" or "the 42nd Friday of the year".
//!
//! ## Examples
//!
//! Check whether a date is the second Monday of its month:
//!
//! ```
//! use chrono::NaiveDate;
//! use nthday::prelude::*;
//!
//! let spec = Specification::parse("2#1", Mode::Month).unwrap();
//! let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
//! let derived = Specification::from_date(date, Mode::Month);
//!
//! assert!(derived.intersects(&spec));
//! assert_eq!(
//!     vec!["2nd Monday of the month (2#1)".to_string()],
//!     spec.friendly_strings(Mode::Month),
//! );
//! ```
//!
//! Specifications normalize on construction, so rendering one back out gives
//! a canonical, reparseable form:
//!
//! ```
//! use nthday::prelude::*;
//!
//! let spec = Specification::parse("3,1,3#2", Mode::Month).unwrap();
//! assert_eq!("1,3#2", spec.to_string());
//! ```
//!
//! ## Important Terms
//!
//! - **Specification**: A pair of sets — occurrence ordinals and weekday
//!   ordinals — describing all dates matching a recurring pattern. Written as
//!   `<occurrences>#<weekdays>`, e.g. `1,3#3` for the first and third
//!   Wednesdays. Modeled by the [`Specification`] struct.
//! - **Occurrence ordinal**: The 1-based index of the 7-day bucket a date
//!   falls into within its period, i.e. `ceil(day-in-period / 7)`. Days 1–7
//!   are the 1st occurrence, days 8–14 the 2nd, and so on.
//! - **Weekday ordinal**: A day of the week as an integer in `0..=6`, with
//!   0 = Sunday.
//! - **Mode**: Whether the period is the calendar [month](Mode::Month)
//!   (occurrence ordinals 1–5) or the calendar [year](Mode::Year) (1–53).
//!   Modeled by the [`Mode`] enum.
//!
//! Two specifications [match](Specification::intersects) when their
//! occurrence sets overlap *and* their weekday sets overlap. Deriving a
//! specification from a date always yields one element per set, so matching a
//! date against a user specification reduces to the same intersection test.
#![warn(missing_docs)]

mod error;
mod set;
mod spec;

pub use crate::error::SpecError;
pub use crate::spec::{Mode, Specification};

/// A convenience module appropriate for glob imports (`use nthday::prelude::*;`).
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::Mode;
    #[doc(no_inline)]
    pub use crate::SpecError;
    #[doc(no_inline)]
    pub use crate::Specification;
}
