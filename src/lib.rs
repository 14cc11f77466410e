//! Utilities for converting Gregorian dates into the Chinese lunisolar
//! calendar.
//!
//! The conversion is driven by packed per-year tables covering 1900–2100
//! (month lengths, leap months, and solar term dates), decoded once at first
//! use. Besides the lunar year, month and day, the crate derives the
//! sexagenary (stem-branch) names of year, month and day, the zodiac animal,
//! solar term boundaries, and the Western zodiac sign.
//!
//! # Examples
//!
//! Basic usage with [`Date`]:
//!
//! ```
//! use nongli::Date;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! assert_eq!(6, date.day_of_week()); // Saturday
//! assert_eq!(2451545, date.jdn());
//! ```
//!
//! Chinese lunisolar calendar:
//!
//! ```
//! use nongli::{Date, Lunar, LunarDate};
//! use nongli::lunar::Month::*;
//!
//! let date = Date::from_gregorian(2000, 1, 1).unwrap();
//!
//! let lunar = LunarDate::from_date(date).unwrap();
//! assert_eq!((1999, Common(11), 25), (lunar.year, lunar.month, lunar.day));
//!
//! let full = Lunar::from_date(date).unwrap();
//! assert_eq!("己卯年冬月廿五", full.to_string());
//! ```
//!
//! Dates the tables do not cover yield an error instead of a result:
//!
//! ```
//! use nongli::{Lunar, Unsupported};
//!
//! assert_eq!(
//!     Err(Unsupported::BeforeEpoch),
//!     Lunar::from_gregorian(1900, 1, 30),
//! );
//! ```
//!
//! # Planned features
//!
//! - Lunar-to-Gregorian inverse conversion
//! - Extending the year tables beyond 2100

pub mod date;
pub mod lunar;

pub use date::{Date, YearType};
pub use lunar::{Lunar, LunarDate, Unsupported};
