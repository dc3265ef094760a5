//! Time units and decay times

// standard library
use std::str::FromStr;

// external crates
use chrono::NaiveDateTime;
use nom::combinator::all_consuming;
use serde::{Deserialize, Serialize};

// ndecay modules
use ndecay_format::f;

// internal modules
use crate::error::{Error, Result};
use crate::parsers::decay_time;

/// Seconds in a Julian year of 365.25 days
const SECONDS_PER_YEAR: u64 = 31_557_600;

/// Units for decay times and half-lives
///
/// Each unit has a single letter code (`Y`, `D`, `H`, `M`, `S`) and converts
/// to seconds with an exact integer multiplier. Years are Julian years of
/// 365.25 days and are not calendar aware.
///
/// Units are parsed from the codes, or the singular and plural names in any
/// case.
///
/// ```rust
/// # use ndecay_nuclide::TimeUnit;
/// # use std::str::FromStr;
/// assert_eq!(TimeUnit::from_str("Y").unwrap(), TimeUnit::Years);
/// assert_eq!(TimeUnit::from_str("hours").unwrap(), TimeUnit::Hours);
/// assert_eq!(TimeUnit::from_str("Minute").unwrap(), TimeUnit::Minutes);
///
/// assert_eq!(TimeUnit::Days.seconds(), 86_400);
/// assert_eq!(TimeUnit::Years.seconds(), 31_557_600);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeUnit {
    /// Julian years, `Y`
    Years,
    /// Days, `D`
    Days,
    /// Hours, `H`
    Hours,
    /// Minutes, `M`
    Minutes,
    /// Seconds, `S`
    #[default]
    Seconds,
}

impl TimeUnit {
    /// Exact number of seconds in one unit
    pub fn seconds(&self) -> u64 {
        match self {
            TimeUnit::Years => SECONDS_PER_YEAR,
            TimeUnit::Days => 86_400,
            TimeUnit::Hours => 3_600,
            TimeUnit::Minutes => 60,
            TimeUnit::Seconds => 1,
        }
    }

    /// Single letter code for the unit
    ///
    /// ```rust
    /// # use ndecay_nuclide::TimeUnit;
    /// assert_eq!(TimeUnit::Minutes.code(), 'M');
    /// ```
    pub fn code(&self) -> char {
        match self {
            TimeUnit::Years => 'Y',
            TimeUnit::Days => 'D',
            TimeUnit::Hours => 'H',
            TimeUnit::Minutes => 'M',
            TimeUnit::Seconds => 'S',
        }
    }
}

impl FromStr for TimeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "y" | "yr" | "yrs" | "year" | "years" => Ok(TimeUnit::Years),
            "d" | "day" | "days" => Ok(TimeUnit::Days),
            "h" | "hr" | "hrs" | "hour" | "hours" => Ok(TimeUnit::Hours),
            "m" | "min" | "mins" | "minute" | "minutes" => Ok(TimeUnit::Minutes),
            "s" | "sec" | "secs" | "second" | "seconds" => Ok(TimeUnit::Seconds),
            _ => Err(Error::UnknownTimeUnit {
                hint: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TimeUnit {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        TimeUnit::from_str(&value)
    }
}

impl From<TimeUnit> for String {
    fn from(unit: TimeUnit) -> Self {
        unit.to_string()
    }
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            TimeUnit::Years => "years",
            TimeUnit::Days => "days",
            TimeUnit::Hours => "hours",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Seconds => "seconds",
        };
        write!(f, "{name}")
    }
}

/// Elapsed decay time as a whole number of some [TimeUnit]
///
/// A decay time can be created directly, parsed from a string, or taken as
/// the number of whole days between two dates.
///
/// ```rust
/// # use ndecay_nuclide::{DecayTime, TimeUnit};
/// # use std::str::FromStr;
/// let time = DecayTime::from_str("10 y").unwrap();
/// assert_eq!(time, DecayTime::new(10, TimeUnit::Years));
/// assert_eq!(time.to_seconds().unwrap(), 315_576_000);
///
/// // units may be written out in full and without a space
/// assert_eq!(
///     DecayTime::from_str("3days").unwrap(),
///     DecayTime::new(3, TimeUnit::Days)
/// );
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecayTime {
    /// Number of units elapsed
    pub value: u64,
    /// Unit of the elapsed time
    pub unit: TimeUnit,
}

impl DecayTime {
    /// New decay time of `value` units
    pub fn new(value: u64, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Whole days elapsed between two dates
    ///
    /// Partial days are truncated, so 36 hours is a single day.
    ///
    /// ```rust
    /// # use ndecay_nuclide::{DecayTime, TimeUnit};
    /// # use chrono::NaiveDate;
    /// let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap();
    ///
    /// let time = DecayTime::between(start, end).unwrap();
    /// assert_eq!(time, DecayTime::new(366, TimeUnit::Days));
    ///
    /// // the end date must not be before the start
    /// assert!(DecayTime::between(end, start).is_err());
    /// ```
    pub fn between(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        let days = (end - start).num_days();
        let value = u64::try_from(days).map_err(|_| Error::NegativeDecayTime { days })?;
        Ok(Self::new(value, TimeUnit::Days))
    }

    /// Exact conversion to seconds
    pub fn to_seconds(&self) -> Result<u64> {
        self.value
            .checked_mul(self.unit.seconds())
            .ok_or(Error::DecayTimeOverflow {
                value: self.value,
                unit: self.unit,
            })
    }
}

impl FromStr for DecayTime {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (_, (value, unit)) = all_consuming(decay_time)(s)
            .map_err(|_| Error::ParseError(f!("could not extract a decay time from \"{s}\"")))?;

        Ok(Self::new(value, TimeUnit::from_str(unit)?))
    }
}

impl std::fmt::Display for DecayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TimeUnit::Years, 'Y')]
    #[case(TimeUnit::Days, 'D')]
    #[case(TimeUnit::Hours, 'H')]
    #[case(TimeUnit::Minutes, 'M')]
    #[case(TimeUnit::Seconds, 'S')]
    fn units_round_trip_through_codes(#[case] unit: TimeUnit, #[case] code: char) {
        assert_eq!(unit.code(), code);
        assert_eq!(TimeUnit::from_str(&code.to_string()).unwrap(), unit);
        assert_eq!(TimeUnit::from_str(&unit.to_string()).unwrap(), unit);
    }

    #[test]
    fn unknown_unit() {
        assert!(matches!(
            TimeUnit::from_str("fortnight"),
            Err(Error::UnknownTimeUnit { hint }) if hint == "fortnight"
        ));
    }

    #[test]
    fn year_is_julian() {
        assert_eq!(TimeUnit::Years.seconds(), 86_400 * 36_525 / 100);
    }

    #[rstest]
    #[case("1 y", 1, TimeUnit::Years)]
    #[case("25 Years", 25, TimeUnit::Years)]
    #[case("3d", 3, TimeUnit::Days)]
    #[case("  12 hours ", 12, TimeUnit::Hours)]
    #[case("90 M", 90, TimeUnit::Minutes)]
    #[case("0 s", 0, TimeUnit::Seconds)]
    fn parse_decay_times(#[case] input: &str, #[case] value: u64, #[case] unit: TimeUnit) {
        assert_eq!(DecayTime::from_str(input).unwrap(), DecayTime::new(value, unit));
    }

    #[rstest]
    #[case("")]
    #[case("y")]
    #[case("-3 d")]
    #[case("1.5 d")]
    #[case("3 d 4 h")]
    fn reject_bad_decay_times(#[case] input: &str) {
        assert!(matches!(
            DecayTime::from_str(input),
            Err(Error::ParseError(_))
        ));
    }

    #[test]
    fn reject_unknown_units_in_decay_time() {
        assert!(matches!(
            DecayTime::from_str("3 weeks"),
            Err(Error::UnknownTimeUnit { .. })
        ));
    }

    #[test]
    fn days_and_seconds_agree() {
        let days = DecayTime::new(7, TimeUnit::Days).to_seconds().unwrap();
        let seconds = DecayTime::new(7 * 86_400, TimeUnit::Seconds)
            .to_seconds()
            .unwrap();
        assert_eq!(days, seconds);
    }

    #[test]
    fn overflow_is_reported() {
        let time = DecayTime::new(u64::MAX, TimeUnit::Years);
        assert!(matches!(
            time.to_seconds(),
            Err(Error::DecayTimeOverflow { unit: TimeUnit::Years, .. })
        ));
    }

    #[test]
    fn serialise_as_names() {
        let json = serde_json::to_string(&DecayTime::new(5, TimeUnit::Hours)).unwrap();
        assert_eq!(json, r#"{"value":5,"unit":"hours"}"#);

        let time: DecayTime = serde_json::from_str(r#"{"value":2,"unit":"Y"}"#).unwrap();
        assert_eq!(time, DecayTime::new(2, TimeUnit::Years));
    }
}
