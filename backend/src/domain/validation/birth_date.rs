//! Date-of-birth parsing and the minimum-age rule.

use std::fmt;
use std::sync::OnceLock;

use chrono::{Months, NaiveDate};
use regex::Regex;

/// Text layout accepted for birth dates.
pub const BIRTH_DATE_FORMAT: &str = "dd/mm/yyyy";

static BIRTH_DATE_RE: OnceLock<Regex> = OnceLock::new();

fn birth_date_regex() -> &'static Regex {
    BIRTH_DATE_RE.get_or_init(|| {
        Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$")
            .unwrap_or_else(|error| panic!("birth date regex failed to compile: {error}"))
    })
}

/// Reasons a birth date string could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDateError {
    /// Input does not follow `dd/mm/yyyy`.
    Malformed,
    /// Input has the right layout but names a day that does not exist.
    NoSuchDay,
}

impl fmt::Display for BirthDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => write!(f, "birth date must use the {BIRTH_DATE_FORMAT} format"),
            Self::NoSuchDay => write!(f, "birth date does not name a calendar day"),
        }
    }
}

impl std::error::Error for BirthDateError {}

/// Parse a `dd/mm/yyyy` string without any lenient rollover.
///
/// `31/02/2000` fails instead of becoming `02/03/2000`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use sanjibook::domain::validation::{BirthDateError, parse_birth_date};
///
/// assert_eq!(
///     parse_birth_date("29/02/2000"),
///     Ok(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap())
/// );
/// assert_eq!(parse_birth_date("31/02/2000"), Err(BirthDateError::NoSuchDay));
/// ```
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, BirthDateError> {
    let captures = birth_date_regex()
        .captures(raw)
        .ok_or(BirthDateError::Malformed)?;
    let component = |index: usize| -> Result<u32, BirthDateError> {
        captures
            .get(index)
            .and_then(|value| value.as_str().parse().ok())
            .ok_or(BirthDateError::Malformed)
    };
    let day = component(1)?;
    let month = component(2)?;
    let year = i32::try_from(component(3)?).map_err(|_| BirthDateError::Malformed)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(BirthDateError::NoSuchDay)
}

/// Latest birth date, exclusive, that still counts as `years` old on `today`.
///
/// Returns `None` when the subtraction leaves chrono's supported range.
/// February 29th clamps to February 28th in non-leap years.
pub fn adulthood_threshold(today: NaiveDate, years: u32) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(years.saturating_mul(12)))
}

/// Return `true` when `birth_date` is strictly before the threshold for `years`.
pub fn is_at_least(birth_date: NaiveDate, today: NaiveDate, years: u32) -> bool {
    adulthood_threshold(today, years).is_some_and(|threshold| birth_date < threshold)
}
