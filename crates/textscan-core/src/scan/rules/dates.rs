//! Calendar date validation.

use chrono::{Datelike, NaiveDate};

/// Field order of a numeric date format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    DayMonthYear,
    YearMonthDay,
}

/// A numeric date format such as `D/M/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    pub order: DateOrder,
    pub separator: char,
    /// Exact number of year digits, 4 or 2.
    pub year_digits: usize,
}

impl DateFormat {
    const fn new(order: DateOrder, separator: char, year_digits: usize) -> Self {
        Self {
            order,
            separator,
            year_digits,
        }
    }

    /// Parse `s` in this format into a real calendar date.
    ///
    /// Day and month take one or two digits; the year takes exactly
    /// `year_digits` digits.
    pub fn parse(&self, s: &str) -> Option<NaiveDate> {
        let mut parts = s.split(self.separator);
        let (first, second, third) = (parts.next()?, parts.next()?, parts.next()?);
        if parts.next().is_some() {
            return None;
        }

        let (year, month, day) = match self.order {
            DateOrder::DayMonthYear => (third, second, first),
            DateOrder::YearMonthDay => (first, second, third),
        };

        if year.len() != self.year_digits || !is_digits(year) {
            return None;
        }
        let month = parse_short(month)?;
        let day = parse_short(day)?;

        let year: i32 = year.parse().ok()?;
        let year = if self.year_digits == 2 {
            expand_two_digit_year(year)
        } else {
            year
        };

        NaiveDate::from_ymd_opt(year, month, day).filter(|d| d.year() >= 1)
    }
}

/// Formats tried in order; the first that yields a real date wins.
pub const DATE_FORMATS: [DateFormat; 5] = [
    DateFormat::new(DateOrder::DayMonthYear, '/', 4),
    DateFormat::new(DateOrder::YearMonthDay, '-', 4),
    DateFormat::new(DateOrder::DayMonthYear, '-', 4),
    DateFormat::new(DateOrder::DayMonthYear, '/', 2),
    DateFormat::new(DateOrder::YearMonthDay, '/', 4),
];

/// Parse a date string against [`DATE_FORMATS`].
///
/// Strings mixing `/` and `-` are ambiguous and always rejected.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    if s.contains('/') && s.contains('-') {
        return None;
    }

    DATE_FORMATS.iter().find_map(|format| format.parse(s))
}

/// Check whether a string denotes a real calendar date.
pub fn validate_date(s: &str) -> bool {
    parse_date(s).is_some()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_short(s: &str) -> Option<u32> {
    if (1..=2).contains(&s.len()) && is_digits(s) {
        s.parse().ok()
    } else {
        None
    }
}

fn expand_two_digit_year(year: i32) -> i32 {
    // 69-99 -> 1969-1999, 00-68 -> 2000-2068
    if year >= 69 { 1900 + year } else { 2000 + year }
}
