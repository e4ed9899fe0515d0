//! Calendar dates for content records.
//!
//! Content carries plain `YYYY-MM-DD` strings. Pages show them as
//! `Dec 15, 2024`.

use anyhow::{Result, bail};
use std::fmt;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A validated calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Date {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl Date {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse `YYYY-MM-DD`.
    pub fn parse(s: &str) -> Result<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            bail!("expected YYYY-MM-DD, got `{s}`");
        }

        let (Some(year), Some(month), Some(day)) = (
            parse_digits(&bytes[0..4]),
            parse_digits(&bytes[5..7]),
            parse_digits(&bytes[8..10]),
        ) else {
            bail!("expected YYYY-MM-DD, got `{s}`");
        };

        let date = Self::from_ymd(year, month as u8, day as u8);
        date.validate()?;
        Ok(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;
        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }
        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }
        Ok(())
    }

    #[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
    const fn is_leap_year(year: u16) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    const fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            _ => 28,
        }
    }

    /// `Dec 15, 2024`
    pub fn display_short(self) -> String {
        format!("{} {}, {}", MONTHS[(self.month - 1) as usize], self.day, self.year)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

fn parse_digits(bytes: &[u8]) -> Option<u16> {
    bytes.iter().try_fold(0u16, |acc, &b| {
        b.is_ascii_digit().then(|| acc * 10 + u16::from(b - b'0'))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let date = Date::parse("2024-12-15").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 12, 15));
        assert_eq!(date.display_short(), "Dec 15, 2024");
        assert_eq!(date.to_string(), "2024-12-15");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Date::parse("2024-13-01").is_err());
        assert!(Date::parse("2023-02-29").is_err());
        assert!(Date::parse("2024/01/01").is_err());
        assert!(Date::parse("24-01-01").is_err());
        assert!(Date::parse("2024-0a-01").is_err());
    }

    #[test]
    fn test_leap_year() {
        assert!(Date::parse("2024-02-29").is_ok());
        assert!(Date::parse("2000-02-29").is_ok());
        assert!(Date::parse("1900-02-29").is_err());
    }

    #[test]
    fn test_ordering() {
        assert!(Date::parse("2024-09-12").unwrap() < Date::parse("2024-10-05").unwrap());
    }
}
