use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Calendar-month key rendered as `YYYY-MM`.
///
/// Ordering is chronological thanks to the `(year, month)` field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<MonthKey> {
        if (1..=12).contains(&month) {
            Some(MonthKey { year, month })
        } else {
            None
        }
    }

    /// Normalizes a date to its calendar month, dropping the day component.
    pub fn from_date(date: NaiveDate) -> MonthKey {
        MonthKey {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Next calendar month, stepped with explicit year/month arithmetic so a
    /// step never depends on the day of month.
    pub fn succ(&self) -> MonthKey {
        if self.month == 12 {
            MonthKey {
                year: self.year + 1,
                month: 1,
            }
        } else {
            MonthKey {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

/// Iterates every calendar month from `start` through `end`, inclusive.
/// Yields nothing when `end` precedes `start`.
pub fn months_inclusive(start: MonthKey, end: MonthKey) -> MonthRange {
    MonthRange { next: start, end }
}

#[derive(Debug, Clone)]
pub struct MonthRange {
    next: MonthKey,
    end: MonthKey,
}

impl Iterator for MonthRange {
    type Item = MonthKey;

    fn next(&mut self) -> Option<MonthKey> {
        if self.next > self.end {
            return None;
        }
        let current = self.next;
        self.next = current.succ();
        Some(current)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMonthKeyError(String);

impl fmt::Display for ParseMonthKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid month key: {}", self.0)
    }
}

impl std::error::Error for ParseMonthKeyError {}

impl FromStr for MonthKey {
    type Err = ParseMonthKeyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseMonthKeyError(value.to_string());
        let (year, month) = value.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        MonthKey::new(year, month).ok_or_else(invalid)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_and_parses_month_keys() {
        let key = MonthKey::new(2024, 3).unwrap();
        assert_eq!(key.to_string(), "2024-03");
        assert_eq!("2024-03".parse::<MonthKey>().unwrap(), key);
        assert!("2024-3".parse::<MonthKey>().is_err());
        assert!("2024-13".parse::<MonthKey>().is_err());
        assert!("202403".parse::<MonthKey>().is_err());
    }

    #[test]
    fn succ_rolls_over_december() {
        let december = MonthKey::new(2023, 12).unwrap();
        assert_eq!(december.succ(), MonthKey::new(2024, 1).unwrap());
    }

    #[test]
    fn normalization_ignores_day_of_month() {
        let late_january = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let key = MonthKey::from_date(late_january);
        assert_eq!(key, MonthKey::new(2024, 1).unwrap());
        assert_eq!(key.succ(), MonthKey::new(2024, 2).unwrap());
    }
}
