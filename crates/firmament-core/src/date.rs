//! Gregorian calendar date with a cached day-of-year.

use serde::{Deserialize, Serialize};

/// Calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Month for a 1-based number. Anything outside 1..=12 maps to January.
    pub fn from_number(number: i32) -> Self {
        if (1..=12).contains(&number) {
            Self::ALL[(number - 1) as usize]
        } else {
            Self::January
        }
    }

    /// 1-based month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    /// Parse a month name or common abbreviation, ignoring case.
    /// Unrecognized text maps to January.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "february" | "feb" => Self::February,
            "march" | "mar" => Self::March,
            "april" | "apr" => Self::April,
            "may" => Self::May,
            "june" | "jun" => Self::June,
            "july" | "jul" => Self::July,
            "august" | "aug" => Self::August,
            "september" | "sep" | "sept" => Self::September,
            "october" | "oct" => Self::October,
            "november" | "nov" => Self::November,
            "december" | "dec" => Self::December,
            _ => Self::January,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }

    /// The following month, wrapping December to January.
    pub fn next(self) -> Self {
        Self::ALL[(self as usize + 1) % 12]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cumulative days before each month in a common year.
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(month: Month, year: i32) -> u32 {
    match month {
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        Month::April | Month::June | Month::September | Month::November => 30,
        _ => 31,
    }
}

fn days_before_month(month: Month, year: i32) -> u32 {
    let before = DAYS_BEFORE_MONTH[month as usize];
    if month >= Month::March && is_leap_year(year) {
        before + 1
    } else {
        before
    }
}

/// 1-based day of the year.
pub fn calculate_day_of_year(month: Month, day: u32, year: i32) -> u32 {
    days_before_month(month, year) + day
}

/// A calendar date. The day is always valid for its month and the day of
/// year is kept in step with every change.
#[derive(Debug, Clone, Copy)]
pub struct Date {
    month: Month,
    day: u32,
    year: i32,
    day_of_year: u32,
}

impl Default for Date {
    /// January 1, 2000.
    fn default() -> Self {
        Self::new(Month::January, 1, 2000)
    }
}

impl PartialEq for Date {
    fn eq(&self, other: &Self) -> bool {
        self.month == other.month && self.day == other.day && self.year == other.year
    }
}

impl Eq for Date {}

impl Date {
    /// Build a date, clamping `day` into the month.
    pub fn new(month: Month, day: u32, year: i32) -> Self {
        let mut date = Self {
            month,
            day: 1,
            year,
            day_of_year: 1,
        };
        date.set_date(month, day, year);
        date
    }

    /// Replace all fields. The day is clamped to [1, days in month].
    pub fn set_date(&mut self, month: Month, day: u32, year: i32) {
        self.month = month;
        self.year = year;
        self.day = day.clamp(1, days_in_month(month, year));
        self.day_of_year = calculate_day_of_year(self.month, self.day, self.year);
    }

    pub fn set_day(&mut self, day: u32) {
        self.set_date(self.month, day, self.year);
    }

    pub fn set_month(&mut self, month: Month) {
        self.set_date(month, self.day, self.year);
    }

    pub fn set_year(&mut self, year: i32) {
        self.set_date(self.month, self.day, year);
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn day_of_year(&self) -> u32 {
        self.day_of_year
    }

    /// Days in this date's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.month, self.year)
    }

    /// Advance one day, rolling into the next month and year as needed.
    /// Returns the updated date.
    pub fn increment(&mut self) -> &mut Self {
        self.day += 1;
        self.day_of_year += 1;
        if self.day > days_in_month(self.month, self.year) {
            self.day = 1;
            if self.month == Month::December {
                self.year += 1;
                self.day_of_year = 1;
            }
            self.month = self.month.next();
        }
        self
    }

    /// Advance one day and return the date as it was before.
    pub fn post_increment(&mut self) -> Date {
        let previous = *self;
        self.increment();
        previous
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.month, self.day, self.year)
    }
}
