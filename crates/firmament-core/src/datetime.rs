use crate::constants::{MAX_UTC_OFFSET_HOURS, SECONDS_PER_DAY, SECONDS_PER_HOUR};
use crate::date::{Date, Month};

/// A calendar date plus a time of day in seconds and a UTC offset in hours.
///
/// Time of day stays in [0, 86400). Adding time past midnight advances the
/// date as many days as needed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DateTime {
    date: Date,
    time: f32,
    utc_offset: f32,
}

impl DateTime {
    /// Build from parts. Out-of-range time resets to midnight and the
    /// offset is clamped to [-12, 12].
    pub fn new(date: Date, time_seconds: f32, utc_offset: f32) -> Self {
        let mut dt = Self {
            date,
            time: 0.0,
            utc_offset: 0.0,
        };
        dt.set_time(time_seconds);
        dt.set_utc_offset(utc_offset);
        dt
    }

    /// Build from a date and a decimal hour of the day.
    pub fn from_hours(date: Date, hours: f32, utc_offset: f32) -> Self {
        Self::new(date, hours * SECONDS_PER_HOUR, utc_offset)
    }

    /// Add seconds, rolling whole days into the date.
    ///
    /// The clock only runs forward: negative or non-finite deltas are
    /// logged and ignored.
    pub fn add_time(&mut self, seconds: f32) {
        if !seconds.is_finite() || seconds < 0.0 {
            log::warn!("Ignoring invalid time step of {seconds} s");
            return;
        }
        let total = self.time as f64 + seconds as f64;
        let days = (total / SECONDS_PER_DAY as f64).floor() as u64;
        for _ in 0..days {
            self.date.increment();
        }
        let rest = (total - days as f64 * SECONDS_PER_DAY as f64) as f32;
        self.time = if rest < SECONDS_PER_DAY { rest.max(0.0) } else { 0.0 };
    }

    /// Set the time of day in seconds. Values outside [0, 86400) reset to midnight.
    pub fn set_time(&mut self, seconds: f32) {
        self.time = if (0.0..SECONDS_PER_DAY).contains(&seconds) {
            seconds
        } else {
            0.0
        };
    }

    /// Set the time of day in decimal hours. Values outside [0, 24) reset to midnight.
    pub fn set_time_hours(&mut self, hours: f32) {
        self.set_time(hours * SECONDS_PER_HOUR);
    }

    /// Set the UTC offset in hours, clamped to [-12, 12].
    pub fn set_utc_offset(&mut self, offset: f32) {
        self.utc_offset = offset.clamp(-MAX_UTC_OFFSET_HOURS, MAX_UTC_OFFSET_HOURS);
    }

    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    pub fn set_ymd(&mut self, month: Month, day: u32, year: i32) {
        self.date.set_date(month, day, year);
    }

    pub fn set_day(&mut self, day: u32) {
        self.date.set_day(day);
    }

    pub fn set_month(&mut self, month: Month) {
        self.date.set_month(month);
    }

    pub fn set_year(&mut self, year: i32) {
        self.date.set_year(year);
    }

    pub fn date(&self) -> Date {
        self.date
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn day_of_year(&self) -> u32 {
        self.date.day_of_year()
    }

    /// Time of day in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Time of day in decimal hours.
    pub fn time_hours(&self) -> f32 {
        self.time / SECONDS_PER_HOUR
    }

    pub fn utc_offset(&self) -> f32 {
        self.utc_offset
    }
}
