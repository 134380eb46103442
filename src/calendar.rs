//! Calendar arithmetic counted from the fixed epoch 0001-01-01 (a Monday).
//!
//! Weekdays are indexed 0 = Sunday .. 6 = Saturday and months are 0-based.

use crate::types::{DAYS_PER_WEEK, MonthSpec};

const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian rule: divisible by 4, except centuries unless divisible by 400.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 if is_leap_year(year) => 29,
        _ => MONTH_LENGTHS[month as usize],
    }
}

/// Days in `year` before the first of `month`.
fn days_before_month(year: i32, month: u32) -> i64 {
    (0..month).map(|m| i64::from(days_in_month(year, m))).sum()
}

/// Weekday of the first day of the month.
///
/// Counts every day since 0001-01-01, which is day 1 and therefore lands on
/// weekday 1 (Monday).
pub fn start_weekday(year: i32, month: u32) -> u32 {
    let y = i64::from(year) - 1;
    let leap_days = y / 4 + y / 400 - y / 100;
    let total = 1 + y * 365 + leap_days + days_before_month(year, month);
    total.rem_euclid(i64::from(DAYS_PER_WEEK)) as u32
}

/// Week number of the first day of the month.
///
/// Weeks start on Sunday and week 1 is the one containing January 1, so the
/// count restarts every year. Not ISO 8601.
pub fn start_week_number(year: i32, month: u32) -> u32 {
    let offset = i64::from(start_weekday(year, 0)) + days_before_month(year, month);
    1 + (offset / i64::from(DAYS_PER_WEEK)) as u32
}

/// Number of decimal digits in `n`; zero has none.
pub fn digit_count(mut n: u32) -> usize {
    let mut count = 0;
    while n != 0 {
        n /= 10;
        count += 1;
    }
    count
}

impl MonthSpec {
    pub fn days(self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    pub fn start_weekday(self) -> u32 {
        start_weekday(self.year(), self.month())
    }

    pub fn start_week_number(self) -> u32 {
        start_week_number(self.year(), self.month())
    }
}
