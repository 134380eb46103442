//! Type definitions and constants for calendar formatting.

use chrono::{Datelike, NaiveDate};

use crate::emphasis::Emphasis;
use crate::error::{CalError, Result};

/// A concrete day, used for "today" highlighting.
///
/// `month` is 0-based (0 = January) like every other month index in this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDate {
    pub day: u32,
    pub month: u32,
    pub year: i32,
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate {
            day: date.day(),
            month: date.month0(),
            year: date.year(),
        }
    }
}

/// One calendar page: a month of a year.
///
/// Only built through [`MonthSpec::new`], so the month always indexes the name
/// and length tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpec {
    year: i32,
    month: u32,
}

impl MonthSpec {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if year < 1 {
            return Err(CalError::YearOutOfRange(year));
        }
        if month >= MONTHS_PER_YEAR {
            return Err(CalError::MonthOutOfRange(i64::from(month)));
        }
        Ok(MonthSpec { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// 0-based month (0 = January).
    pub fn month(self) -> u32 {
        self.month
    }

    /// The month after this one, rolling over into January of the next year.
    ///
    /// `None` past December of `i32::MAX`.
    pub fn succ(self) -> Option<Self> {
        if self.month + 1 == MONTHS_PER_YEAR {
            Some(MonthSpec {
                year: self.year.checked_add(1)?,
                month: 0,
            })
        } else {
            Some(MonthSpec {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.month as usize]
    }
}

/// Per-row layout switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutConfig {
    /// Prefix each week-row with its week number.
    pub show_week_numbers: bool,
    /// Render "Month Year" instead of "Month" in the heading.
    pub show_year_in_heading: bool,
}

/// Process-wide rendering context, built once per run.
#[derive(Debug)]
pub struct CalContext {
    /// Today's date for highlighting.
    pub today: CalendarDate,
    /// Whether to display week numbers.
    pub week_numbers: bool,
    /// How the current day is made to stand out.
    pub emphasis: Box<dyn Emphasis>,
}

impl CalContext {
    /// Layout used for a row batch under this context.
    pub fn layout(&self, show_year_in_heading: bool) -> LayoutConfig {
        LayoutConfig {
            show_week_numbers: self.week_numbers,
            show_year_in_heading,
        }
    }
}

pub const MONTHS_PER_YEAR: u32 = 12;
pub const DAYS_PER_WEEK: u32 = 7;
pub const MAX_BATCH_MONTHS: usize = 3;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_HEADER: &str = "Su Mo Tu We Th Fr Sa";

// Constants for calendar formatting
pub const HEADING_WIDTH: usize = 20;
pub const BLANK_CELL: &str = "   ";
pub const MONTH_GUTTER: usize = 2;
pub const YEAR_HEADING_WIDTH: usize = 64;
pub const YEAR_HEADING_WIDTH_WEEKS: usize = 78;

// ANSI color codes
pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_INVERSE: &str = "\x1b[30m\x1b[47m";
