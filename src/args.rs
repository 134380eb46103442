//! Command-line argument parsing using clap.
//!
//! Numeric values are taken as text and parsed leniently: anything that is not
//! an integer counts as 0.

use clap::{CommandFactory, Parser};

use crate::emphasis;
use crate::resolver::RangeRequest;
use crate::types::CalContext;

#[derive(Parser, Debug)]
#[command(name = "gridcal")]
#[command(about = "Displays a calendar of one or more months", long_about = None)]
#[command(after_help = HELP_MESSAGE)]
#[command(args_override_self = true)]
pub struct Args {
    /// Year to print (whole year if -m is not given).
    #[arg(short = 'y', value_name = "num", allow_negative_numbers = true)]
    pub year: Option<String>,

    /// Month to print, 0-based (January = 0).
    #[arg(short = 'm', value_name = "num", allow_negative_numbers = true)]
    pub month: Option<String>,

    /// Number of months to print, stopping at December.
    #[arg(short = 'n', value_name = "num", allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Print week numbers.
    #[arg(short = 'w')]
    pub week_numbers: bool,
}

/// Help message displayed with -h.
const HELP_MESSAGE: &str = "Without any arguments, display the current month.

Notes:
  -n stops at the end of the year and starts from the current month
     when -m is not given; -n 12 always shows the whole year.
  Week numbers start on Sunday with week 1 containing January 1.

Examples:
  gridcal                Display current month
  gridcal -y 2026        Display year 2026
  gridcal -y 2026 -m 1   Display February 2026
  gridcal -n 3 -w        Display three months with week numbers";

impl Args {
    /// Translate the raw flags into a range request.
    ///
    /// A year below 1, a negative month and a count of 0 all mean "not given".
    pub fn to_request(&self) -> RangeRequest {
        let year = self.year.as_deref().map(parse_or_zero).filter(|&y| y >= 1);
        let month = self
            .month
            .as_deref()
            .map(parse_or_zero)
            .and_then(|m| u32::try_from(m).ok());
        let count = self.count.as_deref().map(parse_or_zero).filter(|&n| n != 0);

        RangeRequest {
            year,
            month,
            count,
            week_numbers: self.week_numbers,
        }
    }
}

/// Parse an integer, falling back to 0.
pub fn parse_or_zero(s: &str) -> i32 {
    s.trim().parse().unwrap_or(0)
}

/// Print the usage text to stdout.
pub fn print_help() {
    println!("{}", Args::command().render_help());
}

impl CalContext {
    pub fn new(args: &Args) -> Self {
        CalContext {
            today: get_today_date().into(),
            week_numbers: args.week_numbers,
            emphasis: emphasis::from_env(),
        }
    }
}

/// Get today's date, respecting CAL_TEST_TIME environment variable for testing.
pub fn get_today_date() -> chrono::NaiveDate {
    if let Ok(test_time) = std::env::var("CAL_TEST_TIME")
        && let Ok(date) = chrono::NaiveDate::parse_from_str(&test_time, "%Y-%m-%d")
    {
        return date;
    }
    chrono::Local::now().date_naive()
}
