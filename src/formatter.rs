//! Calendar formatting: month headings, weekday labels and interleaved day grids.
//!
//! The `format_*` functions build the exact text that `print_year` and
//! `print_plan` write to stdout.

use unicode_width::UnicodeWidthStr;

use crate::calendar::digit_count;
use crate::error::{CalError, Result};
use crate::resolver::{RenderPlan, RowJob};
use crate::types::{
    BLANK_CELL, CalContext, DAYS_PER_WEEK, HEADING_WIDTH, LayoutConfig, MAX_BATCH_MONTHS,
    MONTH_GUTTER, MONTHS_PER_YEAR, MonthSpec, WEEKDAY_HEADER, YEAR_HEADING_WIDTH,
    YEAR_HEADING_WIDTH_WEEKS,
};

/// Left and right padding that centers `text` in `width` columns.
///
/// An odd leftover column goes to the right side.
fn center_padding(text: &str, width: usize) -> (usize, usize) {
    let total_padding = width.saturating_sub(text.width());
    let left_padding = total_padding / 2;
    (left_padding, total_padding - left_padding)
}

fn spaces(n: usize) -> String {
    " ".repeat(n)
}

/// Extra columns taken by the week-number prefix and the wider gutter.
fn week_pad(layout: LayoutConfig) -> usize {
    usize::from(layout.show_week_numbers)
}

/// Format the month title line for a batch, without the trailing newline.
pub fn format_heading(batch: &[MonthSpec], layout: LayoutConfig) -> String {
    let w = week_pad(layout);
    let mut line = String::new();

    for month in batch {
        let title = if layout.show_year_in_heading {
            format!("{} {}", month.name(), month.year())
        } else {
            month.name().to_string()
        };
        let (left, right) = center_padding(&title, HEADING_WIDTH);
        line.push_str(&spaces(left + w * BLANK_CELL.len()));
        line.push_str(&title);
        line.push_str(&spaces(right + MONTH_GUTTER + w));
    }

    line
}

/// Format the "Su Mo .." label line for `count` months, without the trailing newline.
pub fn format_weekday_labels(count: usize, layout: LayoutConfig) -> String {
    let w = week_pad(layout);
    let mut line = String::new();

    for _ in 0..count {
        if layout.show_week_numbers {
            line.push_str(BLANK_CELL);
        }
        line.push_str(WEEKDAY_HEADER);
        line.push_str(&spaces(MONTH_GUTTER + w));
    }

    line
}

/// Format one day cell: right-aligned number plus separator.
///
/// Only the number is emphasized so the cell keeps its width.
fn format_day(ctx: &CalContext, month: MonthSpec, day: u32) -> String {
    let is_today = ctx.today.year == month.year()
        && ctx.today.month == month.month()
        && ctx.today.day == day;
    let day_str = format!("{:>2}", day);

    if is_today {
        format!("{} ", ctx.emphasis.emphasize(&day_str))
    } else {
        format!("{} ", day_str)
    }
}

/// Running state of one month while its grid is interleaved with its neighbours.
#[derive(Debug)]
struct MonthCursor {
    month: MonthSpec,
    days: u32,
    next_day: u32,
    /// Blank cells still to emit before day 1; zero once they are out.
    leading_blanks: u32,
    next_week: u32,
}

impl MonthCursor {
    fn new(month: MonthSpec) -> Self {
        MonthCursor {
            month,
            days: month.days(),
            next_day: 1,
            leading_blanks: month.start_weekday(),
            next_week: month.start_week_number(),
        }
    }

    fn exhausted(&self) -> bool {
        self.next_day > self.days
    }
}

/// Format the day rows of a batch, one week-row of every month per output line.
///
/// Output stops right after the last day of the batch, then a single newline is
/// appended.
pub fn format_day_grid(ctx: &CalContext, batch: &[MonthSpec], layout: LayoutConfig) -> String {
    let mut out = String::new();
    if batch.is_empty() {
        return out;
    }

    let mut cursors: Vec<MonthCursor> = batch.iter().copied().map(MonthCursor::new).collect();
    let mut remaining: u32 = cursors.iter().map(|c| c.days).sum();
    let last = cursors.len() - 1;
    let gutter = spaces(1 + week_pad(layout));

    let mut col = 0;
    let mut pos = 0;

    while remaining > 0 {
        let cursor = &mut cursors[col];

        if layout.show_week_numbers && pos == 0 {
            if cursor.exhausted() {
                out.push_str(BLANK_CELL);
            } else {
                out.push_str(&format!("{:>2} ", cursor.next_week));
                cursor.next_week += 1;
            }
        }

        if cursor.leading_blanks > 0 {
            out.push_str(&BLANK_CELL.repeat(cursor.leading_blanks as usize));
            pos = cursor.leading_blanks;
            cursor.leading_blanks = 0;
        } else if cursor.exhausted() {
            out.push_str(&BLANK_CELL.repeat((DAYS_PER_WEEK - pos) as usize));
            pos = DAYS_PER_WEEK;
        } else {
            out.push_str(&format_day(ctx, cursor.month, cursor.next_day));
            cursor.next_day += 1;
            pos += 1;
            remaining -= 1;
        }

        if pos % DAYS_PER_WEEK == 0 {
            if col == last {
                out.push('\n');
                col = 0;
            } else {
                out.push_str(&gutter);
                col += 1;
            }
            pos = 0;
        }
    }

    out.push('\n');
    out
}

/// Format a batch of 1 to 3 months side by side: heading, labels, then days.
pub fn format_row(ctx: &CalContext, batch: &[MonthSpec], layout: LayoutConfig) -> Result<String> {
    if batch.is_empty() || batch.len() > MAX_BATCH_MONTHS {
        return Err(CalError::BatchSize(batch.len()));
    }

    let mut out = format_heading(batch, layout);
    out.push('\n');
    out.push_str(&format_weekday_labels(batch.len(), layout));
    out.push('\n');
    out.push_str(&format_day_grid(ctx, batch, layout));
    Ok(out)
}

/// Format all 12 months of a year under a centered year heading.
pub fn format_year(ctx: &CalContext, year: i32) -> Result<String> {
    let layout = ctx.layout(false);
    let heading_width = if layout.show_week_numbers {
        YEAR_HEADING_WIDTH_WEEKS
    } else {
        YEAR_HEADING_WIDTH
    };
    let digits = digit_count(year.unsigned_abs());

    let mut out = String::from("\n");
    out.push_str(&spaces(heading_width.saturating_sub(digits) / 2));
    out.push_str(&year.to_string());
    out.push_str("\n\n");

    // Group months into rows of 3
    for quarter in 0..MONTHS_PER_YEAR / 3 {
        let batch = (quarter * 3..quarter * 3 + 3)
            .map(|month| MonthSpec::new(year, month))
            .collect::<Result<Vec<_>>>()?;
        out.push_str(&format_row(ctx, &batch, layout)?);
        out.push('\n');
    }

    Ok(out)
}

fn format_job(ctx: &CalContext, job: &RowJob) -> Result<String> {
    let mut out = String::new();
    if job.leading_blank_line {
        out.push('\n');
    }
    out.push_str(&format_row(
        ctx,
        &job.batch,
        ctx.layout(job.show_year_in_heading),
    )?);
    Ok(out)
}

/// Format everything a resolved plan asks for, in order.
pub fn format_plan(ctx: &CalContext, plan: &RenderPlan) -> Result<String> {
    match plan {
        RenderPlan::Year(year) => format_year(ctx, *year),
        RenderPlan::Rows(jobs) => jobs.iter().map(|job| format_job(ctx, job)).collect(),
    }
}

/// Print all 12 months of a year.
pub fn print_year(ctx: &CalContext, year: i32) -> Result<()> {
    print!("{}", format_year(ctx, year)?);
    Ok(())
}

/// Print a resolved plan.
pub fn print_plan(ctx: &CalContext, plan: &RenderPlan) -> Result<()> {
    match plan {
        RenderPlan::Year(year) => print_year(ctx, *year),
        RenderPlan::Rows(jobs) => {
            for job in jobs {
                print!("{}", format_job(ctx, job)?);
            }
            Ok(())
        }
    }
}
