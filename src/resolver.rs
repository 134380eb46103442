//! Turns the requested (year, month, count) into the rows that get printed.

use crate::error::{CalError, Result};
use crate::types::{CalendarDate, MAX_BATCH_MONTHS, MONTHS_PER_YEAR, MonthSpec};

/// What the user asked for; `None` means "not given".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeRequest {
    pub year: Option<i32>,
    /// 0-based month.
    pub month: Option<u32>,
    pub count: Option<i32>,
    pub week_numbers: bool,
}

/// One side-by-side batch of months.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowJob {
    pub batch: Vec<MonthSpec>,
    pub show_year_in_heading: bool,
    /// Print an empty line before the batch.
    pub leading_blank_line: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPlan {
    /// Year heading followed by all four quarter rows.
    Year(i32),
    /// Month batches, top to bottom.
    Rows(Vec<RowJob>),
}

/// Resolve a request against `today`.
///
/// A year without a month, or a count of exactly 12, selects the full year
/// view. Otherwise the range starts at the given (or current) month and never
/// runs past December.
pub fn resolve(request: &RangeRequest, today: CalendarDate) -> Result<RenderPlan> {
    if let Some(year) = request.year
        && request.month.is_none()
    {
        return Ok(RenderPlan::Year(checked_year(year)?));
    }

    let year = checked_year(request.year.unwrap_or(today.year))?;
    let month = request.month.unwrap_or(today.month);
    if month >= MONTHS_PER_YEAR {
        return Err(CalError::MonthOutOfRange(i64::from(month)));
    }

    let requested = request.count.unwrap_or(0);
    if requested == 12 {
        return Ok(RenderPlan::Year(year));
    }

    let months_left = (MONTHS_PER_YEAR - month) as i32;
    let count = if requested > months_left {
        tracing::debug!(requested, months_left, "clamping month count to end of year");
        months_left
    } else if requested < 1 {
        1
    } else {
        requested
    };

    // The clamp above keeps the whole range inside `year`
    let months = (month..month + count as u32)
        .map(|m| MonthSpec::new(year, m))
        .collect::<Result<Vec<_>>>()?;

    let jobs = if months.len() > MAX_BATCH_MONTHS {
        months
            .chunks(MAX_BATCH_MONTHS)
            .map(|chunk| RowJob {
                batch: chunk.to_vec(),
                show_year_in_heading: false,
                leading_blank_line: true,
            })
            .collect()
    } else {
        vec![RowJob {
            show_year_in_heading: months.len() == 1,
            batch: months,
            leading_blank_line: false,
        }]
    };

    Ok(RenderPlan::Rows(jobs))
}

fn checked_year(year: i32) -> Result<i32> {
    if year < 1 {
        Err(CalError::YearOutOfRange(year))
    } else {
        Ok(year)
    }
}
