//! Calendar grid builder: maps a reference date onto the month or week grid
//! shown by the `calendar` command, with the assignments due on each day.
//!
//! Weeks start on Sunday (weekday index 0 = Sun … 6 = Sat).
//! All functions are pure: the display timezone is passed in explicitly and
//! the record slice is only borrowed.

use crate::errors::{AppError, AppResult};
use crate::models::Assignment;
use chrono::{Datelike, Days, Months, NaiveDate, TimeZone};
use clap::ValueEnum;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    Month,
    Week,
}

/// One slot of a rendered grid.
///
/// `day` is `None` for the lead-in padding of a month grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell<'a> {
    pub day: Option<NaiveDate>,
    pub records: Vec<&'a Assignment>,
}

impl<'a> Cell<'a> {
    fn padding() -> Self {
        Self {
            day: None,
            records: Vec::new(),
        }
    }

    pub fn is_padding(&self) -> bool {
        self.day.is_none()
    }
}

fn out_of_range(d: NaiveDate) -> AppError {
    AppError::DateOutOfRange(d.format("%Y-%m-%d").to_string())
}

/// First and last day of the month containing `reference`.
pub fn month_bounds(reference: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = reference
        .with_day(1)
        .ok_or_else(|| out_of_range(reference))?;
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| out_of_range(reference))?;
    Ok((first, last))
}

/// Sunday opening the week of `reference` and the Saturday closing it.
pub fn week_bounds(reference: NaiveDate) -> AppResult<(NaiveDate, NaiveDate)> {
    let offset = u64::from(reference.weekday().num_days_from_sunday());
    let start = reference
        .checked_sub_days(Days::new(offset))
        .ok_or_else(|| out_of_range(reference))?;
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or_else(|| out_of_range(reference))?;
    Ok((start, end))
}

pub fn days_in_month(reference: NaiveDate) -> AppResult<u32> {
    let (_, last) = month_bounds(reference)?;
    Ok(last.day())
}

/// Local calendar day of a record's due instant.
pub fn local_day<Tz: TimeZone>(record: &Assignment, tz: &Tz) -> NaiveDate {
    record.due_day(tz)
}

/// Groups the records falling inside `[first, last]` by local due day.
/// Each bucket keeps the input order.
fn bucket_by_day<'a, Tz: TimeZone>(
    records: &'a [Assignment],
    tz: &Tz,
    first: NaiveDate,
    last: NaiveDate,
) -> HashMap<NaiveDate, Vec<&'a Assignment>> {
    let mut buckets: HashMap<NaiveDate, Vec<&'a Assignment>> = HashMap::new();

    for r in records {
        let day = local_day(r, tz);
        if day >= first && day <= last {
            buckets.entry(day).or_default().push(r);
        }
    }

    buckets
}

fn day_cells<'a, Tz: TimeZone>(
    first: NaiveDate,
    last: NaiveDate,
    records: &'a [Assignment],
    tz: &Tz,
) -> Vec<Cell<'a>> {
    let mut buckets = bucket_by_day(records, tz, first, last);

    first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|d| Cell {
            day: Some(d),
            records: buckets.remove(&d).unwrap_or_default(),
        })
        .collect()
}

/// Month grid: `weekday(first day)` padding cells, then one cell per day.
pub fn build_month_grid<'a, Tz: TimeZone>(
    reference: NaiveDate,
    records: &'a [Assignment],
    tz: &Tz,
) -> AppResult<Vec<Cell<'a>>> {
    let (first, last) = month_bounds(reference)?;
    let lead = first.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<Cell<'a>> = (0..lead).map(|_| Cell::padding()).collect();
    cells.extend(day_cells(first, last, records, tz));

    Ok(cells)
}

/// Week grid: always 7 cells, Sunday through Saturday.
pub fn build_week_grid<'a, Tz: TimeZone>(
    reference: NaiveDate,
    records: &'a [Assignment],
    tz: &Tz,
) -> AppResult<Vec<Cell<'a>>> {
    let (start, end) = week_bounds(reference)?;
    Ok(day_cells(start, end, records, tz))
}

pub fn build_grid<'a, Tz: TimeZone>(
    granularity: Granularity,
    reference: NaiveDate,
    records: &'a [Assignment],
    tz: &Tz,
) -> AppResult<Vec<Cell<'a>>> {
    match granularity {
        Granularity::Month => build_month_grid(reference, records, tz),
        Granularity::Week => build_week_grid(reference, records, tz),
    }
}

/// Move the reference date by `steps` months or weeks (negative = back).
///
/// Month steps clamp to the last valid day of the target month,
/// e.g. 2024-01-31 + 1 month = 2024-02-29.
pub fn shift(reference: NaiveDate, granularity: Granularity, steps: i32) -> AppResult<NaiveDate> {
    let n = steps.unsigned_abs();

    let moved = match granularity {
        Granularity::Month => {
            if steps >= 0 {
                reference.checked_add_months(Months::new(n))
            } else {
                reference.checked_sub_months(Months::new(n))
            }
        }
        Granularity::Week => {
            let days = Days::new(u64::from(n) * 7);
            if steps >= 0 {
                reference.checked_add_days(days)
            } else {
                reference.checked_sub_days(days)
            }
        }
    };

    moved.ok_or_else(|| out_of_range(reference))
}
