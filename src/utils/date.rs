use crate::core::calendar::month_bounds;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// First and last day covered by a single period token.
///
/// - `YYYY-MM-DD` → that day
/// - `YYYY-MM`    → whole month
/// - `YYYY`       → whole year
fn bounds_of(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    match p.len() {
        10 => {
            let d = parse_date(p).ok_or_else(invalid)?;
            Ok((d, d))
        }
        7 => {
            let d = parse_date(&format!("{p}-01")).ok_or_else(invalid)?;
            month_bounds(d)
        }
        4 => {
            let year: i32 = p.parse().map_err(|_| invalid())?;
            let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
            let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
            Ok((first, last))
        }
        _ => Err(invalid()),
    }
}

/// Parse a `--period` / `--range` expression.
///
/// Accepted forms:
/// - `all` → no filter (`None`)
/// - YYYY, YYYY-MM, YYYY-MM-DD
/// - START:END where both sides use the same format
pub fn period_bounds(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());

        if start.len() != end.len() {
            return Err(AppError::InvalidDate(
                "start and end must have same format".to_string(),
            ));
        }

        let (first, _) = bounds_of(start)?;
        let (_, last) = bounds_of(end)?;

        if first > last {
            return Err(AppError::InvalidDate(format!(
                "range start {} is after end {}",
                first, last
            )));
        }
        return Ok(Some((first, last)));
    }

    bounds_of(p).map(Some)
}
