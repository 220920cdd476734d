use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};

const LEAP_YEAR: i32 = 2024;

/// A calendar day as shown to the user and as requested from the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodayPath {
    /// e.g. `Sunday, October 18`
    pub label: String,
    pub month: u32,
    pub day: u32,
}

impl TodayPath {
    pub fn today() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            label: date.format("%A, %B %-d").to_string(),
            month: date.month(),
            day: date.day(),
        }
    }

    /// Parse `MM-DD` (or `M-D`).
    ///
    /// Any day of a leap year is accepted. The label carries the weekday in
    /// `year` when the day exists there, otherwise only month and day.
    pub fn parse_month_day(value: &str, year: i32) -> Result<Self> {
        let Some((month, day)) = value.trim().split_once('-') else {
            bail!("Expected a date like 10-18, got \"{}\"", value);
        };
        let month: u32 = month
            .parse()
            .with_context(|| format!("Invalid month in \"{}\"", value))?;
        let day: u32 = day
            .parse()
            .with_context(|| format!("Invalid day in \"{}\"", value))?;

        let leap_date = NaiveDate::from_ymd_opt(LEAP_YEAR, month, day)
            .with_context(|| format!("No such date: {}", value))?;

        Ok(match NaiveDate::from_ymd_opt(year, month, day) {
            Some(date) => Self::for_date(date),
            None => Self {
                label: leap_date.format("%B %-d").to_string(),
                month,
                day,
            },
        })
    }
}
