use crate::errors::{JourneyError, RangeProblem};
use chrono::{Duration, Months, NaiveDate, NaiveTime};

pub const DAYS_PER_WEEK: i64 = 7;
pub const WEEKS_PER_YEAR: usize = 52;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DEFAULT_SPAN_YEARS: u32 = 7;

/// Inclusive-start calendar range the grid is built over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, JourneyError> {
        if start >= end {
            return Err(JourneyError::InvalidRange(RangeProblem::EndNotAfterStart));
        }
        if (end - start).num_days() < DAYS_PER_WEEK {
            return Err(JourneyError::InvalidRange(RangeProblem::TooShort));
        }
        Ok(Self { start, end })
    }

    /// Parses two `yyyy-mm-dd` inputs. Parse failures win over range problems.
    pub fn parse(start: &str, end: &str) -> Result<Self, JourneyError> {
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        Self::new(start, end)
    }

    /// Tomorrow through the same day seven years later.
    pub fn default_from(today: NaiveDate) -> Self {
        let start = today.succ_opt().unwrap_or(today);
        let end = start
            .checked_add_months(Months::new(DEFAULT_SPAN_YEARS * 12))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days().abs()
    }

    pub fn total_weeks(&self) -> usize {
        (self.days() / DAYS_PER_WEEK) as usize
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    pub year: usize,
    pub number: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub end_timestamp: i64,
    /// Rendered fill state, set by fill resolution and kept in step by
    /// toggles and sweeps.
    pub filled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    pub number: usize,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Timeline {
    pub years: Vec<Year>,
}

impl Timeline {
    pub fn weeks(&self) -> impl Iterator<Item = &Week> {
        self.years.iter().flat_map(|year| year.weeks.iter())
    }

    pub fn weeks_mut(&mut self) -> impl Iterator<Item = &mut Week> {
        self.years.iter_mut().flat_map(|year| year.weeks.iter_mut())
    }

    pub fn find_mut(&mut self, end_timestamp: i64) -> Option<&mut Week> {
        self.weeks_mut().find(|week| week.end_timestamp == end_timestamp)
    }

    pub fn total_weeks(&self) -> usize {
        self.years.iter().map(|year| year.weeks.len()).sum()
    }
}

pub fn build(range: &DateRange) -> Timeline {
    let total_weeks = range.total_weeks();
    let total_years = total_weeks.div_ceil(WEEKS_PER_YEAR).max(1);

    let mut years = Vec::with_capacity(total_years);
    for year in 1..=total_years {
        let is_last = year == total_years;
        let year_start = range.start + Duration::days(((year - 1) * WEEKS_PER_YEAR) as i64 * DAYS_PER_WEEK);
        let mut year_end = year_start + Duration::days(WEEKS_PER_YEAR as i64 * DAYS_PER_WEEK - 1);
        if is_last && year_end > range.end {
            year_end = range.end;
        }

        let weeks_in_year = if is_last {
            total_weeks.saturating_sub((total_years - 1) * WEEKS_PER_YEAR)
        } else {
            WEEKS_PER_YEAR
        };

        let mut weeks = Vec::with_capacity(weeks_in_year);
        for number in 1..=weeks_in_year {
            let start = year_start + Duration::days((number - 1) as i64 * DAYS_PER_WEEK);
            let mut end = start + Duration::days(DAYS_PER_WEEK - 1);
            if is_last && number == weeks_in_year && end > range.end {
                end = range.end;
            }
            weeks.push(Week {
                year,
                number,
                start,
                end,
                end_timestamp: day_timestamp(end),
                filled: false,
            });
        }

        years.push(Year {
            number: year,
            start: year_start,
            end: year_end,
            weeks,
        });
    }

    Timeline { years }
}

/// Milliseconds since the epoch at UTC midnight of `date`.
pub fn day_timestamp(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// "Jan 2, 2024"
pub fn date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn parse_date(input: &str) -> Result<NaiveDate, JourneyError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|_| JourneyError::InvalidDate)
}
