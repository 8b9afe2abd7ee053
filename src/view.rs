use crate::amount::format_currency;
use crate::journey::Journey;
use crate::state::AutoFillReport;
use crate::timeline::{date_key, date_label};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub number: usize,
    pub start_label: String,
    pub end_label: String,
    pub end_timestamp: i64,
    pub filled: bool,
}

#[derive(Debug, Serialize)]
pub struct YearView {
    pub number: usize,
    pub weeks: Vec<WeekView>,
}

#[derive(Debug, Serialize)]
pub struct AmountView {
    pub ceiling: u64,
    pub value: u64,
    pub percentage: f64,
    pub display: String,
}

/// Everything the control panel draws.
#[derive(Debug, Serialize)]
pub struct JourneyView {
    pub start_date: String,
    pub end_date: String,
    pub total_weeks: usize,
    pub weeks_passed: usize,
    pub progress_percent: f64,
    pub years: Vec<YearView>,
    pub amount: AmountView,
    pub auto_fill: Option<AutoFillReport>,
}

#[derive(Debug, Serialize)]
pub struct CommandResponse {
    pub notice: Option<String>,
    pub journey: JourneyView,
}

pub fn project(journey: &Journey, auto_fill: Option<&AutoFillReport>) -> JourneyView {
    let stats = journey.stats();
    let years = journey
        .timeline
        .years
        .iter()
        .map(|year| YearView {
            number: year.number,
            weeks: year
                .weeks
                .iter()
                .map(|week| WeekView {
                    number: week.number,
                    start_label: date_label(week.start),
                    end_label: date_label(week.end),
                    end_timestamp: week.end_timestamp,
                    filled: week.filled,
                })
                .collect(),
        })
        .collect();

    JourneyView {
        start_date: date_key(journey.range.start()),
        end_date: date_key(journey.range.end()),
        total_weeks: journey.range.total_weeks(),
        weeks_passed: stats.filled,
        progress_percent: stats.percentage,
        years,
        amount: AmountView {
            ceiling: journey.amount.ceiling(),
            value: journey.amount.value(),
            percentage: journey.amount.percentage(),
            display: format!("${}", format_currency(journey.amount.value())),
        },
        auto_fill: auto_fill.cloned(),
    }
}
