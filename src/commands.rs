use crate::amount::format_currency;
use crate::errors::JourneyError;
use crate::fill;
use crate::journey::Journey;
use crate::timeline::{date_label, DateRange};
use chrono::{DateTime, Utc};

/// A single user action against the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ApplyDates { start: String, end: String },
    SetCeiling(String),
    SetAmount(String),
    ToggleWeek(i64),
    Sweep,
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub journey: Journey,
    /// Confirmation text for the user, if the action warrants one.
    pub notice: Option<String>,
    /// False when the command left the state untouched and nothing needs saving.
    pub changed: bool,
    /// Weeks marked by a sweep.
    pub auto_filled: usize,
}

/// Applies `command` to a copy of `journey`. The input is never modified, so
/// a failed command leaves no trace.
pub fn dispatch(journey: &Journey, command: Command, now: DateTime<Utc>) -> Result<Outcome, JourneyError> {
    let mut next = journey.clone();
    let mut auto_filled = 0;

    let notice = match command {
        Command::ApplyDates { start, end } => {
            next.range = DateRange::parse(&start, &end)?;
            next.range_saved = true;
            next.rebuild(now);
            Some("Journey timeline updated successfully".to_string())
        }
        Command::SetCeiling(input) => {
            next.amount.set_ceiling(&input)?;
            next.ceiling_saved = true;
            Some(format!(
                "Maximum amount updated to ${}",
                format_currency(next.amount.ceiling())
            ))
        }
        Command::SetAmount(input) => {
            next.amount.set_value(&input)?;
            Some(format!("Amount set to ${}", format_currency(next.amount.value())))
        }
        Command::ToggleWeek(end_timestamp) => {
            let week = fill::toggle(&mut next.timeline, &mut next.store, end_timestamp)?;
            let action = if week.filled { "marked as passed" } else { "unmarked" };
            Some(format!(
                "Week {} - {} {action}",
                date_label(week.start),
                date_label(week.end)
            ))
        }
        Command::Sweep => {
            auto_filled = fill::sweep(&mut next.timeline, &mut next.store, now.timestamp_millis());
            (auto_filled > 0).then(|| auto_fill_message(auto_filled))
        }
    };

    let changed = next != *journey;
    Ok(Outcome {
        journey: next,
        notice,
        changed,
        auto_filled,
    })
}

pub fn auto_fill_message(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} new week{plural} automatically marked as passed")
}
