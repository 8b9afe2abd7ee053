use crate::amount::{AmountSetting, DEFAULT_CEILING};
use crate::fill::{self, FillStore};
use crate::models::StoredState;
use crate::stats::{progress, Progress};
use crate::timeline::{build, date_key, DateRange, Timeline};
use chrono::{DateTime, Utc};
use tracing::warn;

/// Everything the tracker knows: the persisted settings plus the grid as it
/// is currently drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    pub range: DateRange,
    pub store: FillStore,
    pub amount: AmountSetting,
    pub timeline: Timeline,
    /// The range was applied by the user or read from the document. Until then
    /// it is the rolling default and is left out of the stored document.
    pub range_saved: bool,
    /// Same as `range_saved`, for the ceiling.
    pub ceiling_saved: bool,
}

impl Journey {
    /// A range and amount handed in by the caller count as chosen settings.
    pub fn new(range: DateRange, store: FillStore, amount: AmountSetting, now: DateTime<Utc>) -> Self {
        let mut journey = Self {
            range,
            store,
            amount,
            timeline: Timeline::default(),
            range_saved: true,
            ceiling_saved: true,
        };
        journey.rebuild(now);
        journey
    }

    /// Restores state from the stored document, falling back to defaults for
    /// anything missing or unreadable.
    pub fn from_stored(stored: &StoredState, now: DateTime<Utc>) -> Self {
        let saved_range = stored_range(stored);
        let range = saved_range.unwrap_or_else(|| DateRange::default_from(now.date_naive()));
        let saved_ceiling = stored
            .max_amount
            .as_deref()
            .and_then(|value| parse_stored("journeyMaxAmount", value))
            .filter(|ceiling| *ceiling > 0);
        let value = stored
            .slider_value
            .as_deref()
            .and_then(|value| parse_stored("journeySliderValue", value))
            .unwrap_or(0);

        let mut journey = Self::new(
            range,
            stored.weeks.clone(),
            AmountSetting::new(saved_ceiling.unwrap_or(DEFAULT_CEILING), value),
            now,
        );
        journey.range_saved = saved_range.is_some();
        journey.ceiling_saved = saved_ceiling.is_some();
        journey
    }

    pub fn to_stored(&self) -> StoredState {
        StoredState {
            weeks: self.store.clone(),
            slider_value: Some(self.amount.value().to_string()),
            start_date: self.range_saved.then(|| date_key(self.range.start())),
            end_date: self.range_saved.then(|| date_key(self.range.end())),
            max_amount: self.ceiling_saved.then(|| self.amount.ceiling().to_string()),
        }
    }

    /// Redraws the grid for the current range and resolves fill state.
    pub fn rebuild(&mut self, now: DateTime<Utc>) {
        self.timeline = build(&self.range);
        fill::apply(&mut self.timeline, &self.store, now.timestamp_millis());
    }

    pub fn stats(&self) -> Progress {
        progress(&self.timeline)
    }
}

/// Both dates are written together by apply-dates, so a document with only
/// one of them is treated as having neither.
fn stored_range(stored: &StoredState) -> Option<DateRange> {
    let (Some(start), Some(end)) = (stored.start_date.as_deref(), stored.end_date.as_deref()) else {
        return None;
    };
    match DateRange::parse(start, end) {
        Ok(range) => Some(range),
        Err(err) => {
            warn!("stored journey dates {start}..{end} rejected ({err}), using defaults");
            None
        }
    }
}

fn parse_stored(key: &str, value: &str) -> Option<u64> {
    match value.trim().parse::<u64>() {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warn!("ignoring stored {key} {value:?}: {err}");
            None
        }
    }
}
