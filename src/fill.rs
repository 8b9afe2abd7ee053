use crate::errors::JourneyError;
use crate::timeline::{Timeline, Week};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Explicit fill overrides keyed by week-end timestamp (as a decimal string).
///
/// Keys are only ever added or overwritten, never removed, so an override
/// survives range changes that temporarily hide its week.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FillStore(BTreeMap<String, bool>);

impl FillStore {
    pub fn get(&self, end_timestamp: i64) -> Option<bool> {
        self.0.get(&end_timestamp.to_string()).copied()
    }

    pub fn has(&self, end_timestamp: i64) -> bool {
        self.0.contains_key(&end_timestamp.to_string())
    }

    pub fn set(&mut self, end_timestamp: i64, filled: bool) {
        self.0.insert(end_timestamp.to_string(), filled);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Explicit entry if there is one, otherwise whether the week has ended.
pub fn resolve(store: &FillStore, end_timestamp: i64, now_ms: i64) -> bool {
    store.get(end_timestamp).unwrap_or(now_ms >= end_timestamp)
}

/// Sets every week's rendered flag from the store and the clock.
pub fn apply(timeline: &mut Timeline, store: &FillStore, now_ms: i64) {
    for week in timeline.weeks_mut() {
        week.filled = resolve(store, week.end_timestamp, now_ms);
    }
}

/// Flips a rendered week and records the result as an explicit entry.
pub fn toggle<'a>(
    timeline: &'a mut Timeline,
    store: &mut FillStore,
    end_timestamp: i64,
) -> Result<&'a Week, JourneyError> {
    let week = timeline
        .find_mut(end_timestamp)
        .ok_or(JourneyError::UnknownWeek(end_timestamp))?;
    week.filled = !week.filled;
    store.set(end_timestamp, week.filled);
    Ok(week)
}

/// Marks rendered weeks that have ended since they were drawn and have no
/// explicit entry. Returns how many were marked.
pub fn sweep(timeline: &mut Timeline, store: &mut FillStore, now_ms: i64) -> usize {
    let mut marked = 0;
    for week in timeline.weeks_mut() {
        if !store.has(week.end_timestamp) && now_ms >= week.end_timestamp && !week.filled {
            week.filled = true;
            store.set(week.end_timestamp, true);
            marked += 1;
        }
    }
    marked
}
