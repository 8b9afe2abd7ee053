use crate::commands::{dispatch, Command};
use crate::errors::AppError;
use crate::state::{AppState, AutoFillReport};
use crate::storage::persist_data;
use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info};

/// Sweeps immediately and then once per `period` for the life of the process.
pub fn spawn_auto_fill(state: AppState, period: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            if let Err(err) = auto_fill_once(&state, Utc::now()).await {
                error!("auto-fill sweep failed: {}", err.message);
            }
        }
    })
}

/// Runs one sweep, saving and recording a report when weeks were marked.
pub async fn auto_fill_once(state: &AppState, now: DateTime<Utc>) -> Result<usize, AppError> {
    let mut tracker = state.tracker.lock().await;
    let outcome = dispatch(&tracker.journey, Command::Sweep, now)?;
    if !outcome.changed {
        debug!("auto-fill sweep found nothing new");
        return Ok(0);
    }

    persist_data(&state.data_path, &outcome.journey.to_stored()).await?;
    tracker.journey = outcome.journey;

    let message = outcome.notice.unwrap_or_default();
    info!("{message}");
    let sequence = tracker
        .last_auto_fill
        .as_ref()
        .map_or(1, |report| report.sequence + 1);
    tracker.last_auto_fill = Some(AutoFillReport {
        sequence,
        count: outcome.auto_filled,
        message,
    });

    Ok(outcome.auto_filled)
}
