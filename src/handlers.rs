use crate::commands::{dispatch, Command};
use crate::errors::AppError;
use crate::models::{AmountRequest, DateRangeRequest};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use crate::view::{project, CommandResponse, JourneyView};
use axum::{
    extract::{Path, State},
    response::Html,
    Json,
};
use chrono::Utc;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let tracker = state.tracker.lock().await;
    let view = project(&tracker.journey, tracker.last_auto_fill.as_ref());
    Html(render_index(&view))
}

pub async fn get_journey(State(state): State<AppState>) -> Json<JourneyView> {
    let tracker = state.tracker.lock().await;
    Json(project(&tracker.journey, tracker.last_auto_fill.as_ref()))
}

pub async fn apply_dates(
    State(state): State<AppState>,
    Json(payload): Json<DateRangeRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    let command = Command::ApplyDates {
        start: payload.start,
        end: payload.end,
    };
    run_command(&state, command).await.map(Json)
}

pub async fn set_max_amount(
    State(state): State<AppState>,
    Json(payload): Json<AmountRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    run_command(&state, Command::SetCeiling(payload.value)).await.map(Json)
}

pub async fn set_amount(
    State(state): State<AppState>,
    Json(payload): Json<AmountRequest>,
) -> Result<Json<CommandResponse>, AppError> {
    run_command(&state, Command::SetAmount(payload.value)).await.map(Json)
}

pub async fn toggle_week(
    State(state): State<AppState>,
    Path(end_timestamp): Path<i64>,
) -> Result<Json<CommandResponse>, AppError> {
    run_command(&state, Command::ToggleWeek(end_timestamp)).await.map(Json)
}

/// Dispatches under the tracker lock. The new state is saved before it
/// replaces the old one, so a failed write changes nothing.
async fn run_command(state: &AppState, command: Command) -> Result<CommandResponse, AppError> {
    let label = format!("{command:?}");
    let mut tracker = state.tracker.lock().await;
    let outcome = dispatch(&tracker.journey, command, Utc::now()).map_err(|err| {
        warn!("rejected {label}: {err}");
        AppError::from(err)
    })?;

    if outcome.changed {
        persist_data(&state.data_path, &outcome.journey.to_stored()).await?;
        tracker.journey = outcome.journey;
    }
    if let Some(notice) = &outcome.notice {
        info!("{notice}");
    }

    Ok(CommandResponse {
        notice: outcome.notice,
        journey: project(&tracker.journey, tracker.last_auto_fill.as_ref()),
    })
}
