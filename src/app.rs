use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/journey", get(handlers::get_journey))
        .route("/api/dates", post(handlers::apply_dates))
        .route("/api/max-amount", post(handlers::set_max_amount))
        .route("/api/amount", post(handlers::set_amount))
        .route("/api/weeks/:timestamp/toggle", post(handlers::toggle_week))
        .with_state(state)
}
