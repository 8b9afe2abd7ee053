use axum::http::StatusCode;
use thiserror::Error;

/// Why a date range was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeProblem {
    #[error("End date must be after start date")]
    EndNotAfterStart,

    #[error("Journey must be at least one week long")]
    TooShort,
}

/// User-input validation failures. The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JourneyError {
    #[error("Please enter valid dates")]
    InvalidDate,

    #[error("{0}")]
    InvalidRange(RangeProblem),

    #[error("Please enter a valid positive maximum amount")]
    InvalidCeiling,

    #[error("Please enter a valid non-negative amount")]
    InvalidAmount,

    #[error("Amount cannot exceed maximum of ${}", money(.ceiling))]
    AmountExceedsCeiling { ceiling: u64 },

    #[error("No week ending at {0} in the current journey")]
    UnknownWeek(i64),
}

fn money(value: &u64) -> String {
    crate::amount::format_currency(*value)
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<JourneyError> for AppError {
    fn from(err: JourneyError) -> Self {
        match err {
            JourneyError::UnknownWeek(_) => Self::not_found(err.to_string()),
            other => Self::bad_request(other.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
