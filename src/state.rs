use crate::journey::Journey;
use serde::Serialize;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

/// Result of the most recent sweep that marked anything. `sequence` grows by
/// one per such sweep so a polling page can tell new reports from old ones.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AutoFillReport {
    pub sequence: u64,
    pub count: usize,
    pub message: String,
}

#[derive(Debug)]
pub struct Tracker {
    pub journey: Journey,
    pub last_auto_fill: Option<AutoFillReport>,
}

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub tracker: Arc<Mutex<Tracker>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, journey: Journey) -> Self {
        Self {
            data_path,
            tracker: Arc::new(Mutex::new(Tracker {
                journey,
                last_auto_fill: None,
            })),
        }
    }
}
