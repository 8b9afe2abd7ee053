use crate::fill::FillStore;
use serde::{Deserialize, Serialize};

/// On-disk key/value document. Scalar values are kept as strings so the file
/// reads the same as the browser storage it replaces.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StoredState {
    #[serde(rename = "journeyWeeks", default)]
    pub weeks: FillStore,
    #[serde(rename = "journeySliderValue", default, skip_serializing_if = "Option::is_none")]
    pub slider_value: Option<String>,
    #[serde(rename = "journeyStartDate", default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(rename = "journeyEndDate", default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "journeyMaxAmount", default, skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeRequest {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize)]
pub struct AmountRequest {
    pub value: String,
}
