//! In-memory aggregation of received readings.

use std::collections::{BTreeMap, VecDeque};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of raw readings kept for `GET /api/alldata`.
pub const RECENT_WINDOW: usize = 100;

pub const INVALID_DATA_MESSAGE: &str =
    "Invalid data format, missing required fields (sensor_id, temperature, vibration, status).";

/// The fields the processor needs out of an incoming reading.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingReading {
    pub sensor_id: String,
    pub temperature: f64,
    pub vibration: f64,
    pub status: String,
}

impl IncomingReading {
    /// Extract the required fields, or `None` if any is missing or mistyped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let reading: Self = serde_json::from_value(value.clone()).ok()?;
        if reading.sensor_id.is_empty() {
            return None;
        }
        Some(reading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    #[serde(rename = "NORMAL")]
    pub normal: u64,
    #[serde(rename = "WARNING")]
    pub warning: u64,
    #[serde(rename = "ERROR")]
    pub error: u64,
}

impl StatusCounts {
    /// Unknown statuses are ignored.
    fn record(&mut self, status: &str) {
        match status.to_ascii_uppercase().as_str() {
            "NORMAL" => self.normal += 1,
            "WARNING" => self.warning += 1,
            "ERROR" => self.error += 1,
            _ => {}
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SensorActivity {
    pub count: u64,
    pub last_status: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingSummary {
    pub total_messages: u64,
    pub average_temperature: f64,
    pub average_vibration: f64,
    pub status_counts: StatusCounts,
    pub last_received_data: Option<Value>,
    pub sensor_activity: BTreeMap<String, SensorActivity>,
}

/// Everything the processor has seen so far.
#[derive(Debug, Default)]
pub struct DataStore {
    summary: ProcessingSummary,
    temperature_sum: f64,
    vibration_sum: f64,
    recent: VecDeque<Value>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one validated reading into the summary.
    pub fn record(&mut self, reading: &IncomingReading, raw: Value) {
        let summary = &mut self.summary;
        summary.total_messages += 1;

        self.temperature_sum += reading.temperature;
        self.vibration_sum += reading.vibration;
        let n = summary.total_messages as f64;
        summary.average_temperature = round_to(self.temperature_sum / n, 2);
        summary.average_vibration = round_to(self.vibration_sum / n, 3);

        summary.status_counts.record(&reading.status);

        let activity = summary
            .sensor_activity
            .entry(reading.sensor_id.clone())
            .or_insert_with(|| SensorActivity {
                count: 0,
                last_status: String::new(),
            });
        activity.count += 1;
        activity.last_status = reading.status.clone();

        summary.last_received_data = Some(raw.clone());

        if self.recent.len() == RECENT_WINDOW {
            self.recent.pop_front();
        }
        self.recent.push_back(raw);
    }

    pub fn summary(&self) -> &ProcessingSummary {
        &self.summary
    }

    /// Total number of readings received.
    pub fn count(&self) -> u64 {
        self.summary.total_messages
    }

    /// The most recent readings, oldest first.
    pub fn recent(&self) -> Vec<Value> {
        self.recent.iter().cloned().collect()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
