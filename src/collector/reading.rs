//! Synthetic sensor readings.

use std::ops::RangeInclusive;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const TEMPERATURE_RANGE: RangeInclusive<f64> = 15.0..=35.0;
pub const HUMIDITY_RANGE: RangeInclusive<f64> = 30.0..=70.0;
pub const PRESSURE_RANGE: RangeInclusive<f64> = 980.0..=1050.0;
pub const VIBRATION_RANGE: RangeInclusive<f64> = 0.0..=5.0;

/// Generated ids are `sensor_<n>` with `n` drawn from this range.
pub const SENSOR_NUMBER_RANGE: RangeInclusive<u32> = 1..=100;

/// Machine state reported alongside the measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SensorStatus {
    Normal,
    Warning,
    Error,
}

impl SensorStatus {
    pub const ALL: [SensorStatus; 3] = [Self::Normal, Self::Warning, Self::Error];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
        }
    }
}

impl Distribution<SensorStatus> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> SensorStatus {
        SensorStatus::ALL[rng.gen_range(0..SensorStatus::ALL.len())]
    }
}

/// One fabricated reading. Built per request and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub sensor_id: String,
    /// Degrees Celsius, 2 decimals.
    pub temperature: f64,
    /// Relative humidity in percent, 2 decimals.
    pub humidity: f64,
    /// hPa, 2 decimals.
    pub pressure: f64,
    /// G, 3 decimals.
    pub vibration: f64,
    pub status: SensorStatus,
    /// Seconds since the Unix epoch.
    pub timestamp: f64,
}

impl SensorReading {
    /// Fabricate a reading. A missing `sensor_id` is replaced by a random
    /// `sensor_<1..=100>` id.
    pub fn generate<R: Rng + ?Sized>(sensor_id: Option<String>, rng: &mut R) -> Self {
        let sensor_id = sensor_id.unwrap_or_else(|| generate_sensor_id(rng));

        Self {
            sensor_id,
            temperature: round_to(rng.gen_range(TEMPERATURE_RANGE), 2),
            humidity: round_to(rng.gen_range(HUMIDITY_RANGE), 2),
            pressure: round_to(rng.gen_range(PRESSURE_RANGE), 2),
            vibration: round_to(rng.gen_range(VIBRATION_RANGE), 3),
            status: rng.gen(),
            timestamp: unix_timestamp(),
        }
    }
}

pub fn generate_sensor_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("sensor_{}", rng.gen_range(SENSOR_NUMBER_RANGE))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}
