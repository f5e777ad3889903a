//! Threshold evaluation over the latest sensor reading.
//!
//! Each rule is checked independently and the results OR into the overall
//! alarm flag. There is no hysteresis or debounce: a reading that stops
//! breaching clears its flag on the very next evaluation, so the banner may
//! flicker across ticks. That is a deliberate simplification.

use serde::Serialize;

use crate::telemetry::SensorReading;

/// Alarm fires when temperature exceeds this value (°C, exclusive).
pub const TEMPERATURE_LIMIT: f64 = 35.0;
/// Alarm fires when noise exceeds this value (dB, exclusive).
pub const NOISE_LIMIT: f64 = 85.0;
/// Alarm fires when AQI exceeds this value (exclusive).
pub const AQI_LIMIT: u32 = 150;

/// A monitored metric that can breach its threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Metric {
    Temperature,
    Noise,
    AirQuality,
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Temperature => write!(f, "temperature"),
            Self::Noise => write!(f, "noise"),
            Self::AirQuality => write!(f, "airQuality"),
        }
    }
}

/// Derived alarm decision. Recomputed on every new reading, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AlarmState {
    /// True when at least one metric breaches.
    pub is_alarmed: bool,
    /// Every metric currently over its threshold.
    pub breached: Vec<Metric>,
}

impl AlarmState {
    /// Whether a specific metric is currently breaching.
    pub fn is_breached(&self, metric: Metric) -> bool {
        self.breached.contains(&metric)
    }
}

/// Evaluate the threshold rules against a reading.
///
/// Pure and deterministic: the same reading always yields the same state.
/// Boundaries are exclusive-above — a value exactly at the limit is fine.
pub fn evaluate(reading: &SensorReading) -> AlarmState {
    let mut breached = Vec::new();
    if reading.temperature > TEMPERATURE_LIMIT {
        breached.push(Metric::Temperature);
    }
    if reading.noise_level > NOISE_LIMIT {
        breached.push(Metric::Noise);
    }
    if reading.air_quality_index > AQI_LIMIT {
        breached.push(Metric::AirQuality);
    }
    AlarmState {
        is_alarmed: !breached.is_empty(),
        breached,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(temperature: f64, noise_level: f64, air_quality_index: u32) -> SensorReading {
        SensorReading {
            temperature,
            noise_level,
            air_quality_index,
        }
    }

    #[test]
    fn test_calm_reading_has_no_alarm() {
        let state = evaluate(&reading(28.5, 60.0, 50));
        assert!(!state.is_alarmed);
        assert!(state.breached.is_empty());
    }

    #[test]
    fn test_boundaries_are_exclusive_above() {
        // Exactly at the limit: no breach.
        let state = evaluate(&reading(35.0, 85.0, 150));
        assert!(!state.is_alarmed);

        // Just over: every rule fires.
        let state = evaluate(&reading(35.01, 85.01, 151));
        assert!(state.is_alarmed);
        assert_eq!(
            state.breached,
            vec![Metric::Temperature, Metric::Noise, Metric::AirQuality]
        );
    }

    #[test]
    fn test_rules_fire_independently() {
        let state = evaluate(&reading(36.0, 60.0, 50));
        assert!(state.is_alarmed);
        assert_eq!(state.breached, vec![Metric::Temperature]);

        let state = evaluate(&reading(28.0, 95.0, 50));
        assert_eq!(state.breached, vec![Metric::Noise]);

        let state = evaluate(&reading(28.0, 60.0, 180));
        assert_eq!(state.breached, vec![Metric::AirQuality]);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let r = reading(37.2, 91.4, 165);
        assert_eq!(evaluate(&r), evaluate(&r));
    }

    #[test]
    fn test_clears_without_hysteresis() {
        // A breach followed by a calm reading clears immediately.
        assert!(evaluate(&reading(40.0, 60.0, 50)).is_alarmed);
        assert!(!evaluate(&reading(29.0, 60.0, 50)).is_alarmed);
    }

    #[test]
    fn test_is_breached_lookup() {
        let state = evaluate(&reading(36.0, 95.0, 50));
        assert!(state.is_breached(Metric::Temperature));
        assert!(state.is_breached(Metric::Noise));
        assert!(!state.is_breached(Metric::AirQuality));
    }
}
