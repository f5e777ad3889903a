//! Synthetic sensor telemetry.
//!
//! The simulator produces one [`SensorReading`] per tick with a two-branch
//! policy: most ticks draw from calm city baselines, a minority ("spikes")
//! draw from ranges that sit above every alarm threshold. Only the latest
//! reading is kept — there is no time-series history.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

/// Probability that a tick produces a spike reading.
pub const SPIKE_PROBABILITY: f64 = 0.15;

/// Spike ranges: all three metrics land above their alarm thresholds.
const SPIKE_TEMPERATURE: std::ops::Range<f64> = 36.0..41.0;
const SPIKE_NOISE: std::ops::Range<f64> = 90.0..100.0;
const SPIKE_AQI: std::ops::Range<u32> = 160..200;

/// Baseline ranges: all three metrics stay comfortably below thresholds.
const NORMAL_TEMPERATURE: std::ops::Range<f64> = 28.0..31.0;
const NORMAL_NOISE: std::ops::Range<f64> = 50.0..70.0;
const NORMAL_AQI: std::ops::Range<u32> = 40..80;

/// One point-in-time sensor reading from the simulated node network.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    /// Ambient temperature in °C.
    pub temperature: f64,
    /// Noise level in dB.
    pub noise_level: f64,
    /// Air quality index (integer, higher is worse).
    pub air_quality_index: u32,
}

impl SensorReading {
    /// Reading shown before the first simulator tick.
    pub fn initial() -> Self {
        Self {
            temperature: 28.0,
            noise_level: 60.0,
            air_quality_index: 50,
        }
    }
}

/// Generator of synthetic [`SensorReading`]s.
///
/// Holds its own RNG so seeded runs replay the same reading sequence.
pub struct TelemetrySimulator {
    rng: StdRng,
}

impl TelemetrySimulator {
    /// Simulator seeded from OS randomness.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic simulator for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce the next reading, overwriting whatever came before it.
    pub fn next_reading(&mut self) -> SensorReading {
        if self.rng.random_bool(SPIKE_PROBABILITY) {
            SensorReading {
                temperature: self.rng.random_range(SPIKE_TEMPERATURE),
                noise_level: self.rng.random_range(SPIKE_NOISE),
                air_quality_index: self.rng.random_range(SPIKE_AQI),
            }
        } else {
            SensorReading {
                temperature: self.rng.random_range(NORMAL_TEMPERATURE),
                noise_level: self.rng.random_range(NORMAL_NOISE),
                air_quality_index: self.rng.random_range(NORMAL_AQI),
            }
        }
    }
}

impl Default for TelemetrySimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_reading_is_calm() {
        let r = SensorReading::initial();
        assert_eq!(r.temperature, 28.0);
        assert_eq!(r.noise_level, 60.0);
        assert_eq!(r.air_quality_index, 50);
    }

    #[test]
    fn test_readings_stay_inside_branch_ranges() {
        let mut sim = TelemetrySimulator::seeded(7);
        for _ in 0..2000 {
            let r = sim.next_reading();
            let spike = r.temperature >= 36.0;
            if spike {
                assert!(SPIKE_TEMPERATURE.contains(&r.temperature));
                assert!(SPIKE_NOISE.contains(&r.noise_level));
                assert!(SPIKE_AQI.contains(&r.air_quality_index));
            } else {
                assert!(NORMAL_TEMPERATURE.contains(&r.temperature));
                assert!(NORMAL_NOISE.contains(&r.noise_level));
                assert!(NORMAL_AQI.contains(&r.air_quality_index));
            }
        }
    }

    #[test]
    fn test_no_temperature_in_gap_between_branches() {
        // The two branches leave [31, 36) unreachable; a value there would
        // mean the generation policy leaked between ranges.
        let mut sim = TelemetrySimulator::seeded(42);
        for _ in 0..5000 {
            let r = sim.next_reading();
            assert!(
                !(31.0..36.0).contains(&r.temperature),
                "temperature {} fell in the unreachable gap",
                r.temperature
            );
        }
    }

    #[test]
    fn test_both_branches_are_exercised() {
        let mut sim = TelemetrySimulator::seeded(1);
        let mut spikes = 0usize;
        let mut normals = 0usize;
        for _ in 0..2000 {
            if sim.next_reading().temperature >= 36.0 {
                spikes += 1;
            } else {
                normals += 1;
            }
        }
        assert!(spikes > 0, "spike branch never taken");
        assert!(normals > 0, "normal branch never taken");
        // p = 0.15 with n = 2000: expect roughly 300 spikes. A loose band
        // catches a broken probability without flaking.
        assert!((150..=450).contains(&spikes), "spike count {spikes} far from p=0.15");
    }

    #[test]
    fn test_seeded_simulators_replay_identically() {
        let mut a = TelemetrySimulator::seeded(99);
        let mut b = TelemetrySimulator::seeded(99);
        for _ in 0..100 {
            assert_eq!(a.next_reading(), b.next_reading());
        }
    }
}
