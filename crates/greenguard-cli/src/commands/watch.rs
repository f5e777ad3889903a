//! Headless telemetry watcher: readings plus alarm evaluation, no TUI.

use std::time::Duration;

use greenguard_core::alarm::evaluate;
use greenguard_core::telemetry::TelemetrySimulator;

pub fn run(ticks: u32, period_ms: u64, seed: Option<u64>, json: bool) {
    let mut sim = match seed {
        Some(seed) => TelemetrySimulator::seeded(seed),
        None => TelemetrySimulator::new(),
    };

    if !json {
        println!("{:>5}  {:>8}  {:>8}  {:>5}  alarm", "tick", "temp °C", "noise dB", "AQI");
    }

    for tick in 0..ticks {
        let reading = sim.next_reading();
        let alarm = evaluate(&reading);

        if json {
            let line = serde_json::json!({
                "tick": tick,
                "reading": reading,
                "alarm": alarm,
            });
            println!("{line}");
        } else {
            let flags = if alarm.is_alarmed {
                alarm
                    .breached
                    .iter()
                    .map(|m| m.to_string())
                    .collect::<Vec<_>>()
                    .join(",")
            } else {
                "-".to_string()
            };
            println!(
                "{tick:>5}  {:>8.1}  {:>8.1}  {:>5}  {flags}",
                reading.temperature, reading.noise_level, reading.air_quality_index
            );
        }

        if period_ms > 0 && tick + 1 < ticks {
            std::thread::sleep(Duration::from_millis(period_ms));
        }
    }
}
