//! Read-only reference data consumed by the dashboard shell.
//!
//! Alerts and the forecast curve are fixed tables. The tree map combines a
//! few fixed story nodes (the critical T-1092 and two warnings) with a batch
//! of randomly placed safe nodes generated once per session.

use rand::Rng;
use serde::Serialize;

/// Severity of a standing alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertStatus {
    Critical,
    Warning,
    Stable,
}

/// One entry in the alert feed.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub id: u32,
    pub tree_id: &'static str,
    pub location: &'static str,
    /// Risk score, 0–100.
    pub risk: u8,
    pub status: AlertStatus,
    pub category: &'static str,
    /// Relative time label, display-only.
    pub time: &'static str,
}

/// The standing alert feed.
pub const ALERTS: &[Alert] = &[
    Alert {
        id: 1,
        tree_id: "T-1092",
        location: "Nguyễn Trãi, Thanh Xuân",
        risk: 92,
        status: AlertStatus::Critical,
        category: "Nghiêng > 15°",
        time: "2 phút trước",
    },
    Alert {
        id: 2,
        tree_id: "T-0451",
        location: "Trần Phú, Hà Đông",
        risk: 78,
        status: AlertStatus::Warning,
        category: "Rung lắc mạnh",
        time: "15 phút trước",
    },
    Alert {
        id: 3,
        tree_id: "T-2201",
        location: "Láng Hạ, Đống Đa",
        risk: 45,
        status: AlertStatus::Stable,
        category: "Bảo trì định kỳ",
        time: "1 giờ trước",
    },
];

/// One point on the risk forecast curve.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPoint {
    pub time: &'static str,
    /// Forecast risk percentage, 0–100.
    pub risk: u8,
}

/// Afternoon risk forecast. The 16:00–17:00 window carries the story's
/// storm peak.
pub const FORECAST: &[ForecastPoint] = &[
    ForecastPoint { time: "14:00", risk: 20 },
    ForecastPoint { time: "15:00", risk: 35 },
    ForecastPoint { time: "16:00", risk: 85 },
    ForecastPoint { time: "17:00", risk: 90 },
    ForecastPoint { time: "18:00", risk: 60 },
    ForecastPoint { time: "19:00", risk: 30 },
];

/// Health of a tree node on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeStatus {
    Safe,
    Warning,
    Critical,
}

/// A monitored tree on the city map. Coordinates are percentages of the
/// map area, 0–100.
#[derive(Debug, Clone, Serialize)]
pub struct TreeNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub status: TreeStatus,
    /// Measured tilt in degrees.
    pub tilt: f64,
}

/// Number of randomly placed safe nodes.
pub const SAFE_NODE_COUNT: usize = 35;

/// Build the map fixture: fixed critical/warning nodes plus
/// [`SAFE_NODE_COUNT`] random safe nodes.
pub fn tree_nodes<R: Rng>(rng: &mut R) -> Vec<TreeNode> {
    let mut nodes = vec![
        TreeNode {
            id: "T-1092".to_string(),
            x: 60.0,
            y: 40.0,
            status: TreeStatus::Critical,
            tilt: 16.0,
        },
        TreeNode {
            id: "T-0451".to_string(),
            x: 30.0,
            y: 70.0,
            status: TreeStatus::Warning,
            tilt: 8.0,
        },
        TreeNode {
            id: "T-0112".to_string(),
            x: 80.0,
            y: 25.0,
            status: TreeStatus::Warning,
            tilt: 7.0,
        },
    ];

    for i in 0..SAFE_NODE_COUNT {
        nodes.push(TreeNode {
            id: format!("T-{}", 1000 + i),
            x: rng.random_range(10..90) as f64,
            y: rng.random_range(10..90) as f64,
            status: TreeStatus::Safe,
            tilt: rng.random_range(0.0..2.0),
        });
    }
    nodes
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_alert_feed_shape() {
        assert_eq!(ALERTS.len(), 3);
        assert_eq!(ALERTS[0].status, AlertStatus::Critical);
        assert_eq!(ALERTS[0].tree_id, "T-1092");
        assert!(ALERTS.iter().all(|a| a.risk <= 100));
    }

    #[test]
    fn test_forecast_peaks_in_storm_window() {
        assert_eq!(FORECAST.len(), 6);
        let peak = FORECAST.iter().max_by_key(|p| p.risk).unwrap();
        assert_eq!(peak.time, "17:00");
        assert!(FORECAST.iter().all(|p| p.risk <= 100));
    }

    #[test]
    fn test_tree_nodes_fixture_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let nodes = tree_nodes(&mut rng);
        assert_eq!(nodes.len(), 3 + SAFE_NODE_COUNT);

        let critical: Vec<_> = nodes
            .iter()
            .filter(|n| n.status == TreeStatus::Critical)
            .collect();
        assert_eq!(critical.len(), 1);
        assert_eq!(critical[0].id, "T-1092");
        assert_eq!(critical[0].tilt, 16.0);

        assert_eq!(
            nodes
                .iter()
                .filter(|n| n.status == TreeStatus::Warning)
                .count(),
            2
        );
    }

    #[test]
    fn test_safe_nodes_stay_on_the_map() {
        let mut rng = StdRng::seed_from_u64(11);
        for node in tree_nodes(&mut rng) {
            assert!((0.0..=100.0).contains(&node.x));
            assert!((0.0..=100.0).contains(&node.y));
            if node.status == TreeStatus::Safe {
                assert!((10.0..90.0).contains(&node.x));
                assert!((10.0..90.0).contains(&node.y));
                assert!(node.tilt < 2.0);
            }
        }
    }

    #[test]
    fn test_fixtures_serialize_to_json() {
        let json = serde_json::to_string(ALERTS).unwrap();
        assert!(json.contains("\"CRITICAL\""));
        let json = serde_json::to_string(FORECAST).unwrap();
        assert!(json.contains("14:00"));
    }
}
