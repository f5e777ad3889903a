//! Dashboard view identifiers and the demo rotation cycle.

use serde::Serialize;

/// A dashboard view. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    Overview,
    Architecture,
    Map,
    Devices,
    Alerts,
}

/// Every view, in sidebar order.
pub const ALL_VIEWS: [ViewId; 5] = [
    ViewId::Overview,
    ViewId::Architecture,
    ViewId::Map,
    ViewId::Devices,
    ViewId::Alerts,
];

/// Views visited by demo-mode rotation, in visit order.
pub const DEMO_CYCLE: [ViewId; 3] = [ViewId::Overview, ViewId::Architecture, ViewId::Map];

impl ViewId {
    /// Human-readable sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Architecture => "Architecture",
            Self::Map => "Digital Map",
            Self::Devices => "AIoT Devices",
            Self::Alerts => "Alerts",
        }
    }
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::Architecture => write!(f, "architecture"),
            Self::Map => write!(f, "map"),
            Self::Devices => write!(f, "devices"),
            Self::Alerts => write!(f, "alerts"),
        }
    }
}

/// The view an active rotation moves to from `current`.
///
/// A view inside [`DEMO_CYCLE`] advances to its successor (wrapping); a view
/// outside the cycle rotates as if it were at position 0, so the next stop
/// is the cycle's second entry.
pub fn next_in_cycle(current: ViewId) -> ViewId {
    let pos = DEMO_CYCLE.iter().position(|v| *v == current).unwrap_or(0);
    DEMO_CYCLE[(pos + 1) % DEMO_CYCLE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_from_map_through_overview() {
        // Starting at Map, three rotations visit Overview, Architecture, Map.
        let mut view = ViewId::Map;
        let mut visited = Vec::new();
        for _ in 0..3 {
            view = next_in_cycle(view);
            visited.push(view);
        }
        assert_eq!(
            visited,
            vec![ViewId::Overview, ViewId::Architecture, ViewId::Map]
        );
    }

    #[test]
    fn test_manual_selection_inside_cycle_rebases_rotation() {
        assert_eq!(next_in_cycle(ViewId::Architecture), ViewId::Map);
    }

    #[test]
    fn test_views_outside_cycle_rotate_from_position_zero() {
        assert_eq!(next_in_cycle(ViewId::Devices), ViewId::Architecture);
        assert_eq!(next_in_cycle(ViewId::Alerts), ViewId::Architecture);
    }

    #[test]
    fn test_labels_are_distinct() {
        let labels: Vec<&str> = ALL_VIEWS.iter().map(|v| v.label()).collect();
        let mut dedup = labels.clone();
        dedup.dedup();
        assert_eq!(labels.len(), dedup.len());
    }
}
