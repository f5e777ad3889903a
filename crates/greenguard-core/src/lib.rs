//! # greenguard-core
//!
//! Simulation core for the GreenGuard urban tree-monitoring demo.
//!
//! Everything here is client-side simulation: synthetic telemetry on a
//! schedule, threshold rules deciding when the dashboard is in an alarm
//! state, a scripted demo conversation, view rotation, and a lookup-table
//! assistant. There is no sensor ingestion, no persistence, no network and
//! no inference — the "AI Core" is a label, not a model.
//!
//! ## Quick start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use greenguard_core::engine::{Engine, InputEvent};
//!
//! let t0 = Instant::now();
//! let mut engine = Engine::seeded(7, t0);
//!
//! engine.handle(InputEvent::ToggleDemoMode, t0);
//! engine.advance(t0 + Duration::from_secs(4));
//!
//! assert!(engine.demo_mode());
//! assert!(engine.messages().len() > 1);
//! ```
//!
//! ## Architecture
//!
//! Independent components, composed by [`engine::Engine`]:
//!
//! - [`telemetry`] — synthetic readings every 4 s (two-branch spike policy)
//! - [`alarm`] — pure threshold evaluation over the latest reading
//! - [`intent`] — ordered keyword rules mapping questions to canned replies
//! - [`scenario`] — Idle/Playing/Exhausted playback of the demo script
//! - [`view`] — view identifiers and the demo rotation cycle
//! - [`chat`] — the append-only conversation store both chat paths write to
//! - [`timer`] — owned deadline handles with idempotent start/stop
//! - [`fixtures`] — read-only alert/forecast/map reference data
//!
//! The core is single-threaded and cooperative: a shell calls
//! [`engine::Engine::advance`] from its event loop and every due timer
//! fires there. Cancellation is dropping or stopping a handle, so no
//! callback can outlive its owner.

pub mod alarm;
pub mod chat;
pub mod engine;
pub mod fixtures;
pub mod intent;
pub mod scenario;
pub mod telemetry;
pub mod timer;
pub mod view;

pub use alarm::{AlarmState, Metric, evaluate};
pub use chat::{ChatMessage, ConversationStore, Sender};
pub use engine::{Engine, InputEvent};
pub use fixtures::{ALERTS, Alert, AlertStatus, FORECAST, ForecastPoint, TreeNode, TreeStatus};
pub use intent::respond;
pub use scenario::{PlayerState, SCRIPT, ScenarioPlayer, ScriptRole, ScriptTurn};
pub use telemetry::{SensorReading, TelemetrySimulator};
pub use view::ViewId;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
