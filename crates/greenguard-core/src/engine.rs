//! Single-threaded simulation engine.
//!
//! The engine owns every piece of mutable state — the latest reading, the
//! conversation, the active view, the demo flag — and all timer handles.
//! A shell drives it with two calls: [`Engine::handle`] for user input and
//! [`Engine::advance`] from its event loop, passing the current instant.
//! Everything else is read-only observables. No threads, no async runtime:
//! "concurrency" is several independent deadlines checked per advance call.
//!
//! Within one `advance` call state reads observe the most recent write, but
//! firing order across independent timers is an implementation detail —
//! callers must not rely on telemetry and scenario ticks interleaving in a
//! particular way.

use std::time::{Duration, Instant};

use crate::alarm::{self, AlarmState};
use crate::chat::{ChatMessage, ConversationStore, Sender};
use crate::fixtures::{self, TreeNode};
use crate::intent;
use crate::scenario::{ScenarioPlayer, ScriptRole, TickEffect};
use crate::telemetry::{SensorReading, TelemetrySimulator};
use crate::timer::{Delayed, Periodic};
use crate::view::{self, ViewId};

/// Cadence of synthetic sensor readings.
pub const TELEMETRY_PERIOD: Duration = Duration::from_secs(4);
/// Cadence of scripted conversation turns in demo mode.
pub const SCENARIO_PERIOD: Duration = Duration::from_secs(4);
/// Cadence of view rotation in demo mode.
pub const ROTATION_PERIOD: Duration = Duration::from_secs(8);
/// Simulated "thinking" delay before a manual reply appears.
pub const REPLY_LATENCY: Duration = Duration::from_millis(1500);
/// Simulated duration of a report export.
pub const EXPORT_DELAY: Duration = Duration::from_secs(2);

/// Name reported when an export completes. Nothing is written to disk.
pub const REPORT_NAME: &str = "GREENGUARD_REPORT.pdf";

/// User-initiated events from the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    SelectView(ViewId),
    ToggleDemoMode,
    SubmitMessage(String),
    ExportReport,
}

/// A scheduled canned reply to a submitted question.
struct PendingReply {
    due: Instant,
    response: &'static str,
}

/// The simulation and alert/response core.
pub struct Engine {
    simulator: TelemetrySimulator,
    reading: SensorReading,
    alarm: AlarmState,

    chat: ConversationStore,
    composing: bool,
    pending_replies: Vec<PendingReply>,

    view: ViewId,
    demo_mode: bool,
    scenario: ScenarioPlayer,

    telemetry_timer: Periodic,
    scenario_timer: Periodic,
    rotation_timer: Periodic,
    export_timer: Delayed,
    last_export: Option<&'static str>,

    tree_nodes: Vec<TreeNode>,
}

impl Engine {
    /// Engine seeded from OS randomness. `now` anchors the telemetry timer.
    pub fn new(now: Instant) -> Self {
        Self::build(TelemetrySimulator::new(), &mut rand::rng(), now)
    }

    /// Deterministic engine for tests and reproducible demos.
    pub fn seeded(seed: u64, now: Instant) -> Self {
        use rand::SeedableRng;
        let mut map_rng = rand::rngs::StdRng::seed_from_u64(seed ^ 0x6d61_70);
        Self::build(TelemetrySimulator::seeded(seed), &mut map_rng, now)
    }

    fn build<R: rand::Rng>(simulator: TelemetrySimulator, map_rng: &mut R, now: Instant) -> Self {
        let mut telemetry_timer = Periodic::new(TELEMETRY_PERIOD);
        telemetry_timer.start(now);

        let reading = SensorReading::initial();
        let alarm = alarm::evaluate(&reading);

        Self {
            simulator,
            reading,
            alarm,
            chat: ConversationStore::new(),
            composing: false,
            pending_replies: Vec::new(),
            view: ViewId::Overview,
            demo_mode: false,
            scenario: ScenarioPlayer::new(),
            telemetry_timer,
            scenario_timer: Periodic::new(SCENARIO_PERIOD),
            rotation_timer: Periodic::new(ROTATION_PERIOD),
            export_timer: Delayed::new(EXPORT_DELAY),
            last_export: None,
            tree_nodes: fixtures::tree_nodes(map_rng),
        }
    }

    // -----------------------------------------------------------------------
    // Input events
    // -----------------------------------------------------------------------

    /// Route a user-initiated event.
    pub fn handle(&mut self, event: InputEvent, now: Instant) {
        match event {
            InputEvent::SelectView(view) => self.select_view(view),
            InputEvent::ToggleDemoMode => self.toggle_demo_mode(now),
            InputEvent::SubmitMessage(text) => self.submit_message(&text, now),
            InputEvent::ExportReport => self.export_report(now),
        }
    }

    /// Switch the active view. With demo mode on, rotation continues from
    /// the selected view's position in the cycle.
    pub fn select_view(&mut self, view: ViewId) {
        log::debug!("select view {view}");
        self.view = view;
    }

    /// Flip the demo flag. Turning it on arms the scenario and rotation
    /// timers; turning it off cancels both so no late tick can fire.
    pub fn toggle_demo_mode(&mut self, now: Instant) {
        self.demo_mode = !self.demo_mode;
        log::debug!("demo mode {}", if self.demo_mode { "on" } else { "off" });
        if self.demo_mode {
            self.scenario.activate();
            self.scenario_timer.start(now);
            self.rotation_timer.start(now);
        } else {
            self.scenario.deactivate();
            self.scenario_timer.stop();
            self.rotation_timer.stop();
            // The scripted "composing" indicator dies with the script; a
            // manual reply still in flight keeps it.
            if self.pending_replies.is_empty() {
                self.composing = false;
            }
        }
    }

    /// Submit a free-text question. Empty or whitespace-only input is a
    /// no-op. The user message appears immediately; the canned reply lands
    /// after [`REPLY_LATENCY`] with the composing indicator shown meanwhile.
    pub fn submit_message(&mut self, text: &str, now: Instant) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.chat.append(Sender::User, text);
        self.composing = true;
        self.pending_replies.push(PendingReply {
            due: now + REPLY_LATENCY,
            response: intent::respond(text),
        });
    }

    /// Kick off a report export. Fire-and-forget: completion shows up in
    /// [`Engine::last_export`] after [`EXPORT_DELAY`]. Re-exporting while
    /// one is pending is a no-op.
    pub fn export_report(&mut self, now: Instant) {
        self.export_timer.start(now);
    }

    // -----------------------------------------------------------------------
    // Timer ticks
    // -----------------------------------------------------------------------

    /// Fire every due timer. Call this from the shell's event loop with the
    /// current instant; each timer fires at most once per call.
    pub fn advance(&mut self, now: Instant) {
        if self.telemetry_timer.fire(now) {
            self.reading = self.simulator.next_reading();
            self.alarm = alarm::evaluate(&self.reading);
            log::debug!(
                "telemetry tick: {:.1}°C {:.0}dB AQI {} (alarmed: {})",
                self.reading.temperature,
                self.reading.noise_level,
                self.reading.air_quality_index,
                self.alarm.is_alarmed
            );
        }

        if self.demo_mode && self.scenario_timer.fire(now) {
            match self.scenario.tick(&mut self.chat) {
                TickEffect::Turn(ScriptRole::User) => self.composing = true,
                TickEffect::Turn(ScriptRole::Assistant) | TickEffect::Reset => {
                    self.composing = false
                }
                TickEffect::Parked => {}
            }
        }

        let chat = &mut self.chat;
        let mut delivered = false;
        self.pending_replies.retain(|reply| {
            if now >= reply.due {
                chat.append(Sender::Assistant, reply.response);
                delivered = true;
                false
            } else {
                true
            }
        });
        if delivered && self.pending_replies.is_empty() {
            self.composing = false;
        }

        if self.demo_mode && self.rotation_timer.fire(now) {
            self.view = view::next_in_cycle(self.view);
            log::debug!("rotation tick -> {}", self.view);
        }

        if self.export_timer.fire(now) {
            self.last_export = Some(REPORT_NAME);
            log::info!("report export finished: {REPORT_NAME}");
        }
    }

    // -----------------------------------------------------------------------
    // Observables
    // -----------------------------------------------------------------------

    /// Latest sensor reading.
    pub fn reading(&self) -> &SensorReading {
        &self.reading
    }

    /// Alarm decision for the latest reading.
    pub fn alarm(&self) -> &AlarmState {
        &self.alarm
    }

    /// Ordered conversation log.
    pub fn messages(&self) -> &[ChatMessage] {
        self.chat.all()
    }

    /// True while a reply (scripted or manual) is "being typed".
    pub fn composing(&self) -> bool {
        self.composing
    }

    pub fn active_view(&self) -> ViewId {
        self.view
    }

    pub fn demo_mode(&self) -> bool {
        self.demo_mode
    }

    /// Name of the last completed export, if any.
    pub fn last_export(&self) -> Option<&'static str> {
        self.last_export
    }

    /// True while an export is running.
    pub fn export_pending(&self) -> bool {
        self.export_timer.is_pending()
    }

    /// The session's tree map fixture.
    pub fn tree_nodes(&self) -> &[TreeNode] {
        &self.tree_nodes
    }
}
