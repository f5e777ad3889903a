pub mod ask;
pub mod fixtures;
pub mod run;
pub mod script;
pub mod watch;

use std::time::Instant;

use greenguard_core::engine::Engine;

/// Build an engine, seeded when the user asked for reproducibility.
pub fn make_engine(seed: Option<u64>, now: Instant) -> Engine {
    match seed {
        Some(seed) => Engine::seeded(seed, now),
        None => Engine::new(now),
    }
}
