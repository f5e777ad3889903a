//! Print the demo conversation script in playback order.

use greenguard_core::scenario::{RESET_MESSAGE, SCRIPT, ScriptRole};

pub fn run() {
    for (i, turn) in SCRIPT.iter().enumerate() {
        let who = match turn.role {
            ScriptRole::User => "user",
            ScriptRole::Assistant => "assistant",
        };
        println!("{:>2}. [{who}] {}", i + 1, turn.text);
    }
    println!("    (after the last turn the chat resets to: \"{RESET_MESSAGE}\")");
}
