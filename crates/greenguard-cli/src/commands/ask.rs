//! One-shot question against the canned-response rules.

use greenguard_core::intent;

pub fn run(query: &str) {
    if query.trim().is_empty() {
        eprintln!("Usage: greenguard ask <question>");
        std::process::exit(2);
    }
    println!("{}", intent::respond(query));
}
