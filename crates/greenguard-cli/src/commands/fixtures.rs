//! Dump the read-only reference fixtures as JSON.

use greenguard_core::fixtures::{ALERTS, FORECAST, tree_nodes};

pub fn run(output: Option<&str>, seed: Option<u64>) {
    let nodes = match seed {
        Some(seed) => {
            use rand::SeedableRng;
            tree_nodes(&mut rand::rngs::StdRng::seed_from_u64(seed))
        }
        None => tree_nodes(&mut rand::rng()),
    };

    let doc = serde_json::json!({
        "alerts": ALERTS,
        "forecast": FORECAST,
        "tree_nodes": nodes,
    });
    let pretty = serde_json::to_string_pretty(&doc).expect("fixtures serialize");

    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &pretty) {
                eprintln!("Failed to write {path}: {e}");
                std::process::exit(1);
            }
            println!("Wrote fixtures to {path}");
        }
        None => println!("{pretty}"),
    }
}
