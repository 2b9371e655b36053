//! comments - artifact comment payload tool
//!
//! Decode, check and inspect comment payloads from the comments service.
//!
//! ## Quick Start
//!
//! ```bash
//! # Show a page of comments as a thread tree
//! comments inspect page.json
//!
//! # Check a page against the model invariants
//! comments check page.json
//!
//! # Build the query for the page after page.json
//! comments query --from-page page.json --expand all
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
