//! `issue_cache` (icache) - Offline issue state tracking
//!
//! Reads a local dump of Git forge issues, lists the open ones and closes or
//! completes issues by number. The updated dump is printed to stdout.

use issue_cache::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
