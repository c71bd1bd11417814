//! rStatusboard main entrypoint.

use rstatusboard::run;
use rstatusboard::ui::messages::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Diagnostics go to stderr; stdout is for the board itself.
    // Override with RSTATUSBOARD_LOG=debug.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("RSTATUSBOARD_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
