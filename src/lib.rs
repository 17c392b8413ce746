pub mod config;
pub mod models;
pub mod scoring; // Severity Scorer
pub mod advice; // Advice Requester
pub mod tracker; // Symptom Tracker page
pub mod journal; // Food & Lifestyle Journal page
pub mod rewards; // Gamification page
pub mod home;
pub mod predictor;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. Logs go to stderr so command
/// output on stdout stays clean.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
