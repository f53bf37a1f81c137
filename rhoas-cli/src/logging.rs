use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sink for user-facing informational messages
pub trait Logger: Send + Sync {
    fn info(&self, msg: &str);
}

/// Logger that forwards to the global tracing subscriber
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, msg: &str) {
        tracing::info!("{msg}");
    }
}

/// Install the stderr subscriber, filtered by `RHOAS_LOG`
pub fn init_log() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("RHOAS_LOG")
                .from_env_lossy(),
        )
        .init();
}
