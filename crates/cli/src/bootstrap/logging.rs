use ferrous_dig_domain::Config;
use tracing::info;

/// Installs the global fmt subscriber. Output goes to stderr so the `query`
/// command can keep stdout for JSON.
pub fn init_logging(config: &Config) {
    let log_level = config
        .logging
        .normalized_level()
        .parse()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_target(true)
        .with_thread_ids(false)
        .with_level(true)
        .with_max_level(log_level)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .init();

    info!("Logging initialized at level: {}", config.logging.level);
}
