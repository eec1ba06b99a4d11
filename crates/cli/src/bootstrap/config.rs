use ferrous_dig_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;
    Ok(config)
}

/// Logged separately from loading: the subscriber is only installed once
/// the configured level is known.
pub fn log_config(config_path: Option<&str>, config: &Config) {
    info!(
        config_file = config_path.unwrap_or("default"),
        web_port = config.server.web_port,
        bind = %config.server.bind_address,
        resolvers = ?config.dns.default_resolvers,
        query_timeout_ms = config.dns.query_timeout,
        tcp_fallback = config.dns.tcp_fallback,
        "Configuration loaded"
    );
}
