use clap::{Parser, Subcommand};
use ferrous_dig_domain::{CliOverrides, DomainName};
use std::net::SocketAddr;
use tracing::{info, warn};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-dig")]
#[command(version = "0.1.0")]
#[command(about = "Ferrous Dig - query every authoritative name server of a domain")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Web server port
    #[arg(short = 'w', long)]
    web_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Recursive resolver used for discovery (repeatable, `ip` or `ip:port`)
    #[arg(long = "resolver", value_name = "ADDR")]
    resolvers: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Query one domain and print the result as JSON
    Query {
        /// Domain to look up
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        web_port: cli.web_port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        resolvers: cli.resolvers.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(cli.config.as_deref(), &config);

    let services = di::DigServices::new(&config)?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            info!("Starting Ferrous Dig v{}", env!("CARGO_PKG_VERSION"));

            let web_addr: SocketAddr =
                format!("{}:{}", config.server.bind_address, config.server.web_port)
                    .parse()
                    .map_err(|e| {
                        anyhow::anyhow!(
                            "Invalid bind address '{}': {}",
                            config.server.bind_address,
                            e
                        )
                    })?;

            server::start_web_server(
                web_addr,
                services.app_state(),
                &config.server.cors_allowed_origins,
            )
            .await?;

            info!("Server shutdown complete");
        }
        Command::Query { name } => {
            let bundles = match DomainName::parse(&name) {
                Ok(domain) => services.query_authoritative.execute(&domain).await,
                Err(e) => {
                    warn!(name = %name, error = %e, "Invalid domain name");
                    Vec::new()
                }
            };
            println!("{}", serde_json::to_string_pretty(&bundles)?);
        }
    }

    Ok(())
}
