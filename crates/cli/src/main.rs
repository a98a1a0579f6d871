use clap::Parser;
use rootwalk_domain::CliOverrides;
use std::net::Ipv4Addr;
use tracing::debug;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "rootwalk")]
#[command(version = "0.1.0")]
#[command(about = "Resolve a hostname by walking DNS delegations from a root server")]
struct Cli {
    /// Domain name to resolve
    #[arg(value_name = "DOMAIN")]
    domain: String,

    /// Record type sent in the top-level question (A, NS, CNAME). The walk
    /// only finishes on an A record; an NS or CNAME answer that carries no
    /// address fails.
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: String,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Root nameserver to start from
    #[arg(long, value_name = "IP")]
    root: Option<Ipv4Addr>,

    /// Nameserver port
    #[arg(long)]
    port: Option<u16>,

    /// Maximum nested CNAME / nameserver lookups
    #[arg(long)]
    max_depth: Option<usize>,

    /// Maximum queries for the whole resolution
    #[arg(long)]
    max_queries: Option<usize>,

    /// Per-query timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print every query sent before the answer
    #[arg(long)]
    trace: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        root_server: cli.root,
        port: cli.port,
        max_depth: cli.max_depth,
        max_queries: cli.max_queries,
        query_timeout_secs: cli.timeout,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        root = %config.resolver.root_server,
        "Starting rootwalk"
    );

    let services = di::Services::new(&config);

    let resolution = services
        .resolve_host
        .execute(&cli.domain, &cli.record_type)
        .await?;

    if cli.trace {
        for hop in &resolution.hops {
            println!("{}", hop);
        }
    }
    println!("{}", resolution.address);

    Ok(())
}
