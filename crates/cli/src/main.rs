use anyhow::Context;
use clap::Parser;
use dnsprobe_domain::{CliOverrides, DnsQuery};
use tracing::info;

mod bootstrap;
mod di;
mod output;

#[derive(Parser, Debug)]
#[command(name = "dnsprobe")]
#[command(version)]
#[command(about = "Send a single DNS query over UDP and print the decoded response")]
struct Cli {
    /// Ask the server to recurse (sets RD)
    #[arg(short = 'r')]
    recursive: bool,

    /// Reverse lookup: TARGET is an IPv4 or IPv6 address
    #[arg(short = 'x')]
    reverse: bool,

    /// Query AAAA instead of A
    #[arg(short = '6')]
    ipv6: bool,

    /// DNS server hostname or IP address
    #[arg(short = 's', long, value_name = "SERVER")]
    server: Option<String>,

    /// DNS server port [default: 53]
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Seconds to wait for resolution and for the reply
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print a hex dump of the sent and received packets
    #[arg(long)]
    dump: bool,

    /// Domain name, or address with -x
    target: String,
}

impl Cli {
    fn query(&self) -> DnsQuery {
        let query = if self.reverse {
            DnsQuery::reverse(&self.target)
        } else {
            DnsQuery::forward(&self.target)
        };
        query.with_ipv6(self.ipv6).with_recursion(self.recursive)
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            server: self.server.clone(),
            port: self.port,
            timeout_secs: self.timeout,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;
    bootstrap::init_logging(&config);

    let server = config
        .upstream
        .server
        .clone()
        .context("No DNS server given")?;
    let query = cli.query();

    info!(
        lookup_target = %query.target,
        mode = %query.mode,
        qtype = %query.qtype(),
        server = %server,
        port = config.upstream.port,
        "Starting lookup"
    );

    let services = di::LookupServices::new(&config);
    let outcome = services
        .lookup
        .execute(&server, config.upstream.port, &query)
        .await
        .with_context(|| format!("Lookup of {} via {} failed", query.target, server))?;

    if cli.dump {
        print!(
            "{}",
            output::render_dump(&outcome.query_bytes, &outcome.response_bytes)
        );
    }
    print!("{}", output::render_response(&outcome.response));

    Ok(())
}
