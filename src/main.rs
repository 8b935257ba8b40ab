//! CLI entry point for blogsite

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogsite::config::SiteConfig;
use blogsite::generator::FeedFormat;
use blogsite::Site;

#[derive(Parser)]
#[command(name = "blogsite")]
#[command(version)]
#[command(about = "Builds a blog once at boot and serves it", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the site and serve it
    #[command(alias = "s")]
    Serve {
        /// Port to listen on (defaults to $PORT, then the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// IP address to bind to
        #[arg(short, long, default_value = "0.0.0.0")]
        ip: String,
    },

    /// Build the site and report what it contains
    Check,

    /// List posts, newest first
    List,

    /// Print a feed to stdout
    Feed {
        #[arg(value_enum)]
        format: FeedFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogsite=debug,info"
    } else {
        "blogsite=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    let config = SiteConfig::load_from_dir(&base_dir)?;
    let port = resolve_port(&config);

    // Nothing listens until the whole site is built
    let site = Site::build(&base_dir, config).context("site build failed")?;

    match cli.command {
        Commands::Serve { port: cli_port, ip } => {
            let port = cli_port.unwrap_or(port);
            blogsite::server::start(Arc::new(site), &ip, port).await?;
        }

        Commands::Check => blogsite::commands::check::run(&site, &mut io::stdout().lock())?,

        Commands::List => blogsite::commands::list::run(&site, &mut io::stdout().lock())?,

        Commands::Feed { format } => {
            blogsite::commands::feed::run(&site, format, &mut io::stdout().lock())?
        }
    }

    Ok(())
}

/// `$PORT` wins over the config file
fn resolve_port(config: &SiteConfig) -> u16 {
    match std::env::var("PORT") {
        Ok(port) => port.parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid PORT {:?}, using {}", port, config.port);
            config.port
        }),
        Err(_) => config.port,
    }
}
