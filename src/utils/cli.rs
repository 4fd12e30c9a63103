//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use std::io::{self, Write as _};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

use crate::config::{Config, DEFAULT_CONFIG_PATH};
use crate::github::{GitHubClient, GitHubService};
use crate::server::app::serve_site;

/// Uwumi's marketing site and admin dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the site config. Defaults apply when the file does not exist.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// Also write logs to a daily rotated file in this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
    /// Uwumi cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

/// What to run
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the site
    Serve {
        /// Port to listen on. Overrides `server.port`.
        #[arg(short, long)]
        port: Option<u16>,
        /// Address to bind to. Overrides `server.bind`.
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Fetch the GitHub analytics once and print them as JSON
    Analytics {
        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`), and optionally to
/// a daily rolling file. The returned guard flushes the file on drop.
fn init_tracing(log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr));
    if let Some(dir) = log_dir {
        let (writer, guard) =
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "uwumi.log"));
        registry
            .with(fmt::layer().with_ansi(false).with_writer(writer))
            .init();
        Some(guard)
    } else {
        registry.init();
        None
    }
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind, or if the analytics cannot be fetched or printed.
pub fn run() -> io::Result<()> {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());
    tracing::debug!("Starting application");
    let mut config = Config::load(&cli.config).unwrap_or_else(|err| {
        tracing::error!(
            "error: could not load config from `{}`",
            cli.config.display()
        );
        tracing::error!("Error: {err:?}");
        std::process::exit(1);
    });

    match cli.subcommands {
        Subcommands::Serve { port, bind } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(bind) = bind {
                config.server.bind = bind;
            }
            serve_site(config)
        }
        Subcommands::Analytics { pretty } => print_analytics(&config, pretty),
    }
}

/// Fetch the analytics for the configured repository and write them to stdout.
#[actix_web::main]
async fn print_analytics(config: &Config, pretty: bool) -> io::Result<()> {
    let client = GitHubClient::new(&config.github).map_err(io::Error::other)?;
    let analytics = GitHubService::new(Arc::new(client))
        .analytics()
        .await
        .map_err(io::Error::other)?;
    let json = if pretty {
        serde_json::to_string_pretty(&analytics)?
    } else {
        serde_json::to_string(&analytics)?
    };
    writeln!(io::stdout().lock(), "{json}")
}
