// SPDX-FileCopyrightText: 2026 Tripmate Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tripmate - travel destination data and session from the command line.
//!
//! This is the binary entry point.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod account;
mod browse;
mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tripmate_config::TripmateConfig;
use tripmate_core::{Coordinate, Language, TripmateError};
use tripmate_gateway::RemoteGateway;
use tripmate_session::{PreferenceStore, SessionStore};
use tripmate_storage::SqliteKvStore;

use crate::account::Switch;

/// Tripmate - travel destination data and session from the command line.
#[derive(Parser, Debug)]
#[command(name = "tripmate", version, about, long_about = None)]
struct Cli {
    /// Print machine-readable JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Read configuration from this file instead of the default locations.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List countries (featured ones are marked).
    Countries,
    /// List the cities of a country.
    Cities { country: String },
    /// List tours, optionally filtered.
    Tours {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// List attractions, optionally filtered.
    Attractions {
        #[arg(long)]
        country: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Look up a city's coordinates.
    Coords { city: String },
    /// Find the landmark closest to a position.
    Nearest {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },
    /// Store an auth token and sign in.
    Login { token: String },
    /// Remove the stored auth token.
    Logout,
    /// Show session state and adapter health.
    Status,
    /// Show or change preferences.
    Settings {
        #[arg(long, value_enum)]
        sound: Option<Switch>,
        #[arg(long)]
        language: Option<Language>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => tripmate_config::load_and_validate_path(path),
        None => tripmate_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            tripmate_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.app.log_level);

    if let Err(e) = run(cli, &config).await {
        eprintln!("tripmate: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: &TripmateConfig) -> Result<(), TripmateError> {
    let json = cli.json;
    match cli.command {
        Commands::Countries => browse::run_countries(&gateway(config)?, json).await,
        Commands::Cities { country } => {
            browse::run_cities(&gateway(config)?, &country, json).await
        }
        Commands::Tours { country, city } => {
            browse::run_tours(&gateway(config)?, country.as_deref(), city.as_deref(), json).await
        }
        Commands::Attractions { country, city } => {
            browse::run_attractions(&gateway(config)?, country.as_deref(), city.as_deref(), json)
                .await
        }
        Commands::Coords { city } => browse::run_coords(&gateway(config)?, &city, json).await,
        Commands::Nearest { lat, lng } => browse::run_nearest(Coordinate::new(lat, lng), json),
        Commands::Login { token } => {
            with_storage(config, |kv| async move {
                let session = SessionStore::new(kv);
                account::run_login(&session, &token, json).await
            })
            .await
        }
        Commands::Logout => {
            with_storage(config, |kv| async move {
                let session = SessionStore::new(kv);
                account::run_logout(&session, json).await
            })
            .await
        }
        Commands::Status => {
            let gateway = gateway(config)?;
            with_storage(config, |kv| async move {
                let session = SessionStore::new(kv.clone());
                account::run_status(&session, kv.as_ref(), &gateway, json).await
            })
            .await
        }
        Commands::Settings { sound, language } => {
            with_storage(config, |kv| async move {
                let mut prefs = PreferenceStore::new(kv);
                account::run_settings(&mut prefs, sound, language, json).await
            })
            .await
        }
    }
}

fn gateway(config: &TripmateConfig) -> Result<RemoteGateway, TripmateError> {
    RemoteGateway::new(&config.gateway)
}

/// Open the key-value store, run `f`, then checkpoint and close.
async fn with_storage<F, Fut>(config: &TripmateConfig, f: F) -> Result<(), TripmateError>
where
    F: FnOnce(Arc<SqliteKvStore>) -> Fut,
    Fut: std::future::Future<Output = Result<(), TripmateError>>,
{
    let kv = Arc::new(SqliteKvStore::open(config.storage.clone()).await?);
    let result = f(kv.clone()).await;
    if let Err(e) = kv.close().await {
        tracing::warn!(error = %e, "failed to checkpoint storage on close");
    }
    result
}

/// Initialize the tracing subscriber with the configured log level.
///
/// Logs go to stderr so `--json` output on stdout stays parseable.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tripmate={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    #[cfg(not(target_env = "msvc"))]
    fn jemalloc_is_active() {
        use tikv_jemalloc_ctl::{epoch, stats};
        epoch::advance().unwrap();
        let allocated = stats::allocated::read().unwrap();
        assert!(allocated > 0, "jemalloc should report non-zero allocation");
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_nearest_with_negative_coordinates() {
        let cli = Cli::try_parse_from(["tripmate", "nearest", "--lat", "-33.86", "--lng", "151.2"])
            .unwrap();
        match cli.command {
            Commands::Nearest { lat, lng } => {
                assert_eq!(lat, -33.86);
                assert_eq!(lng, 151.2);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_settings_switches() {
        let cli = Cli::try_parse_from([
            "tripmate",
            "--json",
            "settings",
            "--sound",
            "on",
            "--language",
            "turkish",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Commands::Settings { sound, language } => {
                assert_eq!(sound, Some(Switch::On));
                assert_eq!(language, Some(Language::Turkish));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_language() {
        assert!(Cli::try_parse_from(["tripmate", "settings", "--language", "klingon"]).is_err());
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from(["tripmate", "countries", "--json"]).unwrap();
        assert!(cli.json);
    }
}
