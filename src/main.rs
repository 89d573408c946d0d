//! Lattice Auth - CLI entrypoint.
//!
//! Usage:
//!   lattice-auth auth enable
//!   lattice-auth user add alice secret
//!   lattice-auth role grant-permission reader read /app/ --prefix
//!   lattice-auth user grant-role alice reader
//!   lattice-auth --config config/lattice-auth.toml role get reader

use anyhow::{Context, Result};
use clap::Parser;
use lattice_auth::cli::commands::{
    init_tracing, load_config, run_auth, run_authenticate, run_role, run_user,
};
use lattice_auth::cli::{Cli, Commands};
use lattice_auth::config::ConfigOverrides;
use lattice_auth::AuthClient;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.map(PathBuf::from);
    let overrides = ConfigOverrides {
        endpoint: cli.endpoint,
        log_level: cli.log_level,
    };
    let config = load_config(config_path.as_deref(), &overrides)?;

    init_tracing(&config.telemetry.log_level);

    let client = AuthClient::connect(&config)
        .with_context(|| format!("failed to create client for {}", config.client.endpoint))?;

    match cli.command {
        Commands::Auth(args) => run_auth(&client, args).await,
        Commands::Authenticate(args) => run_authenticate(&client, args).await,
        Commands::User(args) => run_user(&client, args).await,
        Commands::Role(args) => run_role(&client, args).await,
    }
}
