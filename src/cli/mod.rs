//! Command-line interface.
//!
//! etcdctl-style front end over [`crate::auth::AuthClient`].

pub mod commands;

use clap::{Parser, Subcommand};

/// Lattice Auth - manage etcd v3 users, roles and permissions.
#[derive(Parser, Debug)]
#[command(name = "lattice-auth")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Endpoint URL, overriding the configuration file.
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Enable or disable authentication.
    Auth(commands::AuthArgs),
    /// Authenticate a user and print its token.
    Authenticate(commands::AuthenticateArgs),
    /// User operations.
    User(commands::UserArgs),
    /// Role operations.
    Role(commands::RoleArgs),
}
