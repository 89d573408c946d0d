//! Auth enable/disable and authenticate commands.

use crate::auth::AuthClient;
use crate::core::bytes::ByteSequence;
use anyhow::Result;
use clap::{Args, Subcommand};

/// Enable or disable authentication.
#[derive(Args, Debug)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

/// Auth subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    /// Enable authentication.
    Enable,
    /// Disable authentication.
    Disable,
}

/// Authenticate a user.
#[derive(Args, Debug)]
pub struct AuthenticateArgs {
    /// User name.
    #[arg(required = true)]
    pub user: String,
    /// Password.
    #[arg(required = true)]
    pub password: String,
}

/// Run the auth command.
pub async fn run_auth(client: &AuthClient, args: AuthArgs) -> Result<()> {
    match args.command {
        AuthCommand::Enable => {
            client.auth_enable()?.await?;
            println!("Authentication Enabled");
        }
        AuthCommand::Disable => {
            client.auth_disable()?.await?;
            println!("Authentication Disabled");
        }
    }
    Ok(())
}

/// Run the authenticate command.
pub async fn run_authenticate(client: &AuthClient, args: AuthenticateArgs) -> Result<()> {
    let response = client
        .authenticate(
            ByteSequence::from(args.user),
            ByteSequence::from(args.password),
        )?
        .await?;
    println!("{}", response.token);
    Ok(())
}
