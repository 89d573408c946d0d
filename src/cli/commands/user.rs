//! User command implementation.

use crate::auth::AuthClient;
use crate::core::bytes::ByteSequence;
use anyhow::Result;
use clap::{Args, Subcommand};

/// User operations.
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands.
#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// Add a new user.
    Add {
        /// User name.
        #[arg(required = true)]
        user: String,
        /// Password.
        #[arg(required = true)]
        password: String,
    },
    /// Delete a user.
    Delete {
        /// User name.
        #[arg(required = true)]
        user: String,
    },
    /// Show the roles granted to a user.
    Get {
        /// User name.
        #[arg(required = true)]
        user: String,
    },
    /// List all users.
    List,
    /// Change a user's password.
    Passwd {
        /// User name.
        #[arg(required = true)]
        user: String,
        /// New password.
        #[arg(required = true)]
        password: String,
    },
    /// Grant a role to a user.
    GrantRole {
        /// User name.
        #[arg(required = true)]
        user: String,
        /// Role name.
        #[arg(required = true)]
        role: String,
    },
    /// Revoke a role from a user.
    RevokeRole {
        /// User name.
        #[arg(required = true)]
        user: String,
        /// Role name.
        #[arg(required = true)]
        role: String,
    },
}

/// Run the user command.
pub async fn run_user(client: &AuthClient, args: UserArgs) -> Result<()> {
    match args.command {
        UserCommand::Add { user, password } => {
            client
                .user_add(
                    ByteSequence::from(user.as_str()),
                    ByteSequence::from(password),
                )?
                .await?;
            println!("User {} created", user);
        }
        UserCommand::Delete { user } => {
            client
                .user_delete(ByteSequence::from(user.as_str()))?
                .await?;
            println!("User {} deleted", user);
        }
        UserCommand::Get { user } => {
            let response = client.user_get(ByteSequence::from(user.as_str()))?.await?;
            println!("User: {}", user);
            let roles: Vec<String> = response
                .roles
                .iter()
                .map(ByteSequence::to_string_lossy)
                .collect();
            println!("Roles: {}", roles.join(" "));
        }
        UserCommand::List => {
            let response = client.user_list()?.await?;
            for user in &response.users {
                println!("{}", user);
            }
        }
        UserCommand::Passwd { user, password } => {
            client
                .user_change_password(
                    ByteSequence::from(user.as_str()),
                    ByteSequence::from(password),
                )?
                .await?;
            println!("Password updated");
        }
        UserCommand::GrantRole { user, role } => {
            client
                .user_grant_role(
                    ByteSequence::from(user.as_str()),
                    ByteSequence::from(role.as_str()),
                )?
                .await?;
            println!("Role {} is granted to user {}", role, user);
        }
        UserCommand::RevokeRole { user, role } => {
            client
                .user_revoke_role(
                    ByteSequence::from(user.as_str()),
                    ByteSequence::from(role.as_str()),
                )?
                .await?;
            println!("Role {} is revoked from user {}", role, user);
        }
    }
    Ok(())
}
