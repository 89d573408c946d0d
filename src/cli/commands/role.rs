//! Role command implementation.

use crate::auth::permission::prefix_range_end;
use crate::auth::{AuthClient, Permission, PermissionKind};
use crate::core::bytes::ByteSequence;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};

/// Role operations.
#[derive(Args, Debug)]
pub struct RoleArgs {
    #[command(subcommand)]
    pub command: RoleCommand,
}

/// Role subcommands.
#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Add a new role.
    Add {
        /// Role name.
        #[arg(required = true)]
        role: String,
    },
    /// Delete a role.
    Delete {
        /// Role name.
        #[arg(required = true)]
        role: String,
    },
    /// Show the permissions granted to a role.
    Get {
        /// Role name.
        #[arg(required = true)]
        role: String,
    },
    /// List all roles.
    List,
    /// Grant a key permission to a role.
    GrantPermission {
        /// Role name.
        #[arg(required = true)]
        role: String,
        /// Permission kind (read, write, readwrite).
        #[arg(required = true)]
        kind: PermissionKind,
        /// Key, or first key of the range.
        #[arg(required = true)]
        key: String,
        /// Exclusive range end. Omit for a single key.
        range_end: Option<String>,
        /// Grant every key starting with `key`.
        #[arg(long)]
        prefix: bool,
    },
    /// Revoke a key permission from a role.
    RevokePermission {
        /// Role name.
        #[arg(required = true)]
        role: String,
        /// Key, or first key of the range.
        #[arg(required = true)]
        key: String,
        /// Exclusive range end. Omit for a single key.
        range_end: Option<String>,
        /// Revoke the prefix permission on `key`.
        #[arg(long)]
        prefix: bool,
    },
}

/// Run the role command.
pub async fn run_role(client: &AuthClient, args: RoleArgs) -> Result<()> {
    match args.command {
        RoleCommand::Add { role } => {
            client.role_add(ByteSequence::from(role.as_str()))?.await?;
            println!("Role {} created", role);
        }
        RoleCommand::Delete { role } => {
            client
                .role_delete(ByteSequence::from(role.as_str()))?
                .await?;
            println!("Role {} deleted", role);
        }
        RoleCommand::Get { role } => {
            let response = client.role_get(ByteSequence::from(role.as_str()))?.await?;
            println!("Role {}", role);
            println!("Permissions:");
            for perm in &response.permissions {
                println!("\t{}", perm);
            }
        }
        RoleCommand::List => {
            let response = client.role_list()?.await?;
            for role in &response.roles {
                println!("{}", role);
            }
        }
        RoleCommand::GrantPermission {
            role,
            kind,
            key,
            range_end,
            prefix,
        } => {
            let perm = key_permission(&key, range_end, prefix, kind)?;
            client
                .role_grant_permission(
                    ByteSequence::from(role.as_str()),
                    perm.key.clone(),
                    perm.range_end.clone(),
                    perm.kind,
                )?
                .await?;
            println!("Role {} updated: {}", role, perm);
        }
        RoleCommand::RevokePermission {
            role,
            key,
            range_end,
            prefix,
        } => {
            let range_end = resolve_range_end(&key, range_end, prefix)?;
            client
                .role_revoke_permission(
                    ByteSequence::from(role.as_str()),
                    ByteSequence::from(key.as_str()),
                    range_end,
                )?
                .await?;
            println!("Permission of key {} is revoked from role {}", key, role);
        }
    }
    Ok(())
}

/// Permission named by the key arguments of a grant.
fn key_permission(
    key: &str,
    range_end: Option<String>,
    prefix: bool,
    kind: PermissionKind,
) -> Result<Permission> {
    match (range_end, prefix) {
        (Some(_), true) => bail!("range_end and --prefix are mutually exclusive"),
        (Some(end), false) => Ok(Permission::new(key, end, kind)),
        (None, true) => Ok(Permission::prefix(key, kind)),
        (None, false) => Ok(Permission::exact(key, kind)),
    }
}

/// Range end from the positional argument or `--prefix`; empty means a single key.
fn resolve_range_end(key: &str, range_end: Option<String>, prefix: bool) -> Result<ByteSequence> {
    match (range_end, prefix) {
        (Some(_), true) => bail!("range_end and --prefix are mutually exclusive"),
        (Some(end), false) => Ok(ByteSequence::from(end)),
        (None, true) => Ok(ByteSequence::from(prefix_range_end(key.as_bytes()))),
        (None, false) => Ok(ByteSequence::empty()),
    }
}
