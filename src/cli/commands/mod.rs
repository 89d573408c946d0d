//! CLI command implementations.

mod auth;
mod role;
mod setup;
mod user;

pub use auth::{run_auth, run_authenticate, AuthArgs, AuthCommand, AuthenticateArgs};
pub use role::{run_role, RoleArgs, RoleCommand};
pub use setup::{init_tracing, load_config};
pub use user::{run_user, UserArgs, UserCommand};
