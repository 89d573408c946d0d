//! Lattice Auth - etcd v3 authentication and authorization client.
//!
//! Manages cluster auth, users, roles and key-range permissions against any
//! etcd v3 compatible server. Every operation validates its inputs, builds
//! the wire request, issues the RPC and hands back a [`ClientFuture`]
//! immediately; the response is translated into domain types on a
//! caller-supplied tokio runtime.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          AuthClient                             │
//! │     validate │ build request │ invoke stub │ bridge future      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Future Bridge                            │
//! │       PendingCall ──▶ Pending/Succeeded/Failed/Cancelled        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          AuthStub                               │
//! │            GrpcAuthStub (tonic) │ test doubles                  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::bytes`] - Byte sequences for names, keys and passwords
//! - [`core::config`] - Configuration parsing and validation
//! - [`core::error`] - Error types
//!
//! ## Auth
//! - [`auth::client`] - Public client operations
//! - [`auth::permission`] - Permission model
//! - [`auth::codec`] - Domain and wire value translation
//! - [`auth::proto`] - Wire messages
//! - [`auth::requests`] - Request builders
//! - [`auth::responses`] - Response translators
//!
//! ## RPC
//! - [`rpc::pending`] - Single-shot pending calls
//! - [`rpc::bridge`] - Pending call to future bridging
//! - [`rpc::stub`] - Stub interface
//! - [`rpc::grpc`] - gRPC stub
//!
//! ## CLI
//! - [`cli::commands`] - CLI command implementations
//!
//! # Key Invariants
//!
//! - Missing inputs fail synchronously, before any RPC is issued
//! - Each future resolves exactly once
//! - Translation runs only after a successful RPC, on the supplied runtime
//! - Unknown permission types translate to `Unrecognized`, never an error

// Core infrastructure
pub mod core;

// Auth operations and wire types
pub mod auth;

// RPC bridging and transport
pub mod rpc;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::bytes::ByteSequence;
pub use self::core::error::{AuthError, AuthResult};
pub use self::core::{config, error};
pub use auth::{AuthClient, Permission, PermissionKind};
pub use rpc::{AuthStub, CallState, ClientFuture, GrpcAuthStub, PendingCall};
