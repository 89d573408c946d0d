//! RPC plumbing between the auth client and the transport.
//!
//! - [`pending`] - Single-shot pending-call handles
//! - [`bridge`] - Pending call to [`ClientFuture`] bridging
//! - [`stub`] - The [`AuthStub`] interface
//! - [`grpc`] - tonic implementation of [`AuthStub`]

pub mod bridge;
pub mod grpc;
pub mod pending;
pub mod stub;

pub use bridge::{bridge, ClientFuture};
pub use grpc::GrpcAuthStub;
pub use pending::{CallCompleter, CallState, PendingCall};
pub use stub::AuthStub;
