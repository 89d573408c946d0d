//! etcd v3 Auth service client.
//!
//! - [`client`] - The public [`AuthClient`] operations
//! - [`permission`] - Domain permission types
//! - [`codec`] - Byte sequence and enum translation
//! - [`proto`] - Wire messages for `etcdserverpb.Auth`
//! - [`requests`] - Request builders
//! - [`responses`] - Response translators and domain responses

pub mod client;
pub mod codec;
pub mod permission;
pub mod proto;
pub mod requests;
pub mod responses;

pub use client::AuthClient;
pub use permission::{Permission, PermissionKind};
pub use responses::{
    AuthDisableResponse, AuthEnableResponse, AuthRoleAddResponse, AuthRoleDeleteResponse,
    AuthRoleGetResponse, AuthRoleGrantPermissionResponse, AuthRoleListResponse,
    AuthRoleRevokePermissionResponse, AuthUserAddResponse, AuthUserChangePasswordResponse,
    AuthUserDeleteResponse, AuthUserGetResponse, AuthUserGrantRoleResponse, AuthUserListResponse,
    AuthUserRevokeRoleResponse, AuthenticateResponse, ResponseHeader,
};
