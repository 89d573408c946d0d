//! Auth client: the public user/role/permission management surface.
//!
//! Every operation follows the same steps on the calling thread:
//! validate inputs, build the wire request, invoke the stub, bridge the
//! pending call. Only input validation can fail synchronously; everything
//! else surfaces through the returned [`ClientFuture`].

use super::permission::PermissionKind;
use super::requests;
use super::responses::{self, *};
use crate::core::bytes::ByteSequence;
use crate::core::config::ClientConfig;
use crate::core::error::{require, AuthError, AuthResult};
use crate::rpc::{bridge, AuthStub, ClientFuture, GrpcAuthStub, PendingCall};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Client for the etcd v3 Auth service.
///
/// Arguments are taken as `impl Into<Option<_>>`: pass values directly, or
/// `None` for a missing input, which fails with
/// [`AuthError::InvalidArgument`] before any RPC is issued.
#[derive(Clone)]
pub struct AuthClient {
    stub: Arc<dyn AuthStub>,
    executor: Handle,
}

impl AuthClient {
    /// Create a client over `stub`; continuations run on `executor`.
    pub fn new(stub: Arc<dyn AuthStub>, executor: Handle) -> Self {
        Self { stub, executor }
    }

    /// Create a gRPC client from configuration on the current runtime.
    pub fn connect(config: &ClientConfig) -> AuthResult<Self> {
        let executor = Handle::try_current().map_err(|e| AuthError::Transport {
            message: format!("auth client requires a tokio runtime: {}", e),
        })?;
        let stub = GrpcAuthStub::connect_lazy(&config.client, executor.clone())?;
        Ok(Self::new(Arc::new(stub), executor))
    }

    /// Issue `request` through `invoke` and bridge its completion.
    fn call<Req, W, T>(
        &self,
        op: &'static str,
        request: Req,
        invoke: impl FnOnce(&dyn AuthStub, Req) -> PendingCall<W>,
        translate: fn(W) -> AuthResult<T>,
    ) -> ClientFuture<T>
    where
        W: Send + 'static,
        T: Send + 'static,
    {
        tracing::debug!(op, "issuing auth rpc");
        let pending = invoke(self.stub.as_ref(), request);
        bridge(pending, translate, &self.executor)
    }

    /// Enable authentication on the cluster.
    pub fn auth_enable(&self) -> AuthResult<ClientFuture<AuthEnableResponse>> {
        Ok(self.call(
            "auth_enable",
            requests::auth_enable(),
            |stub, req| stub.auth_enable(req),
            responses::auth_enable,
        ))
    }

    /// Disable authentication on the cluster.
    pub fn auth_disable(&self) -> AuthResult<ClientFuture<AuthDisableResponse>> {
        Ok(self.call(
            "auth_disable",
            requests::auth_disable(),
            |stub, req| stub.auth_disable(req),
            responses::auth_disable,
        ))
    }

    /// Authenticate a user and obtain a token.
    pub fn authenticate(
        &self,
        user: impl Into<Option<ByteSequence>>,
        password: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthenticateResponse>> {
        let user = require(user.into(), "user")?;
        let password = require(password.into(), "password")?;

        Ok(self.call(
            "authenticate",
            requests::authenticate(&user, &password),
            |stub, req| stub.authenticate(req),
            responses::authenticate,
        ))
    }

    /// Add a user.
    pub fn user_add(
        &self,
        user: impl Into<Option<ByteSequence>>,
        password: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserAddResponse>> {
        let user = require(user.into(), "user")?;
        let password = require(password.into(), "password")?;

        Ok(self.call(
            "user_add",
            requests::user_add(&user, &password),
            |stub, req| stub.user_add(req),
            responses::user_add,
        ))
    }

    /// Delete a user.
    pub fn user_delete(
        &self,
        user: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserDeleteResponse>> {
        let user = require(user.into(), "user")?;

        Ok(self.call(
            "user_delete",
            requests::user_delete(&user),
            |stub, req| stub.user_delete(req),
            responses::user_delete,
        ))
    }

    /// Change a user's password.
    pub fn user_change_password(
        &self,
        user: impl Into<Option<ByteSequence>>,
        password: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserChangePasswordResponse>> {
        let user = require(user.into(), "user")?;
        let password = require(password.into(), "password")?;

        Ok(self.call(
            "user_change_password",
            requests::user_change_password(&user, &password),
            |stub, req| stub.user_change_password(req),
            responses::user_change_password,
        ))
    }

    /// Get the roles granted to a user.
    pub fn user_get(
        &self,
        user: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserGetResponse>> {
        let user = require(user.into(), "user")?;

        Ok(self.call(
            "user_get",
            requests::user_get(&user),
            |stub, req| stub.user_get(req),
            responses::user_get,
        ))
    }

    /// List all users.
    pub fn user_list(&self) -> AuthResult<ClientFuture<AuthUserListResponse>> {
        Ok(self.call(
            "user_list",
            requests::user_list(),
            |stub, req| stub.user_list(req),
            responses::user_list,
        ))
    }

    /// Grant a role to a user.
    pub fn user_grant_role(
        &self,
        user: impl Into<Option<ByteSequence>>,
        role: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserGrantRoleResponse>> {
        let user = require(user.into(), "user")?;
        let role = require(role.into(), "role")?;

        Ok(self.call(
            "user_grant_role",
            requests::user_grant_role(&user, &role),
            |stub, req| stub.user_grant_role(req),
            responses::user_grant_role,
        ))
    }

    /// Revoke a role from a user.
    pub fn user_revoke_role(
        &self,
        user: impl Into<Option<ByteSequence>>,
        role: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthUserRevokeRoleResponse>> {
        let user = require(user.into(), "user")?;
        let role = require(role.into(), "role")?;

        Ok(self.call(
            "user_revoke_role",
            requests::user_revoke_role(&user, &role),
            |stub, req| stub.user_revoke_role(req),
            responses::user_revoke_role,
        ))
    }

    /// Add a role.
    pub fn role_add(
        &self,
        role: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthRoleAddResponse>> {
        let role = require(role.into(), "role")?;

        Ok(self.call(
            "role_add",
            requests::role_add(&role),
            |stub, req| stub.role_add(req),
            responses::role_add,
        ))
    }

    /// Grant `kind` access over `[key, range_end)` to a role.
    ///
    /// An empty `range_end` grants access to the single key `key`.
    pub fn role_grant_permission(
        &self,
        role: impl Into<Option<ByteSequence>>,
        key: impl Into<Option<ByteSequence>>,
        range_end: impl Into<Option<ByteSequence>>,
        kind: impl Into<Option<PermissionKind>>,
    ) -> AuthResult<ClientFuture<AuthRoleGrantPermissionResponse>> {
        let role = require(role.into(), "role")?;
        let key = require(key.into(), "key")?;
        let range_end = require(range_end.into(), "rangeEnd")?;
        let kind = require(kind.into(), "permType")?;

        Ok(self.call(
            "role_grant_permission",
            requests::role_grant_permission(&role, &key, &range_end, kind),
            |stub, req| stub.role_grant_permission(req),
            responses::role_grant_permission,
        ))
    }

    /// Get the permissions granted to a role.
    pub fn role_get(
        &self,
        role: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthRoleGetResponse>> {
        let role = require(role.into(), "role")?;

        Ok(self.call(
            "role_get",
            requests::role_get(&role),
            |stub, req| stub.role_get(req),
            responses::role_get,
        ))
    }

    /// List all roles.
    pub fn role_list(&self) -> AuthResult<ClientFuture<AuthRoleListResponse>> {
        Ok(self.call(
            "role_list",
            requests::role_list(),
            |stub, req| stub.role_list(req),
            responses::role_list,
        ))
    }

    /// Revoke the permission over `[key, range_end)` from a role.
    pub fn role_revoke_permission(
        &self,
        role: impl Into<Option<ByteSequence>>,
        key: impl Into<Option<ByteSequence>>,
        range_end: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthRoleRevokePermissionResponse>> {
        let role = require(role.into(), "role")?;
        let key = require(key.into(), "key")?;
        let range_end = require(range_end.into(), "rangeEnd")?;

        Ok(self.call(
            "role_revoke_permission",
            requests::role_revoke_permission(&role, &key, &range_end),
            |stub, req| stub.role_revoke_permission(req),
            responses::role_revoke_permission,
        ))
    }

    /// Delete a role.
    pub fn role_delete(
        &self,
        role: impl Into<Option<ByteSequence>>,
    ) -> AuthResult<ClientFuture<AuthRoleDeleteResponse>> {
        let role = require(role.into(), "role")?;

        Ok(self.call(
            "role_delete",
            requests::role_delete(&role),
            |stub, req| stub.role_delete(req),
            responses::role_delete,
        ))
    }
}

impl std::fmt::Debug for AuthClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthClient").finish_non_exhaustive()
    }
}
