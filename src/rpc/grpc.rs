//! gRPC transport for the etcd Auth service.
//!
//! Issues unary calls over a tonic [`Channel`] using the manual prost
//! messages in [`crate::auth::proto`]. Every call runs on its own task and
//! stops as soon as its pending call is cancelled.

use crate::auth::proto;
use crate::core::config::ConnectionConfig;
use crate::core::error::{AuthError, AuthResult};
use crate::rpc::pending::PendingCall;
use crate::rpc::stub::AuthStub;
use prost::Message;
use tokio::runtime::Handle;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};
use tonic::{Request, Status};

/// gRPC method paths of `etcdserverpb.Auth`.
pub mod paths {
    pub const SERVICE: &str = "etcdserverpb.Auth";

    pub const AUTH_ENABLE: &str = "/etcdserverpb.Auth/AuthEnable";
    pub const AUTH_DISABLE: &str = "/etcdserverpb.Auth/AuthDisable";
    pub const AUTHENTICATE: &str = "/etcdserverpb.Auth/Authenticate";
    pub const USER_ADD: &str = "/etcdserverpb.Auth/UserAdd";
    pub const USER_GET: &str = "/etcdserverpb.Auth/UserGet";
    pub const USER_LIST: &str = "/etcdserverpb.Auth/UserList";
    pub const USER_DELETE: &str = "/etcdserverpb.Auth/UserDelete";
    pub const USER_CHANGE_PASSWORD: &str = "/etcdserverpb.Auth/UserChangePassword";
    pub const USER_GRANT_ROLE: &str = "/etcdserverpb.Auth/UserGrantRole";
    pub const USER_REVOKE_ROLE: &str = "/etcdserverpb.Auth/UserRevokeRole";
    pub const ROLE_ADD: &str = "/etcdserverpb.Auth/RoleAdd";
    pub const ROLE_GET: &str = "/etcdserverpb.Auth/RoleGet";
    pub const ROLE_LIST: &str = "/etcdserverpb.Auth/RoleList";
    pub const ROLE_DELETE: &str = "/etcdserverpb.Auth/RoleDelete";
    pub const ROLE_GRANT_PERMISSION: &str = "/etcdserverpb.Auth/RoleGrantPermission";
    pub const ROLE_REVOKE_PERMISSION: &str = "/etcdserverpb.Auth/RoleRevokePermission";
}

/// Auth stub backed by a tonic channel.
#[derive(Clone, Debug)]
pub struct GrpcAuthStub {
    channel: Channel,
    executor: Handle,
}

impl GrpcAuthStub {
    /// Wrap an existing channel. Calls are spawned on `executor`.
    pub fn new(channel: Channel, executor: Handle) -> Self {
        Self { channel, executor }
    }

    /// Build a lazily connecting channel from configuration.
    ///
    /// No connection is attempted until the first call.
    pub fn connect_lazy(config: &ConnectionConfig, executor: Handle) -> AuthResult<Self> {
        let mut endpoint = Endpoint::from_shared(config.endpoint.clone())
            .map_err(|e| AuthError::Transport {
                message: format!("invalid endpoint '{}': {}", config.endpoint, e),
            })?
            .connect_timeout(config.connect_timeout());

        if let Some(timeout) = config.request_timeout() {
            endpoint = endpoint.timeout(timeout);
        }

        // The channel's worker task is spawned on the current runtime.
        let channel = {
            let _guard = executor.enter();
            endpoint.connect_lazy()
        };

        tracing::info!(endpoint = %config.endpoint, "auth client channel configured");
        Ok(Self::new(channel, executor))
    }

    /// Issue one unary call and hand back its pending handle.
    fn unary<Req, Resp>(&self, path: &'static str, request: Req) -> PendingCall<Resp>
    where
        Req: Message + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let (mut completer, pending) = PendingCall::channel();
        let mut grpc = tonic::client::Grpc::new(self.channel.clone());

        self.executor.spawn(async move {
            let call = async move {
                grpc.ready()
                    .await
                    .map_err(|e| Status::unavailable(format!("service was not ready: {}", e)))?;
                let codec = ProstCodec::<Req, Resp>::default();
                let response = grpc
                    .unary(
                        Request::new(request),
                        PathAndQuery::from_static(path),
                        codec,
                    )
                    .await?;
                Ok::<Resp, Status>(response.into_inner())
            };

            let outcome = tokio::select! {
                _ = completer.cancelled() => None,
                result = call => Some(result),
            };

            match outcome {
                Some(result) => {
                    completer.complete(result);
                }
                None => tracing::debug!(path, "auth rpc dropped after cancellation"),
            }
        });

        pending
    }
}

impl AuthStub for GrpcAuthStub {
    fn auth_enable(&self, req: proto::AuthEnableRequest) -> PendingCall<proto::AuthEnableResponse> {
        self.unary(paths::AUTH_ENABLE, req)
    }

    fn auth_disable(
        &self,
        req: proto::AuthDisableRequest,
    ) -> PendingCall<proto::AuthDisableResponse> {
        self.unary(paths::AUTH_DISABLE, req)
    }

    fn authenticate(
        &self,
        req: proto::AuthenticateRequest,
    ) -> PendingCall<proto::AuthenticateResponse> {
        self.unary(paths::AUTHENTICATE, req)
    }

    fn user_add(&self, req: proto::AuthUserAddRequest) -> PendingCall<proto::AuthUserAddResponse> {
        self.unary(paths::USER_ADD, req)
    }

    fn user_get(&self, req: proto::AuthUserGetRequest) -> PendingCall<proto::AuthUserGetResponse> {
        self.unary(paths::USER_GET, req)
    }

    fn user_list(
        &self,
        req: proto::AuthUserListRequest,
    ) -> PendingCall<proto::AuthUserListResponse> {
        self.unary(paths::USER_LIST, req)
    }

    fn user_delete(
        &self,
        req: proto::AuthUserDeleteRequest,
    ) -> PendingCall<proto::AuthUserDeleteResponse> {
        self.unary(paths::USER_DELETE, req)
    }

    fn user_change_password(
        &self,
        req: proto::AuthUserChangePasswordRequest,
    ) -> PendingCall<proto::AuthUserChangePasswordResponse> {
        self.unary(paths::USER_CHANGE_PASSWORD, req)
    }

    fn user_grant_role(
        &self,
        req: proto::AuthUserGrantRoleRequest,
    ) -> PendingCall<proto::AuthUserGrantRoleResponse> {
        self.unary(paths::USER_GRANT_ROLE, req)
    }

    fn user_revoke_role(
        &self,
        req: proto::AuthUserRevokeRoleRequest,
    ) -> PendingCall<proto::AuthUserRevokeRoleResponse> {
        self.unary(paths::USER_REVOKE_ROLE, req)
    }

    fn role_add(&self, req: proto::AuthRoleAddRequest) -> PendingCall<proto::AuthRoleAddResponse> {
        self.unary(paths::ROLE_ADD, req)
    }

    fn role_get(&self, req: proto::AuthRoleGetRequest) -> PendingCall<proto::AuthRoleGetResponse> {
        self.unary(paths::ROLE_GET, req)
    }

    fn role_list(
        &self,
        req: proto::AuthRoleListRequest,
    ) -> PendingCall<proto::AuthRoleListResponse> {
        self.unary(paths::ROLE_LIST, req)
    }

    fn role_delete(
        &self,
        req: proto::AuthRoleDeleteRequest,
    ) -> PendingCall<proto::AuthRoleDeleteResponse> {
        self.unary(paths::ROLE_DELETE, req)
    }

    fn role_grant_permission(
        &self,
        req: proto::AuthRoleGrantPermissionRequest,
    ) -> PendingCall<proto::AuthRoleGrantPermissionResponse> {
        self.unary(paths::ROLE_GRANT_PERMISSION, req)
    }

    fn role_revoke_permission(
        &self,
        req: proto::AuthRoleRevokePermissionRequest,
    ) -> PendingCall<proto::AuthRoleRevokePermissionResponse> {
        self.unary(paths::ROLE_REVOKE_PERMISSION, req)
    }
}
