//! RPC stub interface for the etcd Auth service.

use crate::auth::proto;
use crate::rpc::pending::PendingCall;

/// One method per `etcdserverpb.Auth` RPC.
///
/// Each method issues the call and returns its pending handle without
/// blocking. Implementations deliver exactly one response or one failure
/// per call and may stop work once the pending call is cancelled.
pub trait AuthStub: Send + Sync {
    fn auth_enable(&self, req: proto::AuthEnableRequest) -> PendingCall<proto::AuthEnableResponse>;

    fn auth_disable(
        &self,
        req: proto::AuthDisableRequest,
    ) -> PendingCall<proto::AuthDisableResponse>;

    fn authenticate(
        &self,
        req: proto::AuthenticateRequest,
    ) -> PendingCall<proto::AuthenticateResponse>;

    fn user_add(&self, req: proto::AuthUserAddRequest) -> PendingCall<proto::AuthUserAddResponse>;

    fn user_get(&self, req: proto::AuthUserGetRequest) -> PendingCall<proto::AuthUserGetResponse>;

    fn user_list(
        &self,
        req: proto::AuthUserListRequest,
    ) -> PendingCall<proto::AuthUserListResponse>;

    fn user_delete(
        &self,
        req: proto::AuthUserDeleteRequest,
    ) -> PendingCall<proto::AuthUserDeleteResponse>;

    fn user_change_password(
        &self,
        req: proto::AuthUserChangePasswordRequest,
    ) -> PendingCall<proto::AuthUserChangePasswordResponse>;

    fn user_grant_role(
        &self,
        req: proto::AuthUserGrantRoleRequest,
    ) -> PendingCall<proto::AuthUserGrantRoleResponse>;

    fn user_revoke_role(
        &self,
        req: proto::AuthUserRevokeRoleRequest,
    ) -> PendingCall<proto::AuthUserRevokeRoleResponse>;

    fn role_add(&self, req: proto::AuthRoleAddRequest) -> PendingCall<proto::AuthRoleAddResponse>;

    fn role_get(&self, req: proto::AuthRoleGetRequest) -> PendingCall<proto::AuthRoleGetResponse>;

    fn role_list(
        &self,
        req: proto::AuthRoleListRequest,
    ) -> PendingCall<proto::AuthRoleListResponse>;

    fn role_delete(
        &self,
        req: proto::AuthRoleDeleteRequest,
    ) -> PendingCall<proto::AuthRoleDeleteResponse>;

    fn role_grant_permission(
        &self,
        req: proto::AuthRoleGrantPermissionRequest,
    ) -> PendingCall<proto::AuthRoleGrantPermissionResponse>;

    fn role_revoke_permission(
        &self,
        req: proto::AuthRoleRevokePermissionRequest,
    ) -> PendingCall<proto::AuthRoleRevokePermissionResponse>;
}
