//! Common test utilities.
//!
//! This module contains shared helpers for integration tests.
//! Import with `mod common;` in test files.

#![allow(dead_code)]

use lattice_auth::auth::proto;
use lattice_auth::rpc::{AuthStub, CallCompleter, PendingCall};
use lattice_auth::{AuthClient, ByteSequence};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::runtime::Handle;
use tonic::Status;

// ============================================================================
// Config helpers
// ============================================================================

/// Create a client configuration file.
pub fn create_client_config(endpoint: &str, log_level: &str) -> NamedTempFile {
    let config_content = format!(
        r#"
[client]
endpoint = "{}"
connect_timeout_ms = 250
request_timeout_ms = 1000

[telemetry]
log_level = "{}"
"#,
        endpoint, log_level
    );

    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(config_content.as_bytes())
        .expect("Failed to write config");
    file
}

// ============================================================================
// Recording stub
// ============================================================================

/// A request observed by [`RecordingStub`].
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    AuthEnable(proto::AuthEnableRequest),
    AuthDisable(proto::AuthDisableRequest),
    Authenticate(proto::AuthenticateRequest),
    UserAdd(proto::AuthUserAddRequest),
    UserGet(proto::AuthUserGetRequest),
    UserList(proto::AuthUserListRequest),
    UserDelete(proto::AuthUserDeleteRequest),
    UserChangePassword(proto::AuthUserChangePasswordRequest),
    UserGrantRole(proto::AuthUserGrantRoleRequest),
    UserRevokeRole(proto::AuthUserRevokeRoleRequest),
    RoleAdd(proto::AuthRoleAddRequest),
    RoleGet(proto::AuthRoleGetRequest),
    RoleList(proto::AuthRoleListRequest),
    RoleDelete(proto::AuthRoleDeleteRequest),
    RoleGrantPermission(proto::AuthRoleGrantPermissionRequest),
    RoleRevokePermission(proto::AuthRoleRevokePermissionRequest),
}

/// How the stub completes each call.
#[derive(Debug, Clone)]
pub enum Mode {
    /// Complete immediately with the canned response.
    Respond,
    /// Complete immediately with this status.
    Fail(Status),
    /// Keep the call open until the test completes it.
    Hold,
}

/// Canned responses for operations that carry a payload.
#[derive(Debug, Clone, Default)]
pub struct Responses {
    /// Header attached to the header-only responses.
    pub header: Option<proto::ResponseHeader>,
    pub authenticate: proto::AuthenticateResponse,
    pub user_get: proto::AuthUserGetResponse,
    pub user_list: proto::AuthUserListResponse,
    pub role_get: proto::AuthRoleGetResponse,
    pub role_list: proto::AuthRoleListResponse,
}

/// A held call, type-erased over its response type.
trait HeldCall: Send {
    fn is_cancelled(&self) -> bool;
    fn release(self: Box<Self>) -> bool;
    fn fail(self: Box<Self>, status: Status) -> bool;
}

struct Held<W> {
    completer: CallCompleter<W>,
    response: W,
}

impl<W: Send> HeldCall for Held<W> {
    fn is_cancelled(&self) -> bool {
        self.completer.is_cancelled()
    }

    fn release(self: Box<Self>) -> bool {
        self.completer.succeed(self.response)
    }

    fn fail(self: Box<Self>, status: Status) -> bool {
        self.completer.fail(status)
    }
}

/// In-memory [`AuthStub`] that records every request.
pub struct RecordingStub {
    calls: Mutex<Vec<Recorded>>,
    mode: Mutex<Mode>,
    held: Mutex<Vec<Option<Box<dyn HeldCall>>>>,
    pub responses: Mutex<Responses>,
}

impl RecordingStub {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            mode: Mutex::new(Mode::Respond),
            held: Mutex::new(Vec::new()),
            responses: Mutex::new(Responses::default()),
        })
    }

    pub fn set_mode(&self, mode: Mode) {
        *self.mode.lock() = mode;
    }

    pub fn calls(&self) -> Vec<Recorded> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    pub fn held_count(&self) -> usize {
        self.held.lock().len()
    }

    /// Whether the held call at `index` has been cancelled.
    pub fn is_held_cancelled(&self, index: usize) -> bool {
        self.held.lock()[index]
            .as_ref()
            .map(|call| call.is_cancelled())
            .unwrap_or(false)
    }

    /// Complete the held call at `index` with its canned response.
    pub fn release(&self, index: usize) -> bool {
        let call = self.held.lock()[index].take();
        call.expect("call already completed").release()
    }

    /// Fail the held call at `index`.
    pub fn fail(&self, index: usize, status: Status) -> bool {
        let call = self.held.lock()[index].take();
        call.expect("call already completed").fail(status)
    }

    /// Wait until the held call at `index` observes cancellation.
    pub async fn wait_cancelled(&self, index: usize) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while !self.is_held_cancelled(index) {
                tokio::task::yield_now().await;
            }
        })
        .await
        .expect("held call was never cancelled");
    }

    fn header(&self) -> Option<proto::ResponseHeader> {
        self.responses.lock().header.clone()
    }

    fn dispatch<W: Send + 'static>(&self, call: Recorded, response: W) -> PendingCall<W> {
        self.calls.lock().push(call);
        let mode = self.mode.lock().clone();
        match mode {
            Mode::Respond => PendingCall::ready(Ok(response)),
            Mode::Fail(status) => PendingCall::ready(Err(status)),
            Mode::Hold => {
                let (completer, pending) = PendingCall::channel();
                let held = Held {
                    completer,
                    response,
                };
                self.held.lock().push(Some(Box::new(held)));
                pending
            }
        }
    }
}

impl AuthStub for RecordingStub {
    fn auth_enable(&self, req: proto::AuthEnableRequest) -> PendingCall<proto::AuthEnableResponse> {
        self.dispatch(
            Recorded::AuthEnable(req),
            proto::AuthEnableResponse {
                header: self.header(),
            },
        )
    }

    fn auth_disable(
        &self,
        req: proto::AuthDisableRequest,
    ) -> PendingCall<proto::AuthDisableResponse> {
        self.dispatch(
            Recorded::AuthDisable(req),
            proto::AuthDisableResponse {
                header: self.header(),
            },
        )
    }

    fn authenticate(
        &self,
        req: proto::AuthenticateRequest,
    ) -> PendingCall<proto::AuthenticateResponse> {
        let response = self.responses.lock().authenticate.clone();
        self.dispatch(Recorded::Authenticate(req), response)
    }

    fn user_add(&self, req: proto::AuthUserAddRequest) -> PendingCall<proto::AuthUserAddResponse> {
        self.dispatch(
            Recorded::UserAdd(req),
            proto::AuthUserAddResponse {
                header: self.header(),
            },
        )
    }

    fn user_get(&self, req: proto::AuthUserGetRequest) -> PendingCall<proto::AuthUserGetResponse> {
        let response = self.responses.lock().user_get.clone();
        self.dispatch(Recorded::UserGet(req), response)
    }

    fn user_list(
        &self,
        req: proto::AuthUserListRequest,
    ) -> PendingCall<proto::AuthUserListResponse> {
        let response = self.responses.lock().user_list.clone();
        self.dispatch(Recorded::UserList(req), response)
    }

    fn user_delete(
        &self,
        req: proto::AuthUserDeleteRequest,
    ) -> PendingCall<proto::AuthUserDeleteResponse> {
        self.dispatch(
            Recorded::UserDelete(req),
            proto::AuthUserDeleteResponse {
                header: self.header(),
            },
        )
    }

    fn user_change_password(
        &self,
        req: proto::AuthUserChangePasswordRequest,
    ) -> PendingCall<proto::AuthUserChangePasswordResponse> {
        self.dispatch(
            Recorded::UserChangePassword(req),
            proto::AuthUserChangePasswordResponse {
                header: self.header(),
            },
        )
    }

    fn user_grant_role(
        &self,
        req: proto::AuthUserGrantRoleRequest,
    ) -> PendingCall<proto::AuthUserGrantRoleResponse> {
        self.dispatch(
            Recorded::UserGrantRole(req),
            proto::AuthUserGrantRoleResponse {
                header: self.header(),
            },
        )
    }

    fn user_revoke_role(
        &self,
        req: proto::AuthUserRevokeRoleRequest,
    ) -> PendingCall<proto::AuthUserRevokeRoleResponse> {
        self.dispatch(
            Recorded::UserRevokeRole(req),
            proto::AuthUserRevokeRoleResponse {
                header: self.header(),
            },
        )
    }

    fn role_add(&self, req: proto::AuthRoleAddRequest) -> PendingCall<proto::AuthRoleAddResponse> {
        self.dispatch(
            Recorded::RoleAdd(req),
            proto::AuthRoleAddResponse {
                header: self.header(),
            },
        )
    }

    fn role_get(&self, req: proto::AuthRoleGetRequest) -> PendingCall<proto::AuthRoleGetResponse> {
        let response = self.responses.lock().role_get.clone();
        self.dispatch(Recorded::RoleGet(req), response)
    }

    fn role_list(
        &self,
        req: proto::AuthRoleListRequest,
    ) -> PendingCall<proto::AuthRoleListResponse> {
        let response = self.responses.lock().role_list.clone();
        self.dispatch(Recorded::RoleList(req), response)
    }

    fn role_delete(
        &self,
        req: proto::AuthRoleDeleteRequest,
    ) -> PendingCall<proto::AuthRoleDeleteResponse> {
        self.dispatch(
            Recorded::RoleDelete(req),
            proto::AuthRoleDeleteResponse {
                header: self.header(),
            },
        )
    }

    fn role_grant_permission(
        &self,
        req: proto::AuthRoleGrantPermissionRequest,
    ) -> PendingCall<proto::AuthRoleGrantPermissionResponse> {
        self.dispatch(
            Recorded::RoleGrantPermission(req),
            proto::AuthRoleGrantPermissionResponse {
                header: self.header(),
            },
        )
    }

    fn role_revoke_permission(
        &self,
        req: proto::AuthRoleRevokePermissionRequest,
    ) -> PendingCall<proto::AuthRoleRevokePermissionResponse> {
        self.dispatch(
            Recorded::RoleRevokePermission(req),
            proto::AuthRoleRevokePermissionResponse {
                header: self.header(),
            },
        )
    }
}

// ============================================================================
// Client helpers
// ============================================================================

/// Client over `stub` that runs continuations on the current runtime.
pub fn client_with(stub: &Arc<RecordingStub>) -> AuthClient {
    AuthClient::new(stub.clone(), Handle::current())
}

/// Shorthand for a byte sequence.
pub fn bs(s: &str) -> ByteSequence {
    ByteSequence::from(s)
}
