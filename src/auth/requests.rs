//! Request builders, one per Auth operation.
//!
//! Builders take already validated domain values and never fail.

use super::codec::{permission_kind_to_wire, to_wire};
use super::permission::PermissionKind;
use super::proto;
use crate::core::bytes::ByteSequence;

pub fn auth_enable() -> proto::AuthEnableRequest {
    proto::AuthEnableRequest::default()
}

pub fn auth_disable() -> proto::AuthDisableRequest {
    proto::AuthDisableRequest::default()
}

pub fn authenticate(user: &ByteSequence, password: &ByteSequence) -> proto::AuthenticateRequest {
    proto::AuthenticateRequest {
        name: to_wire(user),
        password: to_wire(password),
    }
}

pub fn user_add(user: &ByteSequence, password: &ByteSequence) -> proto::AuthUserAddRequest {
    proto::AuthUserAddRequest {
        name: to_wire(user),
        password: to_wire(password),
    }
}

pub fn user_delete(user: &ByteSequence) -> proto::AuthUserDeleteRequest {
    proto::AuthUserDeleteRequest {
        name: to_wire(user),
    }
}

pub fn user_change_password(
    user: &ByteSequence,
    password: &ByteSequence,
) -> proto::AuthUserChangePasswordRequest {
    proto::AuthUserChangePasswordRequest {
        name: to_wire(user),
        password: to_wire(password),
    }
}

pub fn user_get(user: &ByteSequence) -> proto::AuthUserGetRequest {
    proto::AuthUserGetRequest {
        name: to_wire(user),
    }
}

pub fn user_list() -> proto::AuthUserListRequest {
    proto::AuthUserListRequest::default()
}

pub fn user_grant_role(
    user: &ByteSequence,
    role: &ByteSequence,
) -> proto::AuthUserGrantRoleRequest {
    proto::AuthUserGrantRoleRequest {
        user: to_wire(user),
        role: to_wire(role),
    }
}

pub fn user_revoke_role(
    user: &ByteSequence,
    role: &ByteSequence,
) -> proto::AuthUserRevokeRoleRequest {
    proto::AuthUserRevokeRoleRequest {
        user: to_wire(user),
        role: to_wire(role),
    }
}

pub fn role_add(role: &ByteSequence) -> proto::AuthRoleAddRequest {
    proto::AuthRoleAddRequest {
        name: to_wire(role),
    }
}

/// Build the nested wire permission for a grant.
pub fn permission(
    key: &ByteSequence,
    range_end: &ByteSequence,
    kind: PermissionKind,
) -> proto::Permission {
    proto::Permission {
        perm_type: permission_kind_to_wire(kind).as_i32(),
        key: to_wire(key),
        range_end: to_wire(range_end),
    }
}

pub fn role_grant_permission(
    role: &ByteSequence,
    key: &ByteSequence,
    range_end: &ByteSequence,
    kind: PermissionKind,
) -> proto::AuthRoleGrantPermissionRequest {
    proto::AuthRoleGrantPermissionRequest {
        name: to_wire(role),
        perm: Some(permission(key, range_end, kind)),
    }
}

pub fn role_get(role: &ByteSequence) -> proto::AuthRoleGetRequest {
    proto::AuthRoleGetRequest {
        role: to_wire(role),
    }
}

pub fn role_list() -> proto::AuthRoleListRequest {
    proto::AuthRoleListRequest::default()
}

pub fn role_revoke_permission(
    role: &ByteSequence,
    key: &ByteSequence,
    range_end: &ByteSequence,
) -> proto::AuthRoleRevokePermissionRequest {
    proto::AuthRoleRevokePermissionRequest {
        role: to_wire(role),
        key: to_wire(key),
        range_end: to_wire(range_end),
    }
}

pub fn role_delete(role: &ByteSequence) -> proto::AuthRoleDeleteRequest {
    proto::AuthRoleDeleteRequest {
        role: to_wire(role),
    }
}
