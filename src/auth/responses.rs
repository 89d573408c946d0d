//! Domain response types and their translators.
//!
//! Each translator turns the wire response of one successful RPC into the
//! matching domain response. Translators are never called for failed calls.

use super::codec::{from_wire, permission_kind_from_wire};
use super::permission::Permission;
use super::proto;
use crate::core::bytes::ByteSequence;
use crate::core::error::{AuthError, AuthResult};

/// Response header attached to every Auth response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseHeader {
    /// Cluster ID.
    pub cluster_id: u64,
    /// Member ID that served the request.
    pub member_id: u64,
    /// Store revision when the request was applied.
    pub revision: i64,
    /// Raft term.
    pub raft_term: u64,
}

impl From<proto::ResponseHeader> for ResponseHeader {
    fn from(header: proto::ResponseHeader) -> Self {
        Self {
            cluster_id: header.cluster_id,
            member_id: header.member_id,
            revision: header.revision,
            raft_term: header.raft_term,
        }
    }
}

fn header(header: Option<proto::ResponseHeader>) -> Option<ResponseHeader> {
    header.map(ResponseHeader::from)
}

fn names(values: Vec<Vec<u8>>) -> Vec<ByteSequence> {
    values.into_iter().map(from_wire).collect()
}

/// Define domain responses that only carry a header.
macro_rules! header_only {
    ($($(#[$meta:meta])* $name:ident => $translate:ident;)*) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, Default, PartialEq, Eq)]
            pub struct $name {
                pub header: Option<ResponseHeader>,
            }

            pub fn $translate(resp: proto::$name) -> AuthResult<$name> {
                Ok($name {
                    header: header(resp.header),
                })
            }
        )*
    };
}

header_only! {
    /// Response for auth enable.
    AuthEnableResponse => auth_enable;
    /// Response for auth disable.
    AuthDisableResponse => auth_disable;
    /// Response for user add.
    AuthUserAddResponse => user_add;
    /// Response for user delete.
    AuthUserDeleteResponse => user_delete;
    /// Response for user password change.
    AuthUserChangePasswordResponse => user_change_password;
    /// Response for granting a role to a user.
    AuthUserGrantRoleResponse => user_grant_role;
    /// Response for revoking a role from a user.
    AuthUserRevokeRoleResponse => user_revoke_role;
    /// Response for role add.
    AuthRoleAddResponse => role_add;
    /// Response for role delete.
    AuthRoleDeleteResponse => role_delete;
    /// Response for granting a permission to a role.
    AuthRoleGrantPermissionResponse => role_grant_permission;
    /// Response for revoking a permission from a role.
    AuthRoleRevokePermissionResponse => role_revoke_permission;
}

/// Response for authenticate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticateResponse {
    pub header: Option<ResponseHeader>,
    /// Token to attach to subsequent requests.
    pub token: String,
}

pub fn authenticate(resp: proto::AuthenticateResponse) -> AuthResult<AuthenticateResponse> {
    let token = String::from_utf8(resp.token)
        .map_err(|e| AuthError::translation(format!("auth token is not valid UTF-8: {}", e)))?;

    Ok(AuthenticateResponse {
        header: header(resp.header),
        token,
    })
}

/// Response for user get.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthUserGetResponse {
    pub header: Option<ResponseHeader>,
    /// Roles granted to the user.
    pub roles: Vec<ByteSequence>,
}

pub fn user_get(resp: proto::AuthUserGetResponse) -> AuthResult<AuthUserGetResponse> {
    Ok(AuthUserGetResponse {
        header: header(resp.header),
        roles: names(resp.roles),
    })
}

/// Response for user list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthUserListResponse {
    pub header: Option<ResponseHeader>,
    pub users: Vec<ByteSequence>,
}

pub fn user_list(resp: proto::AuthUserListResponse) -> AuthResult<AuthUserListResponse> {
    Ok(AuthUserListResponse {
        header: header(resp.header),
        users: names(resp.users),
    })
}

/// Response for role get.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthRoleGetResponse {
    pub header: Option<ResponseHeader>,
    /// Permissions granted to the role.
    pub permissions: Vec<Permission>,
}

pub fn role_get(resp: proto::AuthRoleGetResponse) -> AuthResult<AuthRoleGetResponse> {
    let permissions = resp
        .perm
        .into_iter()
        .map(|perm| Permission {
            kind: permission_kind_from_wire(perm.perm_type),
            key: from_wire(perm.key),
            range_end: from_wire(perm.range_end),
        })
        .collect();

    Ok(AuthRoleGetResponse {
        header: header(resp.header),
        permissions,
    })
}

/// Response for role list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthRoleListResponse {
    pub header: Option<ResponseHeader>,
    pub roles: Vec<ByteSequence>,
}

pub fn role_list(resp: proto::AuthRoleListResponse) -> AuthResult<AuthRoleListResponse> {
    Ok(AuthRoleListResponse {
        header: header(resp.header),
        roles: names(resp.roles),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::permission::PermissionKind;

    fn wire_header() -> proto::ResponseHeader {
        proto::ResponseHeader {
            cluster_id: 11,
            member_id: 22,
            revision: 33,
            raft_term: 4,
        }
    }

    #[test]
    fn test_header_translated() {
        let resp = auth_enable(proto::AuthEnableResponse {
            header: Some(wire_header()),
        })
        .unwrap();
        let h = resp.header.unwrap();
        assert_eq!(h.cluster_id, 11);
        assert_eq!(h.member_id, 22);
        assert_eq!(h.revision, 33);
        assert_eq!(h.raft_term, 4);
    }

    #[test]
    fn test_missing_header_is_none() {
        let resp = role_delete(proto::AuthRoleDeleteResponse::default());
        assert!(resp.unwrap().header.is_none());
    }

    #[test]
    fn test_user_get_roles() {
        let resp = user_get(proto::AuthUserGetResponse {
            header: None,
            roles: vec![b"r1".to_vec(), b"r2".to_vec()],
        })
        .unwrap();
        assert_eq!(
            resp.roles,
            vec![ByteSequence::from("r1"), ByteSequence::from("r2")]
        );
    }

    #[test]
    fn test_role_get_permissions() {
        let resp = role_get(proto::AuthRoleGetResponse {
            header: Some(wire_header()),
            perm: vec![
                proto::Permission {
                    perm_type: 2,
                    key: b"a".to_vec(),
                    range_end: b"z".to_vec(),
                },
                proto::Permission {
                    perm_type: 42,
                    key: b"x".to_vec(),
                    range_end: vec![],
                },
            ],
        })
        .unwrap();

        assert_eq!(
            resp.permissions,
            vec![
                Permission::new("a", "z", PermissionKind::ReadWrite),
                Permission::exact("x", PermissionKind::Unrecognized),
            ]
        );
    }

    #[test]
    fn test_authenticate_token() {
        let resp = authenticate(proto::AuthenticateResponse {
            header: None,
            token: b"tok.123".to_vec(),
        })
        .unwrap();
        assert_eq!(resp.token, "tok.123");
    }

    #[test]
    fn test_authenticate_invalid_token() {
        let err = authenticate(proto::AuthenticateResponse {
            header: None,
            token: vec![0xff, 0xfe],
        })
        .unwrap_err();
        assert!(matches!(err, AuthError::Translation { .. }));
    }
}
