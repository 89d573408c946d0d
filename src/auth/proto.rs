//! Protobuf encoding for the etcd Auth service.
//!
//! Manual `prost::Message` implementations for `etcdserverpb.Auth*` messages
//! and `authpb.Permission`, wire compatible with etcd without proto codegen.
//!
//! etcd declares user names, role names and passwords as `string`. They are
//! carried here as raw bytes: the encoding of a proto3 `string` and `bytes`
//! field is identical, and names are opaque byte sequences to this client.

use prost::{DecodeError, Message};

// ============================================================================
// ResponseHeader
// ============================================================================

/// Wire-format ResponseHeader matching etcd's etcdserverpb.ResponseHeader.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ResponseHeader {
    pub cluster_id: u64, // field 1
    pub member_id: u64,  // field 2
    pub revision: i64,   // field 3
    pub raft_term: u64,  // field 4
}

impl Message for ResponseHeader {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if self.cluster_id != 0 {
            prost::encoding::uint64::encode(1, &self.cluster_id, buf);
        }
        if self.member_id != 0 {
            prost::encoding::uint64::encode(2, &self.member_id, buf);
        }
        if self.revision != 0 {
            prost::encoding::int64::encode(3, &self.revision, buf);
        }
        if self.raft_term != 0 {
            prost::encoding::uint64::encode(4, &self.raft_term, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::uint64::merge(wire_type, &mut self.cluster_id, buf, ctx),
            2 => prost::encoding::uint64::merge(wire_type, &mut self.member_id, buf, ctx),
            3 => prost::encoding::int64::merge(wire_type, &mut self.revision, buf, ctx),
            4 => prost::encoding::uint64::merge(wire_type, &mut self.raft_term, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.cluster_id != 0 {
            len += prost::encoding::uint64::encoded_len(1, &self.cluster_id);
        }
        if self.member_id != 0 {
            len += prost::encoding::uint64::encoded_len(2, &self.member_id);
        }
        if self.revision != 0 {
            len += prost::encoding::int64::encoded_len(3, &self.revision);
        }
        if self.raft_term != 0 {
            len += prost::encoding::uint64::encoded_len(4, &self.raft_term);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Merge an optional embedded header (field 1 of every Auth response).
fn merge_header(
    header: &mut Option<ResponseHeader>,
    wire_type: prost::encoding::WireType,
    buf: &mut impl prost::bytes::Buf,
    ctx: prost::encoding::DecodeContext,
) -> Result<(), DecodeError> {
    let mut value = header.take().unwrap_or_default();
    prost::encoding::message::merge(wire_type, &mut value, buf, ctx)?;
    *header = Some(value);
    Ok(())
}

// ============================================================================
// Permission
// ============================================================================

/// Wire-format permission type matching authpb.Permission.Type.
///
/// `Unrecognized` is the protobuf sentinel for a value outside the known
/// set; it is encoded as `-1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PermissionType {
    Read,
    Write,
    Readwrite,
    Unrecognized,
}

impl PermissionType {
    /// Numeric wire value.
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Read => 0,
            Self::Write => 1,
            Self::Readwrite => 2,
            Self::Unrecognized => -1,
        }
    }

    /// Decode a numeric wire value; unknown values map to `Unrecognized`.
    pub const fn from_i32(value: i32) -> Self {
        match value {
            0 => Self::Read,
            1 => Self::Write,
            2 => Self::Readwrite,
            _ => Self::Unrecognized,
        }
    }
}

/// Wire-format Permission matching etcd's authpb.Permission.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct Permission {
    pub perm_type: i32,     // field 1
    pub key: Vec<u8>,       // field 2
    pub range_end: Vec<u8>, // field 3
}

impl Permission {
    /// Typed view of `perm_type`.
    pub fn permission_type(&self) -> PermissionType {
        PermissionType::from_i32(self.perm_type)
    }
}

impl Message for Permission {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if self.perm_type != 0 {
            prost::encoding::int32::encode(1, &self.perm_type, buf);
        }
        if !self.key.is_empty() {
            prost::encoding::bytes::encode(2, &self.key, buf);
        }
        if !self.range_end.is_empty() {
            prost::encoding::bytes::encode(3, &self.range_end, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::int32::merge(wire_type, &mut self.perm_type, buf, ctx),
            2 => prost::encoding::bytes::merge(wire_type, &mut self.key, buf, ctx),
            3 => prost::encoding::bytes::merge(wire_type, &mut self.range_end, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if self.perm_type != 0 {
            len += prost::encoding::int32::encoded_len(1, &self.perm_type);
        }
        if !self.key.is_empty() {
            len += prost::encoding::bytes::encoded_len(2, &self.key);
        }
        if !self.range_end.is_empty() {
            len += prost::encoding::bytes::encoded_len(3, &self.range_end);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Requests made only of byte fields
// ============================================================================

/// Define a request message whose fields are all length-delimited bytes.
macro_rules! bytes_message {
    ($(#[$meta:meta])* $name:ident { $($field:ident = $tag:literal),* $(,)? }) => {
        $(#[$meta])*
        #[derive(Clone, Default, Debug, PartialEq)]
        pub struct $name {
            $(pub $field: Vec<u8>,)*
        }

        impl Message for $name {
            #[allow(unused_variables)]
            fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
            where
                Self: Sized,
            {
                $(
                    if !self.$field.is_empty() {
                        prost::encoding::bytes::encode($tag, &self.$field, buf);
                    }
                )*
            }

            fn merge_field(
                &mut self,
                tag: u32,
                wire_type: prost::encoding::WireType,
                buf: &mut impl prost::bytes::Buf,
                ctx: prost::encoding::DecodeContext,
            ) -> Result<(), DecodeError>
            where
                Self: Sized,
            {
                match tag {
                    $($tag => prost::encoding::bytes::merge(wire_type, &mut self.$field, buf, ctx),)*
                    _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
                }
            }

            fn encoded_len(&self) -> usize {
                #[allow(unused_mut)]
                let mut len = 0;
                $(
                    if !self.$field.is_empty() {
                        len += prost::encoding::bytes::encoded_len($tag, &self.$field);
                    }
                )*
                len
            }

            fn clear(&mut self) {
                *self = Self::default();
            }
        }
    };
}

bytes_message!(
    /// etcdserverpb.AuthEnableRequest.
    AuthEnableRequest {}
);
bytes_message!(
    /// etcdserverpb.AuthDisableRequest.
    AuthDisableRequest {}
);
bytes_message!(
    /// etcdserverpb.AuthenticateRequest.
    AuthenticateRequest { name = 1, password = 2 }
);
bytes_message!(
    /// etcdserverpb.AuthUserAddRequest.
    AuthUserAddRequest { name = 1, password = 2 }
);
bytes_message!(
    /// etcdserverpb.AuthUserGetRequest.
    AuthUserGetRequest { name = 1 }
);
bytes_message!(
    /// etcdserverpb.AuthUserDeleteRequest.
    AuthUserDeleteRequest { name = 1 }
);
bytes_message!(
    /// etcdserverpb.AuthUserChangePasswordRequest.
    AuthUserChangePasswordRequest { name = 1, password = 2 }
);
bytes_message!(
    /// etcdserverpb.AuthUserListRequest.
    AuthUserListRequest {}
);
bytes_message!(
    /// etcdserverpb.AuthUserGrantRoleRequest.
    AuthUserGrantRoleRequest { user = 1, role = 2 }
);
bytes_message!(
    /// etcdserverpb.AuthUserRevokeRoleRequest.
    ///
    /// etcd names field 1 `name`; it carries the user identity exactly like
    /// `AuthUserGrantRoleRequest.user`, so both are called `user` here.
    AuthUserRevokeRoleRequest { user = 1, role = 2 }
);
bytes_message!(
    /// etcdserverpb.AuthRoleAddRequest.
    AuthRoleAddRequest { name = 1 }
);
bytes_message!(
    /// etcdserverpb.AuthRoleGetRequest.
    AuthRoleGetRequest { role = 1 }
);
bytes_message!(
    /// etcdserverpb.AuthRoleListRequest.
    AuthRoleListRequest {}
);
bytes_message!(
    /// etcdserverpb.AuthRoleDeleteRequest.
    AuthRoleDeleteRequest { role = 1 }
);
bytes_message!(
    /// etcdserverpb.AuthRoleRevokePermissionRequest.
    AuthRoleRevokePermissionRequest { role = 1, key = 2, range_end = 3 }
);

// ============================================================================
// AuthRoleGrantPermissionRequest
// ============================================================================

/// Wire-format AuthRoleGrantPermissionRequest.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct AuthRoleGrantPermissionRequest {
    pub name: Vec<u8>,            // field 1
    pub perm: Option<Permission>, // field 2
}

impl Message for AuthRoleGrantPermissionRequest {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if !self.name.is_empty() {
            prost::encoding::bytes::encode(1, &self.name, buf);
        }
        if let Some(ref perm) = self.perm {
            prost::encoding::message::encode(2, perm, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => prost::encoding::bytes::merge(wire_type, &mut self.name, buf, ctx),
            2 => {
                let mut perm = self.perm.take().unwrap_or_default();
                prost::encoding::message::merge(wire_type, &mut perm, buf, ctx)?;
                self.perm = Some(perm);
                Ok(())
            }
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if !self.name.is_empty() {
            len += prost::encoding::bytes::encoded_len(1, &self.name);
        }
        if let Some(ref perm) = self.perm {
            len += prost::encoding::message::encoded_len(2, perm);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Header-only responses
// ============================================================================

/// Define a response message that carries only a ResponseHeader.
macro_rules! header_response {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Default, Debug, PartialEq)]
        pub struct $name {
            pub header: Option<ResponseHeader>, // field 1
        }

        impl Message for $name {
            fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
            where
                Self: Sized,
            {
                if let Some(ref header) = self.header {
                    prost::encoding::message::encode(1, header, buf);
                }
            }

            fn merge_field(
                &mut self,
                tag: u32,
                wire_type: prost::encoding::WireType,
                buf: &mut impl prost::bytes::Buf,
                ctx: prost::encoding::DecodeContext,
            ) -> Result<(), DecodeError>
            where
                Self: Sized,
            {
                match tag {
                    1 => merge_header(&mut self.header, wire_type, buf, ctx),
                    _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
                }
            }

            fn encoded_len(&self) -> usize {
                self.header
                    .as_ref()
                    .map_or(0, |header| prost::encoding::message::encoded_len(1, header))
            }

            fn clear(&mut self) {
                *self = Self::default();
            }
        }
    };
}

header_response!(
    /// etcdserverpb.AuthEnableResponse.
    AuthEnableResponse
);
header_response!(
    /// etcdserverpb.AuthDisableResponse.
    AuthDisableResponse
);
header_response!(
    /// etcdserverpb.AuthUserAddResponse.
    AuthUserAddResponse
);
header_response!(
    /// etcdserverpb.AuthUserDeleteResponse.
    AuthUserDeleteResponse
);
header_response!(
    /// etcdserverpb.AuthUserChangePasswordResponse.
    AuthUserChangePasswordResponse
);
header_response!(
    /// etcdserverpb.AuthUserGrantRoleResponse.
    AuthUserGrantRoleResponse
);
header_response!(
    /// etcdserverpb.AuthUserRevokeRoleResponse.
    AuthUserRevokeRoleResponse
);
header_response!(
    /// etcdserverpb.AuthRoleAddResponse.
    AuthRoleAddResponse
);
header_response!(
    /// etcdserverpb.AuthRoleDeleteResponse.
    AuthRoleDeleteResponse
);
header_response!(
    /// etcdserverpb.AuthRoleGrantPermissionResponse.
    AuthRoleGrantPermissionResponse
);
header_response!(
    /// etcdserverpb.AuthRoleRevokePermissionResponse.
    AuthRoleRevokePermissionResponse
);

// ============================================================================
// Responses listing names
// ============================================================================

/// Define a response message with a header and one repeated string field.
macro_rules! names_response {
    ($(#[$meta:meta])* $name:ident { $field:ident = 2 }) => {
        $(#[$meta])*
        #[derive(Clone, Default, Debug, PartialEq)]
        pub struct $name {
            pub header: Option<ResponseHeader>, // field 1
            pub $field: Vec<Vec<u8>>,           // field 2
        }

        impl Message for $name {
            fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
            where
                Self: Sized,
            {
                if let Some(ref header) = self.header {
                    prost::encoding::message::encode(1, header, buf);
                }
                for value in &self.$field {
                    prost::encoding::bytes::encode(2, value, buf);
                }
            }

            fn merge_field(
                &mut self,
                tag: u32,
                wire_type: prost::encoding::WireType,
                buf: &mut impl prost::bytes::Buf,
                ctx: prost::encoding::DecodeContext,
            ) -> Result<(), DecodeError>
            where
                Self: Sized,
            {
                match tag {
                    1 => merge_header(&mut self.header, wire_type, buf, ctx),
                    2 => {
                        let mut value = Vec::new();
                        prost::encoding::bytes::merge(wire_type, &mut value, buf, ctx)?;
                        self.$field.push(value);
                        Ok(())
                    }
                    _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
                }
            }

            fn encoded_len(&self) -> usize {
                let mut len = 0;
                if let Some(ref header) = self.header {
                    len += prost::encoding::message::encoded_len(1, header);
                }
                for value in &self.$field {
                    len += prost::encoding::bytes::encoded_len(2, value);
                }
                len
            }

            fn clear(&mut self) {
                *self = Self::default();
            }
        }
    };
}

names_response!(
    /// etcdserverpb.AuthUserGetResponse.
    AuthUserGetResponse { roles = 2 }
);
names_response!(
    /// etcdserverpb.AuthUserListResponse.
    AuthUserListResponse { users = 2 }
);
names_response!(
    /// etcdserverpb.AuthRoleListResponse.
    AuthRoleListResponse { roles = 2 }
);

// ============================================================================
// AuthenticateResponse
// ============================================================================

/// Wire-format AuthenticateResponse.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct AuthenticateResponse {
    pub header: Option<ResponseHeader>, // field 1
    pub token: Vec<u8>,                 // field 2
}

impl Message for AuthenticateResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if let Some(ref header) = self.header {
            prost::encoding::message::encode(1, header, buf);
        }
        if !self.token.is_empty() {
            prost::encoding::bytes::encode(2, &self.token, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => merge_header(&mut self.header, wire_type, buf, ctx),
            2 => prost::encoding::bytes::merge(wire_type, &mut self.token, buf, ctx),
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if let Some(ref header) = self.header {
            len += prost::encoding::message::encoded_len(1, header);
        }
        if !self.token.is_empty() {
            len += prost::encoding::bytes::encoded_len(2, &self.token);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// AuthRoleGetResponse
// ============================================================================

/// Wire-format AuthRoleGetResponse.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct AuthRoleGetResponse {
    pub header: Option<ResponseHeader>, // field 1
    pub perm: Vec<Permission>,          // field 2
}

impl Message for AuthRoleGetResponse {
    fn encode_raw(&self, buf: &mut impl prost::bytes::BufMut)
    where
        Self: Sized,
    {
        if let Some(ref header) = self.header {
            prost::encoding::message::encode(1, header, buf);
        }
        for perm in &self.perm {
            prost::encoding::message::encode(2, perm, buf);
        }
    }

    fn merge_field(
        &mut self,
        tag: u32,
        wire_type: prost::encoding::WireType,
        buf: &mut impl prost::bytes::Buf,
        ctx: prost::encoding::DecodeContext,
    ) -> Result<(), DecodeError>
    where
        Self: Sized,
    {
        match tag {
            1 => merge_header(&mut self.header, wire_type, buf, ctx),
            2 => {
                let mut perm = Permission::default();
                prost::encoding::message::merge(wire_type, &mut perm, buf, ctx)?;
                self.perm.push(perm);
                Ok(())
            }
            _ => prost::encoding::skip_field(wire_type, tag, buf, ctx),
        }
    }

    fn encoded_len(&self) -> usize {
        let mut len = 0;
        if let Some(ref header) = self.header {
            len += prost::encoding::message::encoded_len(1, header);
        }
        for perm in &self.perm {
            len += prost::encoding::message::encoded_len(2, perm);
        }
        len
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}
