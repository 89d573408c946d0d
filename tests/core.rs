//! Core infrastructure tests.

mod common;

use lattice_auth::auth::permission::prefix_range_end;
use lattice_auth::config::{ClientConfig, ConfigOverrides};
use lattice_auth::{AuthClient, AuthError, ByteSequence, Permission, PermissionKind};
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;
use tonic::{Code, Status};

// ============================================================================
// Config tests
// ============================================================================

#[test]
fn parse_client_config() {
    let file = common::create_client_config("http://10.0.0.5:2379", "debug");

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.client.endpoint, "http://10.0.0.5:2379");
    assert_eq!(config.client.connect_timeout(), Duration::from_millis(250));
    assert_eq!(
        config.client.request_timeout(),
        Some(Duration::from_secs(1))
    );
    assert_eq!(config.telemetry.log_level, "debug");
}

#[test]
fn empty_config_uses_defaults() {
    let file = NamedTempFile::new().unwrap();

    let config = ClientConfig::from_file(file.path()).unwrap();
    assert_eq!(config.client.endpoint, "http://127.0.0.1:2379");
    assert_eq!(config.client.connect_timeout_ms, 5_000);
    assert!(config.client.request_timeout().is_none());
    assert_eq!(config.telemetry.log_level, "info");
}

#[test]
fn validate_endpoint_scheme() {
    let config_content = r#"
[client]
endpoint = "127.0.0.1:2379"
"#;

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(config_content.as_bytes()).unwrap();

    let result = ClientConfig::from_file(file.path());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("endpoint"));
}

#[test]
fn validate_connect_timeout() {
    let result = ClientConfig::from_toml(
        r#"
[client]
connect_timeout_ms = 0
"#,
    );
    let err = result.unwrap_err().to_string();
    assert!(err.contains("connect_timeout_ms"));
}

#[test]
fn validate_log_level() {
    let file = common::create_client_config("http://127.0.0.1:2379", "verbose");

    let result = ClientConfig::from_file(file.path());
    assert!(result.unwrap_err().to_string().contains("log_level"));
}

#[test]
fn malformed_toml_rejected() {
    let result = ClientConfig::from_toml("[client\nendpoint = ");
    assert!(result.is_err());
}

#[test]
fn overrides_replace_file_values() {
    let file = common::create_client_config("http://10.0.0.5:2379", "info");
    let mut config = ClientConfig::from_file(file.path()).unwrap();

    config.apply_overrides(&ConfigOverrides {
        endpoint: Some("https://etcd.example:2379".to_string()),
        log_level: None,
    });
    config.validate().unwrap();
    assert_eq!(config.client.endpoint, "https://etcd.example:2379");
    assert_eq!(config.telemetry.log_level, "info");
}

#[tokio::test]
async fn connect_is_lazy() {
    // Nothing listens here; construction must still succeed.
    let config = ClientConfig::from_toml(
        r#"
[client]
endpoint = "http://127.0.0.1:1"
connect_timeout_ms = 100
"#,
    )
    .unwrap();
    assert!(AuthClient::connect(&config).is_ok());
}

#[test]
fn connect_requires_runtime() {
    let err = AuthClient::connect(&ClientConfig::default()).unwrap_err();
    assert!(matches!(err, AuthError::Transport { .. }));
}

// ============================================================================
// Error tests
// ============================================================================

#[test]
fn error_display() {
    let err = AuthError::invalid_argument("user can't be null");
    assert_eq!(err.to_string(), "invalid argument: user can't be null");

    let err = AuthError::from(Status::not_found("etcdserver: user name not found"));
    assert!(err.to_string().contains("etcdserver: user name not found"));
    assert_eq!(err.code(), Code::NotFound);
}

#[test]
fn error_codes_for_local_failures() {
    assert_eq!(
        AuthError::invalid_argument("x").code(),
        Code::InvalidArgument
    );
    assert_eq!(AuthError::Cancelled.code(), Code::Cancelled);
    assert!(AuthError::Cancelled.status().is_none());
}

#[test]
fn retriable_statuses() {
    let no_leader = AuthError::from(Status::unavailable("no leader"));
    let slow = AuthError::from(Status::deadline_exceeded("slow"));
    let denied = AuthError::from(Status::permission_denied("no"));
    assert!(no_leader.is_retriable());
    assert!(slow.is_retriable());
    assert!(!denied.is_retriable());
    assert!(!AuthError::Cancelled.is_retriable());
}

// ============================================================================
// Byte sequence and permission tests
// ============================================================================

#[test]
fn byte_sequence_conversions() {
    let from_str = ByteSequence::from("alice");
    let from_vec = ByteSequence::from(b"alice".to_vec());
    assert_eq!(from_str, from_vec);
    assert_eq!(from_str.to_str(), Some("alice"));

    let binary = ByteSequence::from(&[0xff, 0x00][..]);
    assert!(binary.to_str().is_none());
    assert_eq!(binary.len(), 2);
    assert!(ByteSequence::empty().is_empty());
}

#[test]
fn permission_ranges() {
    let exact = Permission::exact("foo", PermissionKind::Read);
    assert!(!exact.is_range());

    let prefix = Permission::prefix("foo", PermissionKind::Write);
    assert!(prefix.is_prefix());
    assert_eq!(prefix.range_end, ByteSequence::from("fop"));

    let range = Permission::new("a", "z", PermissionKind::ReadWrite);
    assert!(range.is_range());
    assert!(!range.is_prefix());
}

#[test]
fn prefix_range_end_carries() {
    assert_eq!(prefix_range_end(b"a\xff"), b"b".to_vec());
    assert_eq!(prefix_range_end(b"\xff\xff"), vec![0]);
    assert_eq!(prefix_range_end(b""), vec![0]);
}

#[test]
fn permission_kind_parsing() {
    assert_eq!(
        "READ".parse::<PermissionKind>().unwrap(),
        PermissionKind::Read
    );
    assert_eq!(
        "readwrite".parse::<PermissionKind>().unwrap(),
        PermissionKind::ReadWrite
    );
    assert!("admin".parse::<PermissionKind>().is_err());
    assert!(PermissionKind::ReadWrite.allows_read());
    assert!(!PermissionKind::Unrecognized.allows_write());
}
