//! Resource mapper
//!
//! Pure conversions between the flat local record and the remote
//! [`VirtualHost`] wire shape. All string-to-native conversions live here;
//! nothing past this boundary ever sees a string-encoded port or a
//! string-typed boolean other than the two TLS flags the remote contract
//! itself keeps as strings.

use gatesync_api::{SslInfo, VirtualHost};

use crate::error::{ReconcileError, ReconcileResult};
use crate::state::{FieldValue, ResourceState};

/// Marker key for the optional TLS block.
pub const SSL_BLOCK: &str = "ssl_info";

pub const SSL_ENABLED: &str = "ssl_info.0.ssl_enabled";
pub const SSL_CLIENT_AUTH_ENABLED: &str = "ssl_info.0.client_auth_enabled";
pub const SSL_KEY_STORE: &str = "ssl_info.0.key_store";
pub const SSL_TRUST_STORE: &str = "ssl_info.0.trust_store";
pub const SSL_KEY_ALIAS: &str = "ssl_info.0.key_alias";
pub const SSL_CIPHERS: &str = "ssl_info.0.ciphers";
pub const SSL_PROTOCOLS: &str = "ssl_info.0.protocols";
pub const SSL_IGNORE_VALIDATION_ERRORS: &str = "ssl_info.0.ignore_validation_errors";

const SSL_FIELDS: [&str; 8] = [
    SSL_ENABLED,
    SSL_CLIENT_AUTH_ENABLED,
    SSL_KEY_STORE,
    SSL_TRUST_STORE,
    SSL_KEY_ALIAS,
    SSL_CIPHERS,
    SSL_PROTOCOLS,
    SSL_IGNORE_VALIDATION_ERRORS,
];

/// Build the remote payload from the local record.
///
/// Fails with a mapping error when `name` is absent or `port` is not a
/// parseable non-negative integer — an invalid port is never silently
/// defaulted. The TLS block is emitted only when present locally; its
/// absent list fields become the remote contract's sentinel `[""]`.
pub fn to_remote<S: ResourceState + ?Sized>(state: &S) -> ReconcileResult<VirtualHost> {
    let name = state
        .get_str("name")
        .ok_or_else(|| ReconcileError::mapping("name", "virtual host name is required"))?
        .to_string();

    let port_raw = state
        .get_str("port")
        .ok_or_else(|| ReconcileError::mapping("port", "port is required"))?;
    let port: u32 = port_raw.parse().map_err(|_| {
        ReconcileError::mapping(
            "port",
            format!("'{port_raw}' is not a non-negative integer"),
        )
    })?;

    let ssl_info = if ssl_block_present(state) {
        Some(SslInfo {
            ssl_enabled: scalar(state, SSL_ENABLED),
            client_auth_enabled: scalar(state, SSL_CLIENT_AUTH_ENABLED),
            key_store: scalar(state, SSL_KEY_STORE),
            trust_store: scalar(state, SSL_TRUST_STORE),
            key_alias: scalar(state, SSL_KEY_ALIAS),
            ciphers: list_or_sentinel(state, SSL_CIPHERS),
            protocols: list_or_sentinel(state, SSL_PROTOCOLS),
            ignore_validation_errors: state
                .get_bool(SSL_IGNORE_VALIDATION_ERRORS)
                .unwrap_or(false),
        })
    } else {
        None
    };

    Ok(VirtualHost {
        name,
        host: state.get_str("hostAliases").unwrap_or_default().to_string(),
        enabled: state.get_bool("enabled").unwrap_or(false),
        port,
        ssl_info,
    })
}

/// Derive the local field updates a remote resource implies.
///
/// The port comes back string-encoded; TLS sub-fields are produced only
/// when the remote object carries a TLS block, so a TLS-less reply leaves
/// existing local TLS fields untouched. Pure: the caller applies the pairs.
pub fn from_remote(host: &VirtualHost) -> Vec<(String, FieldValue)> {
    let mut updates = vec![
        ("name".to_string(), host.name.clone().into()),
        ("hostAliases".to_string(), host.host.clone().into()),
        ("enabled".to_string(), host.enabled.into()),
        ("port".to_string(), host.port.to_string().into()),
    ];

    if let Some(ssl) = &host.ssl_info {
        updates.push((SSL_ENABLED.to_string(), ssl.ssl_enabled.clone().into()));
        updates.push((
            SSL_CLIENT_AUTH_ENABLED.to_string(),
            ssl.client_auth_enabled.clone().into(),
        ));
        updates.push((SSL_KEY_STORE.to_string(), ssl.key_store.clone().into()));
        updates.push((SSL_TRUST_STORE.to_string(), ssl.trust_store.clone().into()));
        updates.push((SSL_KEY_ALIAS.to_string(), ssl.key_alias.clone().into()));
        updates.push((SSL_CIPHERS.to_string(), ssl.ciphers.clone().into()));
        updates.push((SSL_PROTOCOLS.to_string(), ssl.protocols.clone().into()));
        updates.push((
            SSL_IGNORE_VALIDATION_ERRORS.to_string(),
            ssl.ignore_validation_errors.into(),
        ));
    }

    updates
}

fn ssl_block_present<S: ResourceState + ?Sized>(state: &S) -> bool {
    state.has(SSL_BLOCK) || SSL_FIELDS.iter().any(|field| state.has(field))
}

fn scalar<S: ResourceState + ?Sized>(state: &S, field: &str) -> String {
    state.get_str(field).unwrap_or_default().to_string()
}

// A list set to empty is indistinguishable from an unset one on the wire;
// both map to the single-empty-string sentinel the remote API expects.
fn list_or_sentinel<S: ResourceState + ?Sized>(state: &S, field: &str) -> Vec<String> {
    match state.get_list(field) {
        Some(items) if !items.is_empty() => items.to_vec(),
        _ => vec![String::new()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MemoryState;

    fn plain_record() -> MemoryState {
        MemoryState::new()
            .with("name", "vh1")
            .with("hostAliases", "a.com")
            .with("baseUrl", "https://x")
            .with("port", "443")
            .with("enabled", true)
            .with("properties", "{}")
    }

    #[test]
    fn test_plain_record_maps_without_tls() {
        let remote = to_remote(&plain_record()).unwrap();
        assert_eq!(remote.name, "vh1");
        assert_eq!(remote.host, "a.com");
        assert_eq!(remote.port, 443);
        assert!(remote.enabled);
        assert!(remote.ssl_info.is_none());
    }

    #[test]
    fn test_non_numeric_port_is_a_mapping_error() {
        let state = plain_record().with("port", "abc");
        let err = to_remote(&state).unwrap_err();
        match err {
            ReconcileError::Mapping { field, message } => {
                assert_eq!(field, "port");
                assert!(message.contains("'abc'"), "message: {message}");
            }
            other => panic!("expected mapping error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_port_is_a_mapping_error() {
        let state = plain_record().with("port", "-1");
        assert!(to_remote(&state).is_err());
    }

    #[test]
    fn test_missing_port_is_a_mapping_error() {
        let state = MemoryState::new().with("name", "vh1");
        let err = to_remote(&state).unwrap_err();
        assert!(matches!(err, ReconcileError::Mapping { ref field, .. } if field == "port"));
    }

    #[test]
    fn test_absent_tls_lists_become_sentinel() {
        let state = plain_record()
            .with(SSL_ENABLED, "true")
            .with(SSL_KEY_STORE, "ks");

        let remote = to_remote(&state).unwrap();
        let ssl = remote.ssl_info.unwrap();
        assert_eq!(ssl.ciphers, vec![String::new()]);
        assert_eq!(ssl.protocols, vec![String::new()]);
        assert_eq!(ssl.ssl_enabled, "true");
        assert_eq!(ssl.client_auth_enabled, "");
        assert!(!ssl.ignore_validation_errors);
    }

    #[test]
    fn test_block_marker_alone_enables_tls_mapping() {
        let state = plain_record().with(SSL_BLOCK, "");
        let remote = to_remote(&state).unwrap();
        assert!(remote.ssl_info.is_some());
    }

    #[test]
    fn test_from_remote_stringifies_port() {
        let remote = VirtualHost {
            name: "vh1".to_string(),
            host: "a.com".to_string(),
            enabled: true,
            port: 443,
            ssl_info: None,
        };

        let updates = from_remote(&remote);
        assert!(updates.contains(&("port".to_string(), "443".into())));
        assert!(updates.contains(&("hostAliases".to_string(), "a.com".into())));
        // No TLS block remotely: no TLS pairs, local TLS fields untouched.
        assert!(updates.iter().all(|(field, _)| !field.starts_with("ssl_info")));
    }

    #[test]
    fn test_tls_roundtrip() {
        let state = plain_record()
            .with(SSL_ENABLED, "true")
            .with(SSL_CLIENT_AUTH_ENABLED, "false")
            .with(SSL_KEY_STORE, "ks")
            .with(SSL_TRUST_STORE, "ts")
            .with(SSL_KEY_ALIAS, "ka")
            .with(SSL_CIPHERS, vec!["TLS_AES_128_GCM_SHA256".to_string()])
            .with(SSL_PROTOCOLS, vec!["TLSv1.2".to_string(), "TLSv1.3".to_string()])
            .with(SSL_IGNORE_VALIDATION_ERRORS, true);

        let remote = to_remote(&state).unwrap();

        let mut restored = MemoryState::new();
        for (field, value) in from_remote(&remote) {
            restored.set(&field, value);
        }

        assert_eq!(restored.get_str("port"), Some("443"));
        assert_eq!(restored.get_str(SSL_ENABLED), Some("true"));
        assert_eq!(restored.get_str(SSL_CLIENT_AUTH_ENABLED), Some("false"));
        assert_eq!(restored.get_str(SSL_KEY_ALIAS), Some("ka"));
        assert_eq!(
            restored.get_list(SSL_CIPHERS),
            Some(&["TLS_AES_128_GCM_SHA256".to_string()][..])
        );
        assert_eq!(
            restored.get_list(SSL_PROTOCOLS),
            Some(&["TLSv1.2".to_string(), "TLSv1.3".to_string()][..])
        );
        assert_eq!(restored.get_bool(SSL_IGNORE_VALIDATION_ERRORS), Some(true));
    }
}
