//! Virtual host wire types
//!
//! The remote management API's representation of a virtual host: a named
//! listener with host aliases, a native-integer port, and an optional TLS
//! block. Field spelling follows the remote contract exactly, including the
//! `sSLInfo` key and the string-typed TLS enable flags.

use serde::{Deserialize, Serialize};

/// A virtual host resource as the remote API represents it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualHost {
    /// Resource name; with the environment, the remote identity.
    pub name: String,

    /// Serialized host alias list.
    #[serde(rename = "hostAliases", default)]
    pub host: String,

    /// Whether the listener is enabled.
    #[serde(default)]
    pub enabled: bool,

    /// Listener port, a native non-negative integer on the wire.
    #[serde(default)]
    pub port: u32,

    /// Optional TLS block; omitted entirely when absent.
    #[serde(rename = "sSLInfo", default, skip_serializing_if = "Option::is_none")]
    pub ssl_info: Option<SslInfo>,
}

/// TLS settings of a virtual host.
///
/// The two enable flags are string-typed on the wire (`"true"`/`"false"`),
/// not booleans; only `ignoreValidationErrors` is a native boolean. The
/// list fields use a single empty-string element as the contract's marker
/// for "present but unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SslInfo {
    #[serde(rename = "enabled", default)]
    pub ssl_enabled: String,

    #[serde(default)]
    pub client_auth_enabled: String,

    #[serde(default)]
    pub key_store: String,

    #[serde(default)]
    pub trust_store: String,

    #[serde(default)]
    pub key_alias: String,

    #[serde(default)]
    pub ciphers: Vec<String>,

    #[serde(default)]
    pub protocols: Vec<String>,

    #[serde(default)]
    pub ignore_validation_errors: bool,
}
