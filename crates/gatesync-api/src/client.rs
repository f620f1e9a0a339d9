//! Remote client capability trait
//!
//! The contract a transport collaborator implements to give the
//! reconciliation core access to the management API. All calls address a
//! single virtual host inside one environment namespace; the environment is
//! part of the resource identity and never travels in the request body.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::virtual_host::VirtualHost;

/// Raw reply envelope from the transport.
///
/// Passed through untouched for callers that want the original status and
/// body; the reconciliation core never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code of the reply.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl RawResponse {
    /// Create a new raw response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// CRUD capability for virtual host resources.
///
/// Implementations own transport, authentication, timeouts, and any retry
/// policy. They must report a missing resource as
/// [`ApiError::NotFound`](crate::ApiError::NotFound) so callers can
/// distinguish drift from failure without parsing message text.
#[async_trait]
pub trait VirtualHostsApi: Send + Sync {
    /// Create the virtual host in the given environment.
    ///
    /// Returns the server's echo of the resource, which may carry
    /// server-side normalization (default ports, canonical casing).
    async fn create(
        &self,
        host: &VirtualHost,
        env: &str,
    ) -> ApiResult<(VirtualHost, RawResponse)>;

    /// Fetch the virtual host `name` from the given environment.
    async fn get(&self, name: &str, env: &str) -> ApiResult<(VirtualHost, RawResponse)>;

    /// Update the virtual host in the given environment.
    async fn update(
        &self,
        host: &VirtualHost,
        env: &str,
    ) -> ApiResult<(VirtualHost, RawResponse)>;

    /// Delete the virtual host `name` from the given environment.
    async fn delete(&self, name: &str, env: &str) -> ApiResult<RawResponse>;
}
