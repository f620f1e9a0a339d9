//! Lifecycle controller
//!
//! Drives the five operations over a virtual host record against a
//! provided remote client. Calls are strictly sequential; the controller
//! owns the record exclusively for the duration of one operation, never
//! retries, and writes to the record only after the corresponding remote
//! call has fully succeeded.

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use gatesync_api::VirtualHostsApi;

use crate::error::{ReconcileError, ReconcileResult};
use crate::mapping;
use crate::state::{FieldValue, MemoryState, ResourceState};
use crate::token::ImportToken;

/// A lifecycle operation, used as error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
    Import,
}

impl Operation {
    /// Lowercase name of the operation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Import => "import",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle controller for a single virtual host record.
///
/// Generic over the remote client so transports (and test doubles) plug in
/// behind the [`VirtualHostsApi`] seam.
#[derive(Debug)]
pub struct VirtualHostLifecycle<C> {
    client: C,
}

impl<C: VirtualHostsApi> VirtualHostLifecycle<C> {
    /// Create a controller around the given remote client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Access the underlying client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Create the remote resource from the local record.
    ///
    /// On success the record receives a fresh opaque identifier and is
    /// refreshed from the remote side, so server-side normalization (such
    /// as a defaulted port) lands locally. On any failure the record is
    /// left byte-identical — the identifier is only assigned once the
    /// remote create has succeeded, so there is never a half-written
    /// record to roll back.
    #[instrument(skip(self, state))]
    pub async fn create<S: ResourceState>(&self, state: &mut S) -> ReconcileResult<()> {
        let payload = mapping::to_remote(state)?;
        let env = required_field(state, "env")?;

        debug!(name = %payload.name, env = %env, "creating virtual host");
        self.client
            .create(&payload, &env)
            .await
            .map_err(|e| ReconcileError::remote(Operation::Create, e))?;

        state.assign_id(Uuid::new_v4().to_string());
        info!(name = %payload.name, env = %env, "virtual host created");

        self.refresh(state).await
    }

    /// Pull authoritative remote state into the local record.
    ///
    /// A structured not-found is drift, not failure: the local identity is
    /// cleared and the call succeeds, so the next apply can re-create the
    /// resource. Any other remote error propagates with the record left
    /// unmodified.
    #[instrument(skip(self, state))]
    pub async fn read<S: ResourceState>(&self, state: &mut S) -> ReconcileResult<()> {
        self.refresh(state).await
    }

    /// Push the local record to the existing remote resource.
    ///
    /// Same shape as create, minus the identifier assignment; ends with
    /// the read-after-write refresh.
    #[instrument(skip(self, state))]
    pub async fn update<S: ResourceState>(&self, state: &mut S) -> ReconcileResult<()> {
        let payload = mapping::to_remote(state)?;
        let env = required_field(state, "env")?;

        debug!(name = %payload.name, env = %env, "updating virtual host");
        self.client
            .update(&payload, &env)
            .await
            .map_err(|e| ReconcileError::remote(Operation::Update, e))?;

        info!(name = %payload.name, env = %env, "virtual host updated");
        self.refresh(state).await
    }

    /// Delete the remote resource and clear the record's local identity.
    #[instrument(skip(self, state))]
    pub async fn delete<S: ResourceState>(&self, state: &mut S) -> ReconcileResult<()> {
        let name = required_field(state, "name")?;
        let env = required_field(state, "env")?;

        debug!(name = %name, env = %env, "deleting virtual host");
        self.client
            .delete(&name, &env)
            .await
            .map_err(|e| ReconcileError::remote(Operation::Delete, e))?;

        state.clear_id();
        info!(name = %name, env = %env, "virtual host deleted");
        Ok(())
    }

    /// Materialize a brand-new local record from an import token.
    ///
    /// The token is the resource's `{name}_{env}` identity. Unlike read,
    /// a missing remote resource is fatal here — there is no record to
    /// return. The environment is set explicitly on the new record since
    /// it is not part of the wire body.
    #[instrument(skip(self))]
    pub async fn import(&self, token: &str) -> ReconcileResult<MemoryState> {
        let token = ImportToken::parse(token)?;

        debug!(name = %token.name(), env = %token.env(), "importing virtual host");
        let (remote, _) = match self.client.get(token.name(), token.env()).await {
            Ok(reply) => reply,
            Err(e) if e.is_not_found() => {
                warn!(name = %token.name(), env = %token.env(), "import target does not exist");
                return Err(ReconcileError::NotFound {
                    name: token.name().to_string(),
                    env: token.env().to_string(),
                });
            }
            Err(e) => return Err(ReconcileError::remote(Operation::Import, e)),
        };

        let mut state = MemoryState::new();
        state.assign_id(token.to_string());
        for (field, value) in mapping::from_remote(&remote) {
            state.set(&field, value);
        }
        state.set("env", FieldValue::from(token.env()));

        info!(name = %token.name(), env = %token.env(), "virtual host imported");
        Ok(state)
    }

    // The read-after-write step. Create and update both end here, and read
    // is exactly this step, so tests can exercise it through any of them.
    async fn refresh<S: ResourceState>(&self, state: &mut S) -> ReconcileResult<()> {
        let name = required_field(state, "name")?;
        let env = required_field(state, "env")?;

        match self.client.get(&name, &env).await {
            Ok((remote, _)) => {
                for (field, value) in mapping::from_remote(&remote) {
                    state.set(&field, value);
                }
                debug!(name = %name, env = %env, "local state refreshed from remote");
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                debug!(name = %name, env = %env, "remote virtual host gone, clearing local identity");
                state.clear_id();
                Ok(())
            }
            Err(e) => Err(ReconcileError::remote(Operation::Read, e)),
        }
    }
}

fn required_field<S: ResourceState + ?Sized>(
    state: &S,
    field: &str,
) -> ReconcileResult<String> {
    state
        .get_str(field)
        .map(str::to_string)
        .ok_or_else(|| ReconcileError::mapping(field, format!("{field} is required")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "create");
        assert_eq!(Operation::Import.to_string(), "import");
        assert_eq!(Operation::Delete.as_str(), "delete");
    }
}
