//! # Virtual Host Reconciliation Core
//!
//! Keeps a flat, loosely-typed local state record consistent with the
//! structured virtual host resource held by a remote gateway management
//! API, and recovers local state when the remote side has drifted.
//!
//! ## Architecture
//!
//! Two components, consumed top-down:
//!
//! - [`mapping`] - The resource mapper. Pure conversions between the local
//!   record (string-encoded port, flattened optional TLS block) and the
//!   remote [`VirtualHost`](gatesync_api::VirtualHost). No I/O.
//! - [`lifecycle`] - The lifecycle controller. Drives create, read, update,
//!   delete, and import against a provided
//!   [`VirtualHostsApi`](gatesync_api::VirtualHostsApi) client, feeding
//!   responses back through the mapper to refresh local state.
//!
//! The collaborators stay outside: transport and authentication live behind
//! the client trait, persistence and locking behind [`ResourceState`].
//! Operations within one reconciliation are strictly sequential; the
//! controller holds the record exclusively for the duration of a call and
//! performs no locking or retry of its own.
//!
//! ## Drift recovery
//!
//! A read that hits a structured not-found clears the record's local
//! identity and succeeds, so the next apply can re-create the resource.
//! Import is the opposite: with no record to return, not-found is fatal.

pub mod error;
pub mod lifecycle;
pub mod mapping;
pub mod state;
pub mod token;

pub use error::{ReconcileError, ReconcileResult};
pub use lifecycle::{Operation, VirtualHostLifecycle};
pub use state::{FieldValue, MemoryState, ResourceState};
pub use token::ImportToken;
