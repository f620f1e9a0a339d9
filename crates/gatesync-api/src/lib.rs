//! # Remote Management API Surface
//!
//! Typed surface of the gateway management API as seen by the gatesync
//! core: the virtual host wire representation, the error taxonomy, and the
//! capability trait a transport collaborator implements.
//!
//! This crate deliberately contains no HTTP client. Transport, retry, and
//! authentication belong to the collaborator behind [`VirtualHostsApi`];
//! the core only requires that remote failures arrive as structured
//! [`ApiError`] values — in particular that a missing resource is reported
//! as [`ApiError::NotFound`] rather than buried in message text.
//!
//! ## Crate Organization
//!
//! - [`virtual_host`] - Wire types (`VirtualHost`, `SslInfo`)
//! - [`error`] - `ApiError` with transient/not-found classification
//! - [`client`] - The `VirtualHostsApi` capability trait and `RawResponse`

pub mod client;
pub mod error;
pub mod virtual_host;

pub use client::{RawResponse, VirtualHostsApi};
pub use error::{ApiError, ApiResult};
pub use virtual_host::{SslInfo, VirtualHost};

// Re-export async_trait for trait implementors
pub use async_trait::async_trait;
