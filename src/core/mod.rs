//! Core components of the `livesale-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`LsClient`] and its builder.
//! - The [`ApiError`] and [`FetchError`] types.
//! - The [`StaticDataService`] collaborator trait.
//! - Typed lookups over dynamic JSON.

/// The HTTP client (`LsClient`), builder, and configuration.
pub mod client;
/// Transport and fetch error types.
pub mod error;
/// Path lookups over `serde_json::Value` trees.
pub mod json;
/// Service traits abstracting the network collaborator.
pub mod services;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

// convenient re-exports so most code can just `use crate::core::LsClient`
pub use client::{LsClient, LsClientBuilder};
pub use error::{ApiError, FetchError};
pub use services::{StaticDataFuture, StaticDataService};
