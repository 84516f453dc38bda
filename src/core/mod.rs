//! Core components of the `alphavantage-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`AvClient`] and its builder.
//! - The primary [`AvError`] type.
//! - The [`Table`] model produced by the shaping layer.
//! - Internal networking and provider-payload plumbing.

/// The main client (`AvClient`), builder, and configuration.
pub mod client;
/// The primary error type (`AvError`) for the crate.
pub mod error;
/// Column-ordered tabular data (`Table`, `Cell`) produced by the shaping layer.
pub mod table;

pub(crate) mod net;
pub(crate) mod wire;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use error::AvError;
pub use table::{Cell, Table};
