//! Minimart Core - Shared domain types.
//!
//! This crate provides common types used across all Minimart components:
//! - `storefront` - The customer-facing demo shop
//! - `integration-tests` - End-to-end tests driving the storefront router
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no HTTP.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, and emails

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
