//! SecureVision Core - Shared types library.
//!
//! This crate provides common types used across the SecureVision backend:
//! - `api` - Public submissions API for the marketing site
//! - `integration-tests` - End-to-end coverage against a running API
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage
//! backends, no HTTP. Form payloads arrive as all-optional drafts,
//! validation turns a draft into a well-typed input, and the
//! [`store::SubmissionStore`] port describes how accepted records are
//! persisted and listed.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, prices, and statuses
//! - [`submission`] - Draft payloads, validation, and stored record types
//! - [`store`] - The storage port and its error type

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod store;
pub mod submission;
pub mod types;

pub use store::{StoreError, SubmissionStore};
pub use submission::*;
pub use types::*;
