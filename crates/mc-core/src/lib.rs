//! # mc-core
//!
//! Core record types, lenient decoding, and error types for Mission Control.
//!
//! This crate provides the foundational types shared across all Mission Control crates:
//! - Record structs for the two remote collections (tasks, projects)
//! - The enriched task view-model and the immutable refresh snapshot
//! - Well-known status labels and the priority rank table
//! - Default locations of the published documents
//! - Declarative bucket and sort specifications
//! - Lenient field deserializers for best-effort JSON access
//! - Cross-cutting error types

pub mod documents;
pub mod entities;
pub mod errors;
pub mod ids;
pub mod lenient;
pub mod ordering;
pub mod records;
pub mod status;

pub use errors::CoreError;
