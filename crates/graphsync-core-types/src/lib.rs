//! Core types shared across GraphSync facilities
//!
//! This crate provides foundational types used by both reconciliation
//! engines and the logging facility:
//!
//! - **Identifiers**: `RemoteId`, the normalized join key between graphs
//! - **Schema constants**: Canonical field keys, event and operation names

pub mod ids;
pub mod schema;

pub use ids::RemoteId;
