//! # FILTRIUM CORE LIBRARY
//!
//! **SCOPED CROSS-CUTTING BEHAVIOR RESOLUTION FOR REQUEST PIPELINES**
//!
//! **ARCHITECTURE**: Append-only descriptor registry, stateless resolution
//! engine, per-scope keyed singleton cache
//! **GUARANTEE**: Deterministic resolution order, fail-closed on producer
//! failure, at-most-one cache construction per scope and key
//! **BOUNDARY**: The dependency container and the request pipeline are
//! external collaborators reached only through the `container` traits

pub mod api;
pub mod cache;
pub mod container;
pub mod descriptors;
pub mod errors;
pub mod registration;
pub mod resolution;
