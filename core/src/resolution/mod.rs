//! # RESOLUTION ENGINE MODULE
//!
//! **SCOPED BEHAVIOR RESOLUTION & OVERRIDE SUPPRESSION**
//!
//! Given a runtime target (handler type plus optionally the invoked method)
//! and a behavior kind, the engine computes the ordered, de-duplicated list
//! of applicable behavior instances from the frozen descriptor registry:
//! scope matching, override suppression, stable ordering, then producer
//! materialization with a fail-closed policy.

pub mod engine;

pub use engine::ResolutionEngine;
