//! # BEHAVIOR DESCRIPTOR MODULE
//!
//! **DATA MODEL FOR CROSS-CUTTING BEHAVIOR REGISTRATION**
//!
//! Descriptors tag a registered behavior with its kind (pre-action,
//! authorization, ...), its scope (global, handler-level, method-level), its
//! owning target, a priority order, and an override flag. The registry is
//! append-only during startup and immutable afterwards; the resolution
//! engine only ever reads and filters it.

pub mod registry;
pub mod types;

pub use registry::{DescriptorRegistry, DescriptorSource};
pub use types::{
    BehaviorDescriptor, BehaviorInstance, BehaviorKind, BehaviorScope, MethodId, Producer,
};
