//! # CONTAINER BOUNDARY MODULE
//!
//! **INTERFACE TO THE EXTERNAL DEPENDENCY CONTAINER**
//!
//! This crate never constructs object graphs itself. The `ServiceContainer`
//! trait is the boundary through which descriptor producers materialize live
//! behavior instances; hosts supply the implementation.

pub mod producer;
pub mod types;

pub use producer::service_producer;
pub use types::{ActivationCallback, Lifetime, ServiceContainer, ServiceFactory};
