//! # DECLARATIVE REGISTRATION MODULE
//!
//! **STARTUP-TIME DATA ENTRY INTO THE DESCRIPTOR REGISTRY**
//!
//! Handler schemas describe the methods a handler declares and the behavior
//! kinds it supports; the registrar validates every declaration against them
//! eagerly so misconfigurations fail at startup rather than at request time.
//! Declaration records are plain serde data and may be loaded from JSON.

pub mod registrar;
pub mod schema;

pub use registrar::{BehaviorDeclaration, BehaviorRegistrar};
pub use schema::{HandlerSchema, MethodSelector, MethodSignature};
