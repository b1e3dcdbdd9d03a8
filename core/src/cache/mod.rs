//! # KEYED SINGLETON CACHE MODULE
//!
//! **PER-SCOPE MEMOIZATION WITH AT-MOST-ONE CONSTRUCTION**
//!
//! A `CacheScope` memoizes expensive-to-construct instances per caller-owned
//! scope (typically a session). Check, construct and store happen under one
//! per-scope lock, so concurrent callers observe a single construction per
//! key while unrelated scopes never contend.

pub mod scope;

pub use scope::CacheScope;
