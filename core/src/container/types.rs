use crate::descriptors::BehaviorInstance;
use crate::errors::FiltriumError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Instance lifetime a service is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifetime {
    /// A fresh instance per resolution call.
    PerCall,
    /// One instance per lifetime scope (e.g. per request or session).
    PerScope,
    /// One instance for the container's lifetime.
    Singleton,
    /// An instance owned and torn down outside the container.
    ExternallyOwned,
}

/// Factory a container invokes to construct a service instance.
pub type ServiceFactory = Arc<dyn Fn() -> Result<BehaviorInstance, FiltriumError> + Send + Sync>;

/// Post-construction wiring hook, invoked after an instance is activated.
pub type ActivationCallback = Arc<dyn Fn(&BehaviorInstance) + Send + Sync>;

/// Interface boundary to the external dependency container.
///
/// The container's activation machinery is a black box to this crate: it can
/// register a "produce instance for service X" rule, attach a post-activation
/// hook, and resolve a registered service. Resolution may block and may fail
/// (missing registration, circular dependency); failures propagate to the
/// caller unchanged.
pub trait ServiceContainer: Send + Sync {
    fn register_produces_instance(
        &self,
        identity: &str,
        factory: ServiceFactory,
        lifetime: Lifetime,
    ) -> Result<(), FiltriumError>;

    fn on_activated(
        &self,
        identity: &str,
        callback: ActivationCallback,
    ) -> Result<(), FiltriumError>;

    fn resolve_service(&self, identity: &str) -> Result<BehaviorInstance, FiltriumError>;
}
