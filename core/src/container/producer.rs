use crate::container::types::ServiceContainer;
use crate::descriptors::Producer;
use std::sync::Arc;

/// Build a descriptor producer over a container-registered service.
///
/// The returned producer resolves the service anew on every invocation; any
/// singleton or per-scope sharing is the container's concern, not the
/// producer's.
pub fn service_producer(container: Arc<dyn ServiceContainer>, identity: &str) -> Producer {
    let identity = identity.to_string();
    Arc::new(move || container.resolve_service(&identity))
}
