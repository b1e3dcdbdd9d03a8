use crate::descriptors::{
    BehaviorDescriptor, BehaviorInstance, BehaviorKind, DescriptorRegistry, MethodId,
};
use crate::errors::{error_codes, FiltriumError};
use std::sync::Arc;

/// Computes the ordered, de-duplicated set of behavior instances applicable
/// to a runtime target.
///
/// The engine is stateless and reentrant: it holds only the frozen registry
/// and performs no mutation, so any number of in-flight requests may resolve
/// concurrently. The only blocking happens inside producer invocations, which
/// delegate to the external container and should not be assumed cheap.
pub struct ResolutionEngine {
    registry: Arc<DescriptorRegistry>,
}

impl ResolutionEngine {
    pub fn new(registry: Arc<DescriptorRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &DescriptorRegistry {
        &self.registry
    }

    /// Resolve the applicable behavior instances of `kind` for a target.
    ///
    /// Matching descriptors are filtered through override suppression, sorted
    /// by `order` ascending with registration order breaking ties, and
    /// materialized through their producers, one invocation per descriptor
    /// per call. The first producer failure aborts the whole call: a partial
    /// behavior list must never reach the pipeline, since a silently skipped
    /// authentication or authorization behavior would fail open.
    ///
    /// An empty result is valid and means nothing applies.
    pub fn resolve(
        &self,
        kind: BehaviorKind,
        handler_type: &str,
        method: Option<&MethodId>,
    ) -> Result<Vec<BehaviorInstance>, FiltriumError> {
        let mut survivors: Vec<(usize, &BehaviorDescriptor)> = Vec::new();
        let mut overrides: Vec<&BehaviorDescriptor> = Vec::new();

        for (index, descriptor) in self.registry.all_of_kind(kind).enumerate() {
            if !descriptor.matches(handler_type, method) {
                continue;
            }
            if descriptor.is_override {
                overrides.push(descriptor);
            } else {
                survivors.push((index, descriptor));
            }
        }

        // Overrides fully replace: every matched non-override descriptor at
        // the override's own scope and owner is removed, not de-prioritized.
        // Suppression at different scopes is independent and additive; a
        // handler-level override leaves global descriptors standing.
        if !overrides.is_empty() {
            survivors.retain(|&(_, descriptor)| {
                !overrides.iter().any(|&o| suppresses(o, descriptor))
            });
        }

        survivors.sort_by_key(|(index, descriptor)| (descriptor.order, *index));

        log::trace!(
            "resolve {:?} for '{}' method={:?}: {} descriptors ({} overrides matched)",
            kind,
            handler_type,
            method.map(|m| m.to_string()),
            survivors.len(),
            overrides.len()
        );

        let mut instances = Vec::with_capacity(survivors.len());
        for (_, descriptor) in &survivors {
            let producer =
                descriptor
                    .producer
                    .as_ref()
                    .ok_or_else(|| FiltriumError::Resolution {
                        code: error_codes::PRODUCER_FAILED.to_string(),
                        message: format!("{:?} descriptor carries no producer", descriptor.kind),
                    })?;
            match producer() {
                Ok(instance) => instances.push(instance),
                Err(source) => {
                    return Err(FiltriumError::Resolution {
                        code: error_codes::PRODUCER_FAILED.to_string(),
                        message: format!(
                            "producer for {:?} behavior on '{}' failed: {}",
                            kind, handler_type, source
                        ),
                    });
                }
            }
        }
        Ok(instances)
    }
}

/// An override suppresses exactly the non-override descriptors sharing its
/// scope, owner handler and owner method.
fn suppresses(override_descriptor: &BehaviorDescriptor, descriptor: &BehaviorDescriptor) -> bool {
    override_descriptor.scope == descriptor.scope
        && override_descriptor.owner_handler == descriptor.owner_handler
        && override_descriptor.owner_method == descriptor.owner_method
}
