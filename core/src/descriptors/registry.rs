use crate::descriptors::types::{BehaviorDescriptor, BehaviorKind, BehaviorScope};
use crate::errors::{error_codes, FiltriumError};

/// A parallel provider of descriptors (e.g. an attribute-scan layer).
///
/// The host explicitly composes the sources feeding a registry; there is no
/// ambient global provider list. Source-supplied descriptors pass the same
/// invariant checks as directly registered ones and are treated uniformly
/// during resolution.
pub trait DescriptorSource {
    fn descriptors(&self) -> Vec<BehaviorDescriptor>;
}

/// Append-only collection of behavior descriptors.
///
/// Populated during the startup registration phase and immutable afterwards:
/// registration goes through `&mut self`, after which the host freezes the
/// registry behind an `Arc` for concurrent readers. No descriptor is ever
/// removed or mutated.
#[derive(Debug, Default)]
pub struct DescriptorRegistry {
    descriptors: Vec<BehaviorDescriptor>,
}

impl DescriptorRegistry {
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Append a descriptor after checking its structural invariants.
    ///
    /// Invariants: `owner_method` present iff scope is MethodLevel and
    /// consistent with `owner_handler`; `owner_handler` absent only for
    /// Global descriptors; a producer present iff the descriptor is not an
    /// override.
    pub fn register(&mut self, descriptor: BehaviorDescriptor) -> Result<(), FiltriumError> {
        Self::check_invariants(&descriptor)?;
        log::debug!(
            "registering {:?} descriptor: scope={:?} owner={:?} order={} override={}",
            descriptor.kind,
            descriptor.scope,
            descriptor.owner_handler,
            descriptor.order,
            descriptor.is_override
        );
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Drain a descriptor source into this registry.
    ///
    /// Returns the number of descriptors merged. Fails on the first invalid
    /// descriptor, leaving previously merged ones in place (registration
    /// errors are startup-fatal by host convention, so partial merges are
    /// never resolved against).
    pub fn merge_source(&mut self, source: &dyn DescriptorSource) -> Result<usize, FiltriumError> {
        let descriptors = source.descriptors();
        let count = descriptors.len();
        for descriptor in descriptors {
            self.register(descriptor)?;
        }
        Ok(count)
    }

    /// All descriptors of `kind`, lazily, in registration order.
    ///
    /// The iterator is finite and restartable: the registry never mutates
    /// after startup, so repeated iteration always yields the same sequence.
    pub fn all_of_kind(
        &self,
        kind: BehaviorKind,
    ) -> impl Iterator<Item = &BehaviorDescriptor> + '_ {
        self.descriptors.iter().filter(move |d| d.kind == kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BehaviorDescriptor> + '_ {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    fn check_invariants(descriptor: &BehaviorDescriptor) -> Result<(), FiltriumError> {
        let invalid = |message: String| FiltriumError::Registration {
            code: error_codes::INVALID_DESCRIPTOR.to_string(),
            message,
        };

        match descriptor.scope {
            BehaviorScope::Global => {
                if descriptor.owner_handler.is_some() || descriptor.owner_method.is_some() {
                    return Err(invalid(format!(
                        "global {:?} descriptor must not name an owner",
                        descriptor.kind
                    )));
                }
            }
            BehaviorScope::HandlerLevel => {
                if descriptor.owner_handler.is_none() {
                    return Err(invalid(format!(
                        "handler-level {:?} descriptor must name an owner handler",
                        descriptor.kind
                    )));
                }
                if descriptor.owner_method.is_some() {
                    return Err(invalid(format!(
                        "handler-level {:?} descriptor must not name a method",
                        descriptor.kind
                    )));
                }
            }
            BehaviorScope::MethodLevel => {
                let method = descriptor.owner_method.as_ref().ok_or_else(|| {
                    invalid(format!(
                        "method-level {:?} descriptor must name an owner method",
                        descriptor.kind
                    ))
                })?;
                if descriptor.owner_handler.as_deref() != Some(method.handler_type.as_str()) {
                    return Err(invalid(format!(
                        "method-level descriptor owner '{}' does not match method '{}'",
                        descriptor.owner_handler.as_deref().unwrap_or("<none>"),
                        method
                    )));
                }
            }
        }

        if descriptor.is_override && descriptor.producer.is_some() {
            return Err(invalid(
                "override descriptor must not carry a producer".to_string(),
            ));
        }
        if !descriptor.is_override && descriptor.producer.is_none() {
            return Err(invalid(format!(
                "{:?} descriptor must carry a producer",
                descriptor.kind
            )));
        }
        Ok(())
    }
}
