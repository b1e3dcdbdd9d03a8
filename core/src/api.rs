pub use crate::cache::CacheScope;
pub use crate::container::{
    service_producer, ActivationCallback, Lifetime, ServiceContainer, ServiceFactory,
};
pub use crate::descriptors::{
    BehaviorDescriptor, BehaviorInstance, BehaviorKind, BehaviorScope, DescriptorRegistry,
    DescriptorSource, MethodId, Producer,
};
pub use crate::errors::{error_codes, FiltriumError};
pub use crate::registration::{
    BehaviorDeclaration, BehaviorRegistrar, HandlerSchema, MethodSelector, MethodSignature,
};
pub use crate::resolution::ResolutionEngine;
