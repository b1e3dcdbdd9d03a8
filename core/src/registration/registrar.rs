use crate::container::{service_producer, ServiceContainer};
use crate::descriptors::{BehaviorDescriptor, BehaviorKind, DescriptorRegistry, DescriptorSource};
use crate::errors::{error_codes, FiltriumError};
use crate::registration::schema::{HandlerSchema, MethodSelector};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One declarative registration record, loadable from JSON configuration.
///
/// Non-override records name the container service that produces the behavior
/// instance; override records carry no service since overrides contribute no
/// instance of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorDeclaration {
    pub kind: BehaviorKind,
    pub handler: String,
    #[serde(default)]
    pub method: Option<MethodSelector>,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default, rename = "override")]
    pub is_override: bool,
}

/// Declarative registration surface feeding the descriptor registry.
///
/// Handler schemas are registered first; behavior declarations referring to
/// them are validated eagerly (capability check, selector resolution) so a
/// bad registration fails at startup, not at request time. Consuming the
/// registrar yields the frozen registry.
pub struct BehaviorRegistrar {
    container: Arc<dyn ServiceContainer>,
    schemas: HashMap<String, HandlerSchema>,
    registry: DescriptorRegistry,
}

impl BehaviorRegistrar {
    pub fn new(container: Arc<dyn ServiceContainer>) -> Self {
        Self {
            container,
            schemas: HashMap::new(),
            registry: DescriptorRegistry::new(),
        }
    }

    /// Register a handler schema behaviors may later be declared against.
    pub fn register_handler(&mut self, schema: HandlerSchema) -> Result<(), FiltriumError> {
        if self.schemas.contains_key(&schema.type_name) {
            return Err(FiltriumError::Registration {
                code: error_codes::DUPLICATE_HANDLER.to_string(),
                message: format!("handler '{}' already registered", schema.type_name),
            });
        }
        log::debug!(
            "registering handler schema '{}' ({} methods)",
            schema.type_name,
            schema.methods.len()
        );
        self.schemas.insert(schema.type_name.clone(), schema);
        Ok(())
    }

    /// Declare a behavior of `kind` for a handler, produced by a container
    /// service. Scope is handler-level, or method-level when a selector is
    /// given.
    pub fn declare(
        &mut self,
        kind: BehaviorKind,
        handler: &str,
        selector: Option<&MethodSelector>,
        order: i32,
        service: &str,
    ) -> Result<(), FiltriumError> {
        let schema = self.checked_schema(kind, handler)?;
        let producer = service_producer(self.container.clone(), service);
        let descriptor = match selector {
            Some(selector) => {
                let method = schema.resolve_selector(selector)?;
                BehaviorDescriptor::method_level(kind, method, order, producer)
            }
            None => BehaviorDescriptor::handler_level(kind, handler, order, producer),
        };
        self.registry.register(descriptor)
    }

    /// Declare an override of `kind` for a handler or one of its methods.
    ///
    /// The override suppresses the non-override descriptors of the same kind
    /// at its own scope and owner; it contributes no behavior instance.
    pub fn declare_override(
        &mut self,
        kind: BehaviorKind,
        handler: &str,
        selector: Option<&MethodSelector>,
    ) -> Result<(), FiltriumError> {
        let schema = self.checked_schema(kind, handler)?;
        let descriptor = match selector {
            Some(selector) => {
                let method = schema.resolve_selector(selector)?;
                BehaviorDescriptor::override_for_method(kind, method)
            }
            None => BehaviorDescriptor::override_for_handler(kind, handler),
        };
        self.registry.register(descriptor)
    }

    /// Replay declaration records (e.g. loaded from JSON) through
    /// `declare` / `declare_override`.
    pub fn apply_declarations(
        &mut self,
        declarations: &[BehaviorDeclaration],
    ) -> Result<(), FiltriumError> {
        for declaration in declarations {
            if declaration.is_override {
                if declaration.service.is_some() {
                    return Err(FiltriumError::Registration {
                        code: error_codes::OVERRIDE_WITH_SERVICE.to_string(),
                        message: format!(
                            "override declaration for handler '{}' must not name a service",
                            declaration.handler
                        ),
                    });
                }
                self.declare_override(
                    declaration.kind,
                    &declaration.handler,
                    declaration.method.as_ref(),
                )?;
            } else {
                let service =
                    declaration
                        .service
                        .as_deref()
                        .ok_or_else(|| FiltriumError::Registration {
                            code: error_codes::MISSING_SERVICE.to_string(),
                            message: format!(
                                "declaration for handler '{}' names no producing service",
                                declaration.handler
                            ),
                        })?;
                self.declare(
                    declaration.kind,
                    &declaration.handler,
                    declaration.method.as_ref(),
                    declaration.order,
                    service,
                )?;
            }
        }
        Ok(())
    }

    /// Merge a parallel descriptor source (e.g. an attribute-scan layer) into
    /// the registry. Source descriptors are treated uniformly with declared
    /// ones during resolution.
    pub fn merge_source(&mut self, source: &dyn DescriptorSource) -> Result<usize, FiltriumError> {
        self.registry.merge_source(source)
    }

    /// Finish the registration phase, yielding the frozen registry.
    pub fn into_registry(self) -> DescriptorRegistry {
        log::debug!(
            "registration phase complete: {} descriptors",
            self.registry.len()
        );
        self.registry
    }

    fn checked_schema(
        &self,
        kind: BehaviorKind,
        handler: &str,
    ) -> Result<&HandlerSchema, FiltriumError> {
        let schema = self
            .schemas
            .get(handler)
            .ok_or_else(|| FiltriumError::Registration {
                code: error_codes::UNKNOWN_HANDLER.to_string(),
                message: format!("handler '{}' has no registered schema", handler),
            })?;
        if !schema.supports(kind) {
            return Err(FiltriumError::Registration {
                code: error_codes::KIND_UNSUPPORTED.to_string(),
                message: format!(
                    "handler '{}' does not support {:?} behaviors",
                    handler, kind
                ),
            });
        }
        Ok(schema)
    }
}
