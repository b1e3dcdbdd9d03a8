use crate::errors::FiltriumError;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Cross-cutting role a behavior plays in the request pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    PreAction,
    PostAction,
    ExceptionHandler,
    Authentication,
    Authorization,
    ModelBinder,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 6] = [
        BehaviorKind::PreAction,
        BehaviorKind::PostAction,
        BehaviorKind::ExceptionHandler,
        BehaviorKind::Authentication,
        BehaviorKind::Authorization,
        BehaviorKind::ModelBinder,
    ];
}

/// Breadth of applicability of a registered behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorScope {
    Global,
    HandlerLevel,
    MethodLevel,
}

/// Structural method identity: declaring handler type plus signature.
///
/// Two values are equal iff they denote the same declared method on the same
/// handler type, so an identity re-derived later from an equivalent selector
/// still matches one produced at registration time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodId {
    pub handler_type: String,
    pub name: String,
    pub param_types: Vec<String>,
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}::{}({})",
            self.handler_type,
            self.name,
            self.param_types.join(", ")
        )
    }
}

/// Live behavior instance materialized through the external container.
///
/// Instances are shared and externally owned; this crate never disposes them.
pub type BehaviorInstance = Arc<dyn Any + Send + Sync>;

/// Opaque capability that yields a live behavior instance on demand.
pub type Producer = Arc<dyn Fn() -> Result<BehaviorInstance, FiltriumError> + Send + Sync>;

/// A registered cross-cutting behavior, tagged with kind, scope and owner.
///
/// Overrides carry no producer: they suppress matching non-override
/// descriptors instead of contributing an instance themselves.
#[derive(Clone)]
pub struct BehaviorDescriptor {
    pub kind: BehaviorKind,
    pub scope: BehaviorScope,
    pub owner_handler: Option<String>,
    pub owner_method: Option<MethodId>,
    pub order: i32,
    pub is_override: bool,
    pub producer: Option<Producer>,
}

impl BehaviorDescriptor {
    /// Descriptor applying to every target, regardless of handler or method.
    pub fn global(kind: BehaviorKind, order: i32, producer: Producer) -> Self {
        Self {
            kind,
            scope: BehaviorScope::Global,
            owner_handler: None,
            owner_method: None,
            order,
            is_override: false,
            producer: Some(producer),
        }
    }

    /// Descriptor applying to every method of one handler type.
    pub fn handler_level(
        kind: BehaviorKind,
        handler_type: &str,
        order: i32,
        producer: Producer,
    ) -> Self {
        Self {
            kind,
            scope: BehaviorScope::HandlerLevel,
            owner_handler: Some(handler_type.to_string()),
            owner_method: None,
            order,
            is_override: false,
            producer: Some(producer),
        }
    }

    /// Descriptor applying to one specific method of one handler type.
    pub fn method_level(kind: BehaviorKind, method: MethodId, order: i32, producer: Producer) -> Self {
        Self {
            kind,
            scope: BehaviorScope::MethodLevel,
            owner_handler: Some(method.handler_type.clone()),
            owner_method: Some(method),
            order,
            is_override: false,
            producer: Some(producer),
        }
    }

    /// Override suppressing a handler's HandlerLevel descriptors of `kind`.
    pub fn override_for_handler(kind: BehaviorKind, handler_type: &str) -> Self {
        Self {
            kind,
            scope: BehaviorScope::HandlerLevel,
            owner_handler: Some(handler_type.to_string()),
            owner_method: None,
            order: 0,
            is_override: true,
            producer: None,
        }
    }

    /// Override suppressing one method's MethodLevel descriptors of `kind`.
    pub fn override_for_method(kind: BehaviorKind, method: MethodId) -> Self {
        Self {
            kind,
            scope: BehaviorScope::MethodLevel,
            owner_handler: Some(method.handler_type.clone()),
            owner_method: Some(method),
            order: 0,
            is_override: true,
            producer: None,
        }
    }

    /// Whether this descriptor applies to the given runtime target.
    pub fn matches(&self, handler_type: &str, method: Option<&MethodId>) -> bool {
        match self.scope {
            BehaviorScope::Global => true,
            BehaviorScope::HandlerLevel => self.owner_handler.as_deref() == Some(handler_type),
            BehaviorScope::MethodLevel => {
                self.owner_handler.as_deref() == Some(handler_type)
                    && method.is_some()
                    && self.owner_method.as_ref() == method
            }
        }
    }
}

impl fmt::Debug for BehaviorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorDescriptor")
            .field("kind", &self.kind)
            .field("scope", &self.scope)
            .field("owner_handler", &self.owner_handler)
            .field("owner_method", &self.owner_method)
            .field("order", &self.order)
            .field("is_override", &self.is_override)
            .field("has_producer", &self.producer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop_producer() -> Producer {
        Arc::new(|| Ok(Arc::new(()) as BehaviorInstance))
    }

    fn method(handler: &str, name: &str) -> MethodId {
        MethodId {
            handler_type: handler.to_string(),
            name: name.to_string(),
            param_types: vec![],
        }
    }

    #[test]
    fn test_global_matches_any_target() {
        let d = BehaviorDescriptor::global(BehaviorKind::PreAction, 0, noop_producer());
        assert!(d.matches("Orders", None));
        assert!(d.matches("Users", Some(&method("Users", "show"))));
    }

    #[test]
    fn test_handler_level_matches_owner_only() {
        let d = BehaviorDescriptor::handler_level(
            BehaviorKind::Authorization,
            "Orders",
            0,
            noop_producer(),
        );
        assert!(d.matches("Orders", None));
        assert!(d.matches("Orders", Some(&method("Orders", "list"))));
        assert!(!d.matches("Users", None));
    }

    #[test]
    fn test_method_level_requires_exact_method_identity() {
        let d = BehaviorDescriptor::method_level(
            BehaviorKind::PreAction,
            method("Orders", "list"),
            0,
            noop_producer(),
        );
        assert!(d.matches("Orders", Some(&method("Orders", "list"))));
        assert!(!d.matches("Orders", Some(&method("Orders", "show"))));
        assert!(!d.matches("Orders", None));
        assert!(!d.matches("Users", Some(&method("Users", "list"))));
    }

    #[test]
    fn test_method_identity_is_structural() {
        let a = MethodId {
            handler_type: "Orders".to_string(),
            name: "update".to_string(),
            param_types: vec!["u64".to_string(), "OrderPatch".to_string()],
        };
        let b = MethodId {
            handler_type: "Orders".to_string(),
            name: "update".to_string(),
            param_types: vec!["u64".to_string(), "OrderPatch".to_string()],
        };
        let overload = MethodId {
            handler_type: "Orders".to_string(),
            name: "update".to_string(),
            param_types: vec!["u64".to_string()],
        };
        assert_eq!(a, b);
        assert_ne!(a, overload);
    }

    #[test]
    fn test_override_constructors_carry_no_producer() {
        let h = BehaviorDescriptor::override_for_handler(BehaviorKind::PreAction, "Orders");
        let m = BehaviorDescriptor::override_for_method(
            BehaviorKind::PreAction,
            method("Orders", "list"),
        );
        assert!(h.is_override && h.producer.is_none());
        assert!(m.is_override && m.producer.is_none());
        assert_eq!(m.owner_handler.as_deref(), Some("Orders"));
    }

    #[test]
    fn test_method_id_display() {
        let m = MethodId {
            handler_type: "Orders".to_string(),
            name: "update".to_string(),
            param_types: vec!["u64".to_string(), "OrderPatch".to_string()],
        };
        assert_eq!(m.to_string(), "Orders::update(u64, OrderPatch)");
    }
}
