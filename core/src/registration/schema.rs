use crate::descriptors::{BehaviorKind, MethodId};
use crate::errors::{error_codes, FiltriumError};
use serde::{Deserialize, Serialize};

/// Declared method on a handler type: name plus parameter type names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSignature {
    pub name: String,
    #[serde(default)]
    pub param_types: Vec<String>,
}

/// Selector naming a declared method at registration time.
///
/// A selector without parameter types matches by name alone, which is
/// ambiguous when the handler declares overloads; supplying the parameter
/// types disambiguates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSelector {
    pub name: String,
    #[serde(default)]
    pub param_types: Option<Vec<String>>,
}

impl MethodSelector {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            param_types: None,
        }
    }

    pub fn with_params(name: &str, param_types: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            param_types: Some(param_types.iter().map(|p| p.to_string()).collect()),
        }
    }
}

/// Registration-time description of a handler type: its declared methods and
/// the behavior kinds it supports hosting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandlerSchema {
    pub type_name: String,
    #[serde(default)]
    pub methods: Vec<MethodSignature>,
    #[serde(default = "all_kinds")]
    pub capabilities: Vec<BehaviorKind>,
}

fn all_kinds() -> Vec<BehaviorKind> {
    BehaviorKind::ALL.to_vec()
}

impl HandlerSchema {
    /// Schema supporting every behavior kind, with no methods declared yet.
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.to_string(),
            methods: Vec::new(),
            capabilities: all_kinds(),
        }
    }

    pub fn with_method(mut self, name: &str, param_types: &[&str]) -> Self {
        self.methods.push(MethodSignature {
            name: name.to_string(),
            param_types: param_types.iter().map(|p| p.to_string()).collect(),
        });
        self
    }

    pub fn with_capabilities(mut self, kinds: &[BehaviorKind]) -> Self {
        self.capabilities = kinds.to_vec();
        self
    }

    pub fn supports(&self, kind: BehaviorKind) -> bool {
        self.capabilities.contains(&kind)
    }

    /// Resolve a selector to exactly one declared method.
    ///
    /// Zero matches and multiple matches are both registration errors: a
    /// selector must denote exactly one declared method, and the resulting
    /// identity is produced here once, at registration time.
    pub fn resolve_selector(&self, selector: &MethodSelector) -> Result<MethodId, FiltriumError> {
        let candidates: Vec<&MethodSignature> = self
            .methods
            .iter()
            .filter(|m| m.name == selector.name)
            .filter(|m| match &selector.param_types {
                Some(params) => &m.param_types == params,
                None => true,
            })
            .collect();

        match candidates.as_slice() {
            [] => Err(FiltriumError::Registration {
                code: error_codes::METHOD_NOT_FOUND.to_string(),
                message: format!(
                    "selector '{}' matches no declared method on handler '{}'",
                    selector.name, self.type_name
                ),
            }),
            [method] => Ok(MethodId {
                handler_type: self.type_name.clone(),
                name: method.name.clone(),
                param_types: method.param_types.clone(),
            }),
            _ => Err(FiltriumError::Registration {
                code: error_codes::AMBIGUOUS_METHOD.to_string(),
                message: format!(
                    "selector '{}' matches {} overloads on handler '{}'; supply parameter types",
                    selector.name,
                    candidates.len(),
                    self.type_name
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn orders_schema() -> HandlerSchema {
        HandlerSchema::new("Orders")
            .with_method("list", &[])
            .with_method("update", &["u64"])
            .with_method("update", &["u64", "OrderPatch"])
    }

    #[test]
    fn test_selector_resolves_unique_method() {
        let id = orders_schema()
            .resolve_selector(&MethodSelector::named("list"))
            .unwrap();
        assert_eq!(id.handler_type, "Orders");
        assert_eq!(id.name, "list");
        assert!(id.param_types.is_empty());
    }

    #[test]
    fn test_selector_unknown_method_rejected() {
        let err = orders_schema()
            .resolve_selector(&MethodSelector::named("destroy"))
            .unwrap_err();
        assert!(matches!(err, FiltriumError::Registration { code, .. }
            if code == error_codes::METHOD_NOT_FOUND));
    }

    #[test]
    fn test_selector_overload_without_params_is_ambiguous() {
        let err = orders_schema()
            .resolve_selector(&MethodSelector::named("update"))
            .unwrap_err();
        assert!(matches!(err, FiltriumError::Registration { code, .. }
            if code == error_codes::AMBIGUOUS_METHOD));
    }

    #[test]
    fn test_selector_params_disambiguate_overloads() {
        let id = orders_schema()
            .resolve_selector(&MethodSelector::with_params("update", &["u64", "OrderPatch"]))
            .unwrap();
        assert_eq!(id.param_types, vec!["u64", "OrderPatch"]);
    }

    #[test]
    fn test_selector_params_must_match_exactly() {
        let err = orders_schema()
            .resolve_selector(&MethodSelector::with_params("update", &["String"]))
            .unwrap_err();
        assert!(matches!(err, FiltriumError::Registration { code, .. }
            if code == error_codes::METHOD_NOT_FOUND));
    }

    #[test]
    fn test_capabilities_default_to_all_kinds() {
        let schema = HandlerSchema::new("Orders");
        for kind in BehaviorKind::ALL {
            assert!(schema.supports(kind));
        }

        let narrowed = HandlerSchema::new("Orders")
            .with_capabilities(&[BehaviorKind::PreAction, BehaviorKind::PostAction]);
        assert!(narrowed.supports(BehaviorKind::PreAction));
        assert!(!narrowed.supports(BehaviorKind::Authorization));
    }

    #[test]
    fn test_schema_deserializes_from_json() {
        let schema: HandlerSchema = serde_json::from_str(
            r#"{
                "type_name": "Invoices",
                "methods": [
                    {"name": "issue", "param_types": ["InvoiceDraft"]},
                    {"name": "void"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(schema.type_name, "Invoices");
        assert_eq!(schema.methods.len(), 2);
        assert!(schema.methods[1].param_types.is_empty());
        // Capabilities omitted in JSON default to every kind.
        assert!(schema.supports(BehaviorKind::ModelBinder));
    }
}
