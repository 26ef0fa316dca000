//! Symbol-reference icons.
//!
//! Instead of building geometry inline, reference pre-defined symbol
//! templates from an external resource by role name. The resource location
//! is explicit per-factory configuration, so floors drawing from different
//! icon sets never interfere.

use crate::types::{Node, Role};

use super::{IconConfig, IconFactory};

const SYMBOL_NAMES: &[(Role, &str)] = &[
    (Role::Lead, "lead"),
    (Role::Trail, "trail"),
    (Role::Neutral, "neutral"),
];

/// Builds icons as `use` references into a symbol resource.
#[derive(Debug, Clone)]
pub struct SymbolIcons {
    resource: String,
}

impl SymbolIcons {
    /// `resource` is the document holding the symbol templates, e.g.
    /// `"dancers.svg"`; symbols are addressed as `resource#name`.
    pub fn new(resource: impl Into<String>) -> Self {
        SymbolIcons {
            resource: resource.into(),
        }
    }
}

impl IconFactory for SymbolIcons {
    fn icon(&self, role: Role, _cfg: &IconConfig) -> Node {
        let name = SYMBOL_NAMES
            .iter()
            .find(|(r, _)| *r == role)
            .map(|(_, n)| *n)
            .unwrap_or("neutral");
        Node::Use {
            href: format!("{}#{}", self.resource, name),
        }
    }
}
