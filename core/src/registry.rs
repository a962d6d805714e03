//! Insertion-ordered registry of generated declarations.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::Declaration;
use crate::render::{RenderOptions, render_declarations};

/// Ordered mapping from type name to declaration.
///
/// Registration order is emission order. Registering a name again replaces
/// the stored declaration but keeps its original position.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::*;
///
/// let mut registry = TypeRegistry::new();
/// registry.insert(Declaration::alias("B", DeclarationKind::TypeAlias, TypeExpr::Raw("string".into())));
/// registry.insert(Declaration::alias("A", DeclarationKind::TypeAlias, TypeExpr::Raw("number".into())));
/// assert_eq!(registry.names(), vec!["B", "A"]);
///
/// let previous = registry.insert(Declaration::alias(
///     "B",
///     DeclarationKind::TypeAlias,
///     TypeExpr::Raw("boolean".into()),
/// ));
/// assert!(previous.is_some());
/// assert_eq!(registry.names(), vec!["B", "A"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    declarations: IndexMap<String, Declaration>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration, returning the one it replaced.
    pub fn insert(&mut self, declaration: Declaration) -> Option<Declaration> {
        match self.declarations.entry(declaration.name.clone()) {
            Entry::Occupied(mut slot) => Some(slot.insert(declaration)),
            Entry::Vacant(slot) => {
                slot.insert(declaration);
                None
            }
        }
    }

    /// Registers a declaration only if its name is still free.
    ///
    /// Returns `true` if the declaration was registered.
    pub fn insert_if_absent(&mut self, declaration: Declaration) -> bool {
        match self.declarations.entry(declaration.name.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(declaration);
                true
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Declaration> {
        self.declarations.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.declarations.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Iterates declarations in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.values()
    }

    /// Returns declaration names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.declarations.keys().map(String::as_str).collect()
    }

    /// Serializes every declaration in registration order.
    pub fn render(&self, options: &RenderOptions) -> String {
        render_declarations(self.iter(), options)
    }
}
