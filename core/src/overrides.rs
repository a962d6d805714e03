//! User-supplied override rules and their merge into declarations.
//!
//! An override file maps type names to either a literal type expression or
//! a set of field rules:
//!
//! ```json
//! {
//!   "Timestamp": "string",
//!   "Item": { "fields": { "price": { "type": "number", "optional": false } } }
//! }
//! ```
//!
//! Literal rules only ever create a declaration that the schema did not
//! produce. Field rules are merged into a schema-derived declaration by
//! field name with [`apply_field_overrides`], or create a new interface when
//! no declaration exists.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use wsdl_typegen_core::*;
//!
//! let mut decl = Declaration::structure("Foo", DeclarationKind::Interface);
//! decl.push_field(
//!     Field::new("bar", TypeExpr::primitive(Primitive::String)).with_optional(true),
//! );
//!
//! let mut fields = IndexMap::new();
//! fields.insert("bar".to_string(), FieldOverride::new("number").with_optional(false));
//! let applied = apply_field_overrides(&mut decl, &fields);
//!
//! assert_eq!(applied.replaced, vec!["bar".to_string()]);
//! let bar = decl.find_field("bar").unwrap();
//! assert!(!bar.optional);
//! assert_eq!(bar.type_expr, TypeExpr::Raw("number".into()));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{Declaration, DeclarationKind, Field, TypeExpr};

/// Override for a single type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OverrideRule {
    /// Replacement type expression, used only when the schema produced no
    /// declaration for the name.
    Literal(String),
    /// Field-level rules.
    Fields(FieldRules),
}

impl OverrideRule {
    /// Returns the field rules, if this is a field-level override.
    pub fn field_rules(&self) -> Option<&IndexMap<String, FieldOverride>> {
        match self {
            Self::Fields(rules) => rules.fields.as_ref(),
            Self::Literal(_) => None,
        }
    }
}

/// Field-level rule set of an [`OverrideRule`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldRules {
    /// Accepted for compatibility with existing override files; unused.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, FieldOverride>>,
}

/// Replacement for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOverride {
    /// TypeScript type expression, copied verbatim.
    #[serde(rename = "type")]
    pub type_expr: String,
    /// Explicit optionality; unset means optional.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optional: Option<bool>,
}

impl FieldOverride {
    pub fn new(type_expr: &str) -> Self {
        Self {
            type_expr: type_expr.to_string(),
            optional: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = Some(optional);
        self
    }

    /// Only an explicit `false` makes the field required.
    pub fn is_optional(&self) -> bool {
        self.optional != Some(false)
    }

    fn to_field(&self, name: &str) -> Field {
        Field::new(name, TypeExpr::Raw(self.type_expr.clone())).with_optional(self.is_optional())
    }
}

/// What [`apply_field_overrides`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideApplication {
    /// Fields updated in place.
    pub replaced: Vec<String>,
    /// Fields appended at the end of the field list.
    pub appended: Vec<String>,
    /// Later duplicate entries removed so that one entry per field remains.
    pub removed_duplicates: usize,
    /// Alias expression dropped because fields had to be added to an alias.
    pub discarded_alias: Option<TypeExpr>,
}

/// Merges field rules into a declaration by field name.
///
/// An existing field keeps its position and documentation and takes the
/// override's type and optionality. A missing field is appended. Either way
/// exactly one entry with that name remains.
pub fn apply_field_overrides(
    declaration: &mut Declaration,
    fields: &IndexMap<String, FieldOverride>,
) -> OverrideApplication {
    let mut applied = OverrideApplication::default();

    for (name, rule) in fields {
        let replaced = declaration.structure_mut().is_some_and(|structure| {
            let Some(index) = structure.fields.iter().position(|f| &f.name == name) else {
                return false;
            };
            let field = &mut structure.fields[index];
            field.type_expr = TypeExpr::Raw(rule.type_expr.clone());
            field.optional = rule.is_optional();
            field.array = false;

            let before = structure.fields.len();
            let mut position = 0;
            structure.fields.retain(|f| {
                let keep = position <= index || &f.name != name;
                position += 1;
                keep
            });
            applied.removed_duplicates += before - structure.fields.len();
            true
        });

        if replaced {
            applied.replaced.push(name.clone());
        } else {
            if let Some(expr) = declaration.push_field(rule.to_field(name)) {
                applied.discarded_alias = Some(expr);
            }
            applied.appended.push(name.clone());
        }
    }

    applied
}

/// Builds a declaration purely from an override rule.
///
/// Literal rules become type aliases; field rules become interfaces. A field
/// rule without a `fields` map produces nothing.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::*;
///
/// let decl = synthesize_declaration("Bar", &OverrideRule::Literal("string".into())).unwrap();
/// assert!(decl.is_alias());
/// assert_eq!(decl.kind, DeclarationKind::TypeAlias);
/// ```
pub fn synthesize_declaration(name: &str, rule: &OverrideRule) -> Option<Declaration> {
    match rule {
        OverrideRule::Literal(expr) => Some(Declaration::alias(
            name,
            DeclarationKind::TypeAlias,
            TypeExpr::Raw(expr.clone()),
        )),
        OverrideRule::Fields(rules) => {
            let fields = rules.fields.as_ref()?;
            let mut declaration = Declaration::structure(name, DeclarationKind::Interface);
            for (field_name, rule) in fields {
                declaration.push_field(rule.to_field(field_name));
            }
            Some(declaration)
        }
    }
}
