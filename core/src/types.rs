//! Declaration model for generated type definitions.
//!
//! The builder never produces output text directly. It assembles a
//! [`Declaration`] made of a structured [`Field`] list (or an alias
//! expression), and the formatter in [`render`](crate::render) turns that
//! into TypeScript. Override rules operate on the same structure, so a field
//! is always addressed by its name rather than by searching rendered text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive type in the generated TypeScript output.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::Primitive;
///
/// assert_eq!(Primitive::Date.as_str(), "Date");
/// assert_eq!(Primitive::default(), Primitive::Unknown);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    /// `string`
    String,
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `Date`
    Date,
    /// `unknown`, used for primitives without a mapping (the default).
    #[default]
    Unknown,
}

impl Primitive {
    /// Returns the TypeScript spelling of the primitive.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Date => "Date",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved schema type reference.
///
/// References into the primitive namespace resolve to a [`Primitive`];
/// everything else names another generated declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeRef {
    Primitive(Primitive),
    Named(String),
}

impl TypeRef {
    /// Returns `true` if this reference resolved to the `unknown` sentinel.
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Primitive(Primitive::Unknown))
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(primitive) => primitive.fmt(f),
            Self::Named(name) => f.write_str(name),
        }
    }
}

/// Type expression of a field or of an alias declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    /// A mapped schema type reference.
    Reference(TypeRef),
    /// A union of string literals, in source order.
    LiteralUnion(Vec<String>),
    /// An expression copied verbatim from an override rule.
    Raw(String),
}

impl TypeExpr {
    /// Shorthand for a primitive reference.
    pub fn primitive(primitive: Primitive) -> Self {
        Self::Reference(TypeRef::Primitive(primitive))
    }

    /// Returns `true` when the expression would render as an empty string.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Reference(TypeRef::Named(name)) => name.trim().is_empty(),
            Self::Reference(TypeRef::Primitive(_)) => false,
            Self::LiteralUnion(values) => values.is_empty(),
            Self::Raw(raw) => raw.trim().is_empty(),
        }
    }
}

impl From<TypeRef> for TypeExpr {
    fn from(type_ref: TypeRef) -> Self {
        Self::Reference(type_ref)
    }
}

/// One member of a structured declaration.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::{Field, Primitive, TypeExpr};
///
/// let field = Field::new("tags", TypeExpr::primitive(Primitive::String))
///     .with_optional(true)
///     .with_array(true);
/// assert!(field.optional);
/// assert!(field.array);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field name as it appears in the schema.
    pub name: String,
    /// Element type (without the array suffix).
    pub type_expr: TypeExpr,
    /// Rendered with a `?` marker.
    pub optional: bool,
    /// Rendered as `T[]`.
    pub array: bool,
    /// Flattened single-line documentation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl Field {
    /// Creates a required, scalar field without documentation.
    pub fn new(name: impl Into<String>, type_expr: impl Into<TypeExpr>) -> Self {
        Self {
            name: name.into(),
            type_expr: type_expr.into(),
            optional: false,
            array: false,
            documentation: None,
        }
    }

    pub fn with_optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn with_array(mut self, array: bool) -> Self {
        self.array = array;
        self
    }

    pub fn with_documentation(mut self, documentation: Option<String>) -> Self {
        self.documentation = documentation;
        self
    }
}

/// Which output form a declaration prefers.
///
/// Fragments from the structured-type directory become interfaces; fragments
/// from the simple-type directory become type aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Interface,
    TypeAlias,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Interface => f.write_str("interface"),
            Self::TypeAlias => f.write_str("type"),
        }
    }
}

/// Field list of a structured declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Structure {
    /// Base type from a complex-content extension. Ignored by aliases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<TypeRef>,
    pub fields: Vec<Field>,
    /// Accepts arbitrary extra keys (`[key: string]: unknown`).
    #[serde(default)]
    pub open: bool,
    /// Base of a non-enumeration restriction on a structured type. Rendered
    /// as a placeholder comment only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub restriction: Option<TypeRef>,
}

impl Structure {
    /// Returns `true` if nothing would be rendered between the braces.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && !self.open
    }
}

/// Body of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationBody {
    Alias(TypeExpr),
    Structure(Structure),
}

/// One emitted output unit.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::*;
///
/// let mut decl = Declaration::structure("Foo", DeclarationKind::Interface);
/// decl.push_field(Field::new("bar", TypeExpr::primitive(Primitive::String)));
/// assert!(decl.find_field("bar").is_some());
/// assert!(!decl.is_alias());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub kind: DeclarationKind,
    /// Documentation block lines; empty means no block.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub documentation: Vec<String>,
    pub body: DeclarationBody,
}

impl Declaration {
    /// Creates an alias declaration.
    pub fn alias(name: impl Into<String>, kind: DeclarationKind, expr: TypeExpr) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: Vec::new(),
            body: DeclarationBody::Alias(expr),
        }
    }

    /// Creates an empty structured declaration.
    pub fn structure(name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            name: name.into(),
            kind,
            documentation: Vec::new(),
            body: DeclarationBody::Structure(Structure::default()),
        }
    }

    pub fn is_alias(&self) -> bool {
        matches!(self.body, DeclarationBody::Alias(_))
    }

    /// Returns the field list, empty for aliases.
    pub fn fields(&self) -> &[Field] {
        match &self.body {
            DeclarationBody::Structure(structure) => &structure.fields,
            DeclarationBody::Alias(_) => &[],
        }
    }

    /// Finds the first field with the given name.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields().iter().find(|field| field.name == name)
    }

    /// Appends a field, turning an alias body into an empty structure first.
    ///
    /// Returns the alias expression that was discarded, if any.
    pub fn push_field(&mut self, field: Field) -> Option<TypeExpr> {
        let discarded = self.ensure_structure();
        if let DeclarationBody::Structure(structure) = &mut self.body {
            structure.fields.push(field);
        }
        discarded
    }

    /// Converts an alias body into an empty structure.
    ///
    /// Returns the previous alias expression when a conversion happened.
    pub fn ensure_structure(&mut self) -> Option<TypeExpr> {
        if let DeclarationBody::Alias(_) = self.body {
            let previous = std::mem::replace(
                &mut self.body,
                DeclarationBody::Structure(Structure::default()),
            );
            if let DeclarationBody::Alias(expr) = previous {
                return Some(expr);
            }
        }
        None
    }

    pub fn structure_mut(&mut self) -> Option<&mut Structure> {
        match &mut self.body {
            DeclarationBody::Structure(structure) => Some(structure),
            DeclarationBody::Alias(_) => None,
        }
    }
}
