//! Classified view of one schema fragment.
//!
//! A fragment record is a loosely-typed JSON object: `@`-prefixed keys carry
//! attributes, `xs:`-prefixed keys carry child elements, and any child may be
//! a single object or a list. Classification (see the generator crate)
//! produces a [`ClassifiedFragment`] in which every single-or-list child has
//! already been coerced to a list, so the builder never checks shapes again.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// Reserved key holding the fragment's own name.
pub const NAME_KEY: &str = "@name";

/// Content-model branch of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchKind {
    Enumeration,
    ComplexContent,
    Sequence,
    Restriction,
    SimpleContent,
    Attributes,
}

impl fmt::Display for BranchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enumeration => write!(f, "enumeration"),
            Self::ComplexContent => write!(f, "complex_content"),
            Self::Sequence => write!(f, "sequence"),
            Self::Restriction => write!(f, "restriction"),
            Self::SimpleContent => write!(f, "simple_content"),
            Self::Attributes => write!(f, "attributes"),
        }
    }
}

/// Structural problem found while extracting a branch.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeError {
    /// A child that must be an object (or list of objects) is something else.
    #[error("`{key}` must be an object, found {found}")]
    NotAnObject { key: String, found: String },
    /// A required attribute is missing or empty.
    #[error("`{key}` is missing required `{attribute}`")]
    MissingAttribute { key: String, attribute: String },
}

/// One enumeration literal.
///
/// `value` is `None` when the entry has no `@value`; an empty string is a
/// legitimate literal.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumValue {
    pub value: Option<String>,
    pub annotation: Option<Value>,
}

/// Enumeration restriction.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    pub base: Option<String>,
    pub values: Vec<EnumValue>,
}

/// An element or attribute declaration inside a content model.
///
/// Every property is optional at this stage; the builder decides which
/// missing properties make a member unusable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Member {
    pub name: Option<String>,
    pub type_ref: Option<String>,
    pub min_occurs: Option<String>,
    pub max_occurs: Option<String>,
    pub use_: Option<String>,
    pub annotation: Option<Value>,
}

impl Member {
    /// `minOccurs="0"`; an absent `minOccurs` means required.
    pub fn is_optional_element(&self) -> bool {
        self.min_occurs.as_deref() == Some("0")
    }

    /// `maxOccurs="unbounded"`.
    pub fn is_unbounded(&self) -> bool {
        self.max_occurs.as_deref() == Some("unbounded")
    }

    /// `use="optional"`; attributes without `use` are required.
    pub fn is_optional_attribute(&self) -> bool {
        self.use_.as_deref() == Some("optional")
    }
}

/// Ordered member list of a sequence, choice or all group.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    pub members: Vec<Member>,
    /// The group carries an `xs:any` wildcard.
    pub open: bool,
}

/// Complex-content extension of a base type.
#[derive(Debug, Clone, PartialEq)]
pub struct ComplexExtension {
    pub base: String,
    pub sequence: Sequence,
}

/// Simple-content extension: one base value plus attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleExtension {
    pub base: String,
    pub attributes: Vec<Member>,
}

/// Restriction without enumeration values.
#[derive(Debug, Clone, PartialEq)]
pub struct Restriction {
    pub base: Option<String>,
}

/// Extracted content of one branch.
#[derive(Debug, Clone, PartialEq)]
pub enum BranchContent {
    Enumeration(Enumeration),
    ComplexContent(ComplexExtension),
    Sequence(Sequence),
    Restriction(Restriction),
    SimpleContent(SimpleExtension),
    Attributes(Vec<Member>),
}

/// A detected branch and its extracted content, or the shape problem that
/// prevented extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedBranch {
    pub kind: BranchKind,
    pub content: Result<BranchContent, ShapeError>,
}

/// A fragment with all applicable branches detected.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFragment {
    pub name: String,
    pub annotation: Option<Value>,
    pub branches: Vec<ClassifiedBranch>,
}

impl ClassifiedFragment {
    /// Returns `true` if the fragment is an enumeration restriction.
    pub fn is_enumeration(&self) -> bool {
        self.branches
            .iter()
            .any(|branch| branch.kind == BranchKind::Enumeration)
    }

    /// Returns the branch of the given kind, if detected.
    pub fn branch(&self, kind: BranchKind) -> Option<&ClassifiedBranch> {
        self.branches.iter().find(|branch| branch.kind == kind)
    }

    pub fn branch_kinds(&self) -> Vec<BranchKind> {
        self.branches.iter().map(|branch| branch.kind).collect()
    }
}

/// Coerces a single-or-list child into a list.
///
/// `null` becomes an empty list.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wsdl_typegen_core::coerce_to_list;
///
/// assert_eq!(coerce_to_list(&json!({ "@name": "a" })).len(), 1);
/// assert_eq!(coerce_to_list(&json!([{ "@name": "a" }, { "@name": "b" }])).len(), 2);
/// assert!(coerce_to_list(&json!(null)).is_empty());
/// ```
pub fn coerce_to_list(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Null => Vec::new(),
        other => vec![other],
    }
}

/// Reads an attribute as a string.
///
/// The upstream splitter may revive numeric and boolean attribute values
/// (`"@minOccurs": 0`), so scalars are stringified. Empty strings count as
/// absent.
pub fn attribute_string(object: &Map<String, Value>, key: &str) -> Option<String> {
    let text = match object.get(key)? {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => return None,
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Describes a JSON value's type for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
