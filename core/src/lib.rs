//! Core model for generating TypeScript declarations from WSDL schema types.
//!
//! This crate holds everything about schema type generation that does not
//! touch the file system:
//!
//! - [`map_type_reference`]: maps `xs:` primitives to TypeScript types and
//!   strips namespace prefixes from named references.
//! - [`extract_documentation`]: flattens annotation nodes into one line.
//! - [`ClassifiedFragment`]: a fragment record with its content-model
//!   branches detected and single-or-list children coerced to lists.
//! - [`Declaration`]: the structured output unit (alias or field list).
//! - [`OverrideRule`] and [`apply_field_overrides`]: user override rules and
//!   their by-name merge into declarations.
//! - [`TypeRegistry`]: insertion-ordered declarations, rendered with
//!   [`render_declaration`].
//!
//! # Example
//!
//! ```
//! use wsdl_typegen_core::*;
//!
//! let mut registry = TypeRegistry::new();
//! let mut foo = Declaration::structure("Foo", DeclarationKind::Interface);
//! foo.push_field(
//!     Field::new("bar", map_type_reference("xs:string")).with_optional(true),
//! );
//! registry.insert(foo);
//! registry.insert(Declaration::alias(
//!     "Status",
//!     DeclarationKind::TypeAlias,
//!     TypeExpr::LiteralUnion(vec!["A".into(), "B".into()]),
//! ));
//!
//! assert_eq!(
//!     registry.render(&RenderOptions::default()),
//!     "export interface Foo {\n  bar?: string;\n}\n\nexport type Status = \"A\" | \"B\";\n"
//! );
//! ```

mod docs;
mod fragment;
mod overrides;
mod registry;
pub mod render;
mod type_map;
mod types;
mod validate;

pub use docs::{DOCUMENTATION_KEY, TEXT_KEY, extract_documentation, flatten_documentation};
pub use fragment::*;
pub use overrides::{
    FieldOverride, FieldRules, OverrideApplication, OverrideRule, apply_field_overrides,
    synthesize_declaration,
};
pub use registry::TypeRegistry;
pub use render::{RenderOptions, render_declaration, render_declarations};
pub use type_map::{PRIMITIVE_NAMESPACES, map_primitive, map_type_reference};
pub use types::*;
pub use validate::{DeclarationIssue, validate_declaration};
