//! Declaration validation.
//!
//! Catches structural problems in a built declaration that would produce
//! invalid or ambiguous output, such as two fields with the same name.
//!
//! # Examples
//!
//! ```
//! use wsdl_typegen_core::*;
//!
//! let mut decl = Declaration::structure("Foo", DeclarationKind::Interface);
//! decl.push_field(Field::new("id", TypeExpr::primitive(Primitive::String)));
//! assert!(validate_declaration(&decl).is_empty());
//!
//! decl.push_field(Field::new("id", TypeExpr::primitive(Primitive::Number)));
//! assert_eq!(
//!     validate_declaration(&decl),
//!     vec![DeclarationIssue::DuplicateField("id".into())]
//! );
//! ```

use std::collections::HashSet;

use thiserror::Error;

use crate::{Declaration, DeclarationBody};

/// Problems found in a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeclarationIssue {
    /// Declaration name is empty or whitespace-only.
    #[error("declaration name cannot be empty")]
    EmptyName,
    /// A field has an empty name.
    #[error("field name cannot be empty")]
    EmptyFieldName,
    /// Two fields share the same name.
    #[error("duplicate field: {0}")]
    DuplicateField(String),
    /// A field or alias has an empty type expression.
    #[error("empty type expression for {0}")]
    EmptyTypeExpression(String),
}

/// Validates one declaration.
pub fn validate_declaration(declaration: &Declaration) -> Vec<DeclarationIssue> {
    let mut issues = Vec::new();

    if declaration.name.trim().is_empty() {
        issues.push(DeclarationIssue::EmptyName);
    }

    match &declaration.body {
        DeclarationBody::Alias(expr) => {
            if expr.is_empty() {
                issues.push(DeclarationIssue::EmptyTypeExpression(
                    declaration.name.clone(),
                ));
            }
        }
        DeclarationBody::Structure(structure) => {
            let mut seen = HashSet::new();
            for field in &structure.fields {
                if field.name.trim().is_empty() {
                    issues.push(DeclarationIssue::EmptyFieldName);
                    continue;
                }
                if !seen.insert(field.name.as_str()) {
                    issues.push(DeclarationIssue::DuplicateField(field.name.clone()));
                }
                if field.type_expr.is_empty() {
                    issues.push(DeclarationIssue::EmptyTypeExpression(field.name.clone()));
                }
            }
        }
    }

    issues
}
