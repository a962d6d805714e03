//! TypeScript formatter for declarations.
//!
//! Output shapes:
//!
//! ```text
//! /**
//!  * Documentation.
//!  */
//! export interface Name extends Base {
//!   /** Field documentation. */
//!   field?: string;
//!   list: Item[];
//!   [key: string]: unknown;
//! }
//!
//! export type Code = "A" | "B";
//! ```

use crate::{Declaration, DeclarationBody, DeclarationKind, Field, Structure, TypeExpr};

const INDENT: &str = "  ";

/// Formatter settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit doc blocks and placeholder comments.
    pub include_documentation: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_documentation: true,
        }
    }
}

/// Renders declarations in iteration order, separated by blank lines.
///
/// The result ends with a single newline unless it is empty.
pub fn render_declarations<'a>(
    declarations: impl IntoIterator<Item = &'a Declaration>,
    options: &RenderOptions,
) -> String {
    declarations
        .into_iter()
        .map(|declaration| render_declaration(declaration, options))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders one declaration, terminated by a newline.
///
/// # Examples
///
/// ```
/// use wsdl_typegen_core::*;
///
/// let mut decl = Declaration::structure("Foo", DeclarationKind::Interface);
/// decl.push_field(
///     Field::new("bar", TypeExpr::primitive(Primitive::String)).with_optional(true),
/// );
/// assert_eq!(
///     render_declaration(&decl, &RenderOptions::default()),
///     "export interface Foo {\n  bar?: string;\n}\n"
/// );
/// ```
pub fn render_declaration(declaration: &Declaration, options: &RenderOptions) -> String {
    let mut out = String::new();

    if options.include_documentation && !declaration.documentation.is_empty() {
        out.push_str("/**\n");
        for line in &declaration.documentation {
            out.push_str(&format!(" * {}\n", sanitize_comment(line)));
        }
        out.push_str(" */\n");
    }

    let name = &declaration.name;
    match &declaration.body {
        DeclarationBody::Alias(expr) => {
            out.push_str(&format!("export type {name} = {};\n", render_type(expr, false)));
        }
        DeclarationBody::Structure(structure) => match declaration.kind {
            DeclarationKind::Interface => {
                let extends = structure
                    .extends
                    .as_ref()
                    .map(|base| format!(" extends {base}"))
                    .unwrap_or_default();
                if structure.is_empty() && !has_placeholder(structure, options) {
                    out.push_str(&format!("export interface {name}{extends} {{}}\n"));
                } else {
                    out.push_str(&format!("export interface {name}{extends} {{\n"));
                    render_members(&mut out, structure, options);
                    out.push_str("}\n");
                }
            }
            DeclarationKind::TypeAlias => {
                if structure.is_empty() {
                    out.push_str(&format!("export type {name} = {{}};\n"));
                } else {
                    out.push_str(&format!("export type {name} = {{\n"));
                    render_members(&mut out, structure, options);
                    out.push_str("};\n");
                }
            }
        },
    }

    out
}

/// Renders a type expression, with an array suffix when requested.
pub fn render_type(expr: &TypeExpr, array: bool) -> String {
    let rendered = match expr {
        TypeExpr::Reference(type_ref) => type_ref.to_string(),
        TypeExpr::LiteralUnion(values) => values
            .iter()
            .map(|value| quote_literal(value))
            .collect::<Vec<_>>()
            .join(" | "),
        TypeExpr::Raw(raw) => raw.trim().to_string(),
    };
    if !array {
        return rendered;
    }
    match expr {
        TypeExpr::Reference(_) => format!("{rendered}[]"),
        _ => format!("({rendered})[]"),
    }
}

/// Quotes a string literal for use in a union.
///
/// JSON string escaping is also valid TypeScript, control characters included.
pub fn quote_literal(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

fn has_placeholder(structure: &Structure, options: &RenderOptions) -> bool {
    options.include_documentation && structure.restriction.is_some()
}

fn render_members(out: &mut String, structure: &Structure, options: &RenderOptions) {
    for field in &structure.fields {
        render_field(out, field, options);
    }
    if options.include_documentation {
        if let Some(base) = structure.restriction.as_ref() {
            out.push_str(&format!("{INDENT}// restriction of {base}\n"));
        }
    }
    if structure.open {
        out.push_str(&format!("{INDENT}[key: string]: unknown;\n"));
    }
}

fn render_field(out: &mut String, field: &Field, options: &RenderOptions) {
    if let Some(doc) = field.documentation.as_deref().filter(|_| options.include_documentation) {
        out.push_str(&format!("{INDENT}/** {} */\n", sanitize_comment(doc)));
    }
    let marker = if field.optional { "?" } else { "" };
    out.push_str(&format!(
        "{INDENT}{}{marker}: {};\n",
        property_name(&field.name),
        render_type(&field.type_expr, field.array)
    ));
}

/// Quotes property names that are not plain identifiers.
fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let is_identifier = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if is_identifier {
        name.to_string()
    } else {
        quote_literal(name)
    }
}

fn sanitize_comment(text: &str) -> String {
    text.replace("*/", "*\\/")
}
