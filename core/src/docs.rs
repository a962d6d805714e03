//! Documentation extraction from schema annotation nodes.
//!
//! An annotation's `xs:documentation` child is either a plain string or an
//! object holding a `#text` entry plus sibling string entries (mixed content
//! flattened by the upstream splitter). Both forms are flattened into one
//! whitespace-normalized line.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

/// Key of the documentation child inside an annotation node.
pub const DOCUMENTATION_KEY: &str = "xs:documentation";
/// Key holding the primary text of a mixed-content node.
pub const TEXT_KEY: &str = "#text";

static LINE_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\r?\n\s*").expect("static regex must compile"));

/// Extracts a single-line documentation string from an annotation node.
///
/// Returns `None` when the annotation, its documentation child, or the
/// flattened text is absent or empty. Whether documentation should be
/// emitted at all is decided by the caller.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wsdl_typegen_core::extract_documentation;
///
/// let plain = json!({ "xs:documentation": "Total amount\n      in cents." });
/// assert_eq!(extract_documentation(Some(&plain)).as_deref(), Some("Total amount in cents."));
///
/// let mixed = json!({ "xs:documentation": { "#text": "Primary", "b": "bold part" } });
/// assert_eq!(extract_documentation(Some(&mixed)).as_deref(), Some("Primary bold part"));
///
/// assert_eq!(extract_documentation(None), None);
/// ```
pub fn extract_documentation(annotation: Option<&Value>) -> Option<String> {
    let annotation = annotation?;
    let parts: Vec<String> = match annotation {
        Value::Array(items) => items.iter().filter_map(documentation_of).collect(),
        other => documentation_of(other).into_iter().collect(),
    };
    let joined = parts.join(" ");
    let flattened = flatten_documentation(&joined);
    if flattened.is_empty() {
        None
    } else {
        Some(flattened)
    }
}

/// Collapses line breaks and their surrounding indentation into single
/// spaces and trims the result.
pub fn flatten_documentation(text: &str) -> String {
    LINE_BREAK_RE.replace_all(text, " ").trim().to_string()
}

fn documentation_of(annotation: &Value) -> Option<String> {
    let doc = annotation.as_object()?.get(DOCUMENTATION_KEY)?;
    match doc {
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(node_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        other => node_text(other),
    }
}

fn node_text(doc: &Value) -> Option<String> {
    match doc {
        Value::String(text) => Some(text.clone()),
        Value::Object(map) => {
            let mut parts = Vec::new();
            if let Some(Value::String(text)) = map.get(TEXT_KEY) {
                parts.push(text.as_str());
            }
            for (key, value) in map {
                if key == TEXT_KEY {
                    continue;
                }
                if let Value::String(text) = value {
                    parts.push(text.as_str());
                }
            }
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(" "))
            }
        }
        _ => None,
    }
}
