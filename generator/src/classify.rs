//! Content-model classification of fragment records.
//!
//! Detects which branches apply to a fragment and extracts their content.
//! Several branches may apply at once; an enumeration restriction is the
//! only exclusive one. Shape problems are attached to the branch they occur
//! in so that the builder can degrade that branch alone.

use serde_json::{Map, Value};
use tracing::warn;
use wsdl_typegen_core::{
    BranchContent, BranchKind, ClassifiedBranch, ClassifiedFragment, ComplexExtension,
    EnumValue, Enumeration, Member, NAME_KEY, Restriction, Sequence, ShapeError,
    SimpleExtension, attribute_string, coerce_to_list, json_type_name,
};

pub const ANNOTATION: &str = "xs:annotation";
pub const RESTRICTION: &str = "xs:restriction";
pub const ENUMERATION: &str = "xs:enumeration";
pub const COMPLEX_CONTENT: &str = "xs:complexContent";
pub const SIMPLE_CONTENT: &str = "xs:simpleContent";
pub const EXTENSION: &str = "xs:extension";
pub const SEQUENCE: &str = "xs:sequence";
pub const CHOICE: &str = "xs:choice";
pub const ALL: &str = "xs:all";
pub const ELEMENT: &str = "xs:element";
pub const ANY: &str = "xs:any";
pub const ATTRIBUTE: &str = "xs:attribute";

const BASE: &str = "@base";
const VALUE: &str = "@value";

const GROUP_KEYS: [&str; 3] = [SEQUENCE, CHOICE, ALL];

/// Classifies one fragment record.
///
/// `fallback_name` (normally the file stem) is used when the record has no
/// `@name`. Fails only if the record is not a JSON object.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wsdl_typegen::classify::classify_fragment;
/// use wsdl_typegen_core::BranchKind;
///
/// let record = json!({
///     "@name": "Item",
///     "xs:sequence": { "xs:element": { "@name": "id", "@type": "xs:string" } },
///     "xs:attribute": { "@name": "version", "@type": "xs:int" }
/// });
/// let fragment = classify_fragment(&record, "Item").unwrap();
/// assert_eq!(
///     fragment.branch_kinds(),
///     vec![BranchKind::Sequence, BranchKind::Attributes]
/// );
/// ```
pub fn classify_fragment(
    record: &Value,
    fallback_name: &str,
) -> Result<ClassifiedFragment, ShapeError> {
    let object = as_object(record, "fragment")?;

    let name = match attribute_string(object, NAME_KEY) {
        Some(name) => name,
        None => {
            warn!(fallback = fallback_name, "Fragment has no @name, using file name");
            fallback_name.to_string()
        }
    };
    let annotation = object.get(ANNOTATION).cloned();

    if let Some(content) = detect_enumeration(object) {
        return Ok(ClassifiedFragment {
            name,
            annotation,
            branches: vec![ClassifiedBranch {
                kind: BranchKind::Enumeration,
                content: content.map(BranchContent::Enumeration),
            }],
        });
    }

    let mut branches = Vec::new();

    if let Some(complex) = object.get(COMPLEX_CONTENT) {
        branches.push(ClassifiedBranch {
            kind: BranchKind::ComplexContent,
            content: complex_extension(complex).map(BranchContent::ComplexContent),
        });
    }

    if GROUP_KEYS.iter().any(|key| object.contains_key(*key)) {
        branches.push(ClassifiedBranch {
            kind: BranchKind::Sequence,
            content: groups_of(object).map(BranchContent::Sequence),
        });
    }

    if let Some(restriction) = object.get(RESTRICTION) {
        branches.push(ClassifiedBranch {
            kind: BranchKind::Restriction,
            content: as_object(restriction, RESTRICTION).map(|r| {
                BranchContent::Restriction(Restriction {
                    base: attribute_string(r, BASE),
                })
            }),
        });
    }

    if let Some(simple) = object.get(SIMPLE_CONTENT) {
        branches.push(ClassifiedBranch {
            kind: BranchKind::SimpleContent,
            content: simple_extension(simple).map(BranchContent::SimpleContent),
        });
    }

    if let Some(attributes) = object.get(ATTRIBUTE) {
        branches.push(ClassifiedBranch {
            kind: BranchKind::Attributes,
            content: members(attributes, ATTRIBUTE).map(BranchContent::Attributes),
        });
    }

    Ok(ClassifiedFragment {
        name,
        annotation,
        branches,
    })
}

fn detect_enumeration(object: &Map<String, Value>) -> Option<Result<Enumeration, ShapeError>> {
    let restriction = object.get(RESTRICTION)?.as_object()?;
    let values = restriction.get(ENUMERATION)?;
    if coerce_to_list(values).is_empty() {
        return None;
    }
    Some(enumeration(restriction, values))
}

fn enumeration(restriction: &Map<String, Value>, values: &Value) -> Result<Enumeration, ShapeError> {
    let mut parsed = Vec::new();
    for item in coerce_to_list(values) {
        let entry = as_object(item, ENUMERATION)?;
        parsed.push(EnumValue {
            value: literal_value(entry.get(VALUE)),
            annotation: entry.get(ANNOTATION).cloned(),
        });
    }
    Ok(Enumeration {
        base: attribute_string(restriction, BASE),
        values: parsed,
    })
}

/// Enumeration literals keep surrounding whitespace and may be empty.
fn literal_value(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn complex_extension(value: &Value) -> Result<ComplexExtension, ShapeError> {
    let complex = as_object(value, COMPLEX_CONTENT)?;
    let extension = complex
        .get(EXTENSION)
        .ok_or_else(|| missing(COMPLEX_CONTENT, EXTENSION))?;
    let extension = as_object(extension, EXTENSION)?;
    let base = attribute_string(extension, BASE).ok_or_else(|| missing(EXTENSION, BASE))?;

    Ok(ComplexExtension {
        base,
        sequence: groups_of(extension)?,
    })
}

fn simple_extension(value: &Value) -> Result<SimpleExtension, ShapeError> {
    let simple = as_object(value, SIMPLE_CONTENT)?;
    let extension = simple
        .get(EXTENSION)
        .ok_or_else(|| missing(SIMPLE_CONTENT, EXTENSION))?;
    let extension = as_object(extension, EXTENSION)?;
    let base = attribute_string(extension, BASE).ok_or_else(|| missing(EXTENSION, BASE))?;
    let attributes = match extension.get(ATTRIBUTE) {
        Some(attributes) => members(attributes, ATTRIBUTE)?,
        None => Vec::new(),
    };

    Ok(SimpleExtension { base, attributes })
}

/// Merges every sequence/choice/all group directly under `parent`.
fn groups_of(parent: &Map<String, Value>) -> Result<Sequence, ShapeError> {
    let mut sequence = Sequence::default();
    for (key, value) in parent {
        if GROUP_KEYS.contains(&key.as_str()) {
            for group in coerce_to_list(value) {
                collect_group(&mut sequence, as_object(group, key)?)?;
            }
        }
    }
    Ok(sequence)
}

/// Flattens one group, including nested groups, in key order.
fn collect_group(sequence: &mut Sequence, group: &Map<String, Value>) -> Result<(), ShapeError> {
    for (key, value) in group {
        match key.as_str() {
            ELEMENT => sequence.members.extend(members(value, ELEMENT)?),
            ANY => sequence.open = true,
            SEQUENCE | CHOICE | ALL => {
                for nested in coerce_to_list(value) {
                    collect_group(sequence, as_object(nested, key)?)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn members(value: &Value, key: &str) -> Result<Vec<Member>, ShapeError> {
    coerce_to_list(value)
        .into_iter()
        .map(|item| {
            let object = as_object(item, key)?;
            Ok(Member {
                name: attribute_string(object, "@name"),
                type_ref: attribute_string(object, "@type"),
                min_occurs: attribute_string(object, "@minOccurs"),
                max_occurs: attribute_string(object, "@maxOccurs"),
                use_: attribute_string(object, "@use"),
                annotation: object.get(ANNOTATION).cloned(),
            })
        })
        .collect()
}

fn as_object<'a>(value: &'a Value, key: &str) -> Result<&'a Map<String, Value>, ShapeError> {
    value.as_object().ok_or_else(|| ShapeError::NotAnObject {
        key: key.to_string(),
        found: json_type_name(value).to_string(),
    })
}

fn missing(key: &str, attribute: &str) -> ShapeError {
    ShapeError::MissingAttribute {
        key: key.to_string(),
        attribute: attribute.to_string(),
    }
}
