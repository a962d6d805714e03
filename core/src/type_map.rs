//! Mapping from schema type references to TypeScript types.
//!
//! References in a primitive namespace (`xs:` or `xsd:`) are looked up in a
//! fixed table; unknown primitives map to [`Primitive::Unknown`]. Any other
//! reference names another generated declaration and only loses its
//! namespace prefix.
//!
//! # Examples
//!
//! ```
//! use wsdl_typegen_core::{Primitive, TypeRef, map_type_reference};
//!
//! assert_eq!(map_type_reference("xs:int"), TypeRef::Primitive(Primitive::Number));
//! assert_eq!(map_type_reference("xs:gYear"), TypeRef::Primitive(Primitive::Unknown));
//! assert_eq!(map_type_reference("ns:AmountType"), TypeRef::Named("AmountType".into()));
//! ```

use crate::{Primitive, TypeRef};

/// Namespace prefixes treated as the XML Schema primitive namespace.
pub const PRIMITIVE_NAMESPACES: &[&str] = &["xs", "xsd"];

/// Maps a type reference such as `xs:string` or `ns:Foo`.
pub fn map_type_reference(reference: &str) -> TypeRef {
    let reference = reference.trim();
    match reference.split_once(':') {
        Some((prefix, local)) if PRIMITIVE_NAMESPACES.contains(&prefix) => {
            TypeRef::Primitive(map_primitive(local))
        }
        Some((_, local)) => TypeRef::Named(local.to_string()),
        None => TypeRef::Named(reference.to_string()),
    }
}

/// Maps the local name of a primitive schema type.
pub fn map_primitive(local_name: &str) -> Primitive {
    match local_name {
        "string" | "token" | "normalizedString" | "anyURI" | "duration" | "base64Binary"
        | "hexBinary" | "NMTOKEN" | "Name" | "NCName" | "ID" | "IDREF" | "language"
        | "QName" => Primitive::String,
        "int" | "integer" | "long" | "short" | "byte" | "decimal" | "float" | "double"
        | "positiveInteger" | "nonNegativeInteger" | "negativeInteger"
        | "nonPositiveInteger" | "unsignedInt" | "unsignedLong" | "unsignedShort"
        | "unsignedByte" => Primitive::Number,
        "boolean" => Primitive::Boolean,
        "date" | "time" | "dateTime" => Primitive::Date,
        _ => Primitive::Unknown,
    }
}
