//! Generation of TypeScript declarations from per-type WSDL schema fragments.
//!
//! The upstream splitter writes one JSON record per named schema type into
//! two directories: structured (complex) types and simple types. This crate
//! turns those records into one TypeScript file.
//!
//! # Main entry points
//!
//! - [`generate::generate_types`]: run a full generation and write the
//!   output file.
//! - [`generate::generate_into_registry`]: same, without writing anything.
//! - [`classify::classify_fragment`] and [`builder::DeclarationBuilder`]:
//!   build a single declaration from an in-memory record.
//!
//! # Example
//!
//! ```
//! use std::fs;
//!
//! use wsdl_typegen::generate::{GenerateConfig, generate_types};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let complex = dir.path().join("complex");
//! let simple = dir.path().join("simple");
//! fs::create_dir_all(&complex).unwrap();
//! fs::create_dir_all(&simple).unwrap();
//! fs::write(
//!     complex.join("Foo.json"),
//!     r#"{ "@name": "Foo",
//!          "xs:sequence": { "xs:element": { "@name": "bar", "@type": "xs:string", "@minOccurs": "0" } } }"#,
//! )
//! .unwrap();
//!
//! let output = dir.path().join("types.ts");
//! let outcome = generate_types(&GenerateConfig::new(&complex, &simple, &output)).unwrap();
//!
//! assert_eq!(outcome.report.declaration_count, 1);
//! assert_eq!(
//!     fs::read_to_string(&output).unwrap(),
//!     "export interface Foo {\n  bar?: string;\n}\n"
//! );
//! ```

pub mod builder;
pub mod classify;
pub mod error;
pub mod generate;
pub mod output;
pub mod overrides;
pub mod report;

pub use error::{GenerateError, Result};
