use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;
use wsdl_typegen::GenerateError;
use wsdl_typegen::generate::{GenerateConfig, generate_into_registry, generate_types};
use wsdl_typegen::report::BranchOutcome;
use wsdl_typegen_core::BranchKind;

/// Fragment directories and an output path inside one temp dir.
struct Workspace {
    dir: TempDir,
}

impl Workspace {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        fs::create_dir_all(dir.path().join("complex")).unwrap();
        fs::create_dir_all(dir.path().join("simple")).unwrap();
        Self { dir }
    }

    fn complex(&self) -> PathBuf {
        self.dir.path().join("complex")
    }

    fn simple(&self) -> PathBuf {
        self.dir.path().join("simple")
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("out").join("types.ts")
    }

    fn write_fragment(&self, dir: &Path, name: &str, record: Value) {
        fs::write(
            dir.join(format!("{name}.json")),
            serde_json::to_string_pretty(&record).unwrap(),
        )
        .expect("failed to write fragment");
    }

    fn write_overrides(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("overrides.json");
        fs::write(&path, content).expect("failed to write overrides");
        path
    }

    fn config(&self) -> GenerateConfig {
        GenerateConfig::new(self.complex(), self.simple(), self.output())
    }

    fn generate(&self, config: &GenerateConfig) -> String {
        generate_types(config).expect("generation should succeed");
        fs::read_to_string(&config.output).expect("output should exist")
    }
}

fn foo_fragment() -> Value {
    json!({
        "@name": "Foo",
        "xs:sequence": { "xs:element": { "@name": "bar", "@type": "xs:string", "@minOccurs": "0" } }
    })
}

fn enum_fragment(name: &str, values: &[&str]) -> Value {
    let values: Vec<Value> = values.iter().map(|v| json!({ "@value": v })).collect();
    json!({
        "@name": name,
        "xs:restriction": { "@base": "xs:string", "xs:enumeration": values }
    })
}

#[test]
fn optional_element_becomes_optional_field() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());

    let output = ws.generate(&ws.config());
    assert_eq!(output, "export interface Foo {\n  bar?: string;\n}\n");
}

#[test]
fn enumeration_becomes_literal_union() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.simple(), "X", enum_fragment("X", &["A", "B"]));

    let mut config = ws.config();
    config.strip_documentation = true;
    assert_eq!(ws.generate(&config), "export type X = \"A\" | \"B\";\n");
}

#[test]
fn field_override_replaces_existing_field_in_place() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());
    let overrides = ws.write_overrides(
        r#"{ "Foo": { "fields": { "bar": { "type": "number", "optional": false } } } }"#,
    );

    let mut config = ws.config();
    config.overrides = Some(overrides);
    let output = ws.generate(&config);

    assert_eq!(output, "export interface Foo {\n  bar: number;\n}\n");
    assert_eq!(output.matches("bar").count(), 1);
}

#[test]
fn field_override_for_absent_field_appends_once() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());
    let overrides =
        ws.write_overrides(r#"{ "Foo": { "fields": { "extra": { "type": "string[]" } } } }"#);

    let mut config = ws.config();
    config.overrides = Some(overrides);
    let output = ws.generate(&config);

    assert_eq!(
        output,
        "export interface Foo {\n  bar?: string;\n  extra?: string[];\n}\n"
    );
}

#[test]
fn literal_override_is_appended_after_schema_declarations() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());
    let overrides = ws.write_overrides(r#"{ "Bar": "string" }"#);

    let mut config = ws.config();
    config.overrides = Some(overrides);
    let outcome = generate_types(&config).unwrap();
    let output = fs::read_to_string(&config.output).unwrap();

    assert_eq!(
        output,
        "export interface Foo {\n  bar?: string;\n}\n\nexport type Bar = string;\n"
    );
    assert_eq!(outcome.report.synthesized, vec!["Bar".to_string()]);
}

#[test]
fn literal_override_never_displaces_schema_declaration() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());
    let overrides = ws.write_overrides(r#"{ "Foo": "string" }"#);

    let mut config = ws.config();
    config.overrides = Some(overrides);
    let output = ws.generate(&config);

    assert_eq!(output, "export interface Foo {\n  bar?: string;\n}\n");
}

#[test]
fn enumerations_precede_other_declarations_of_their_directory() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Alpha", foo_fragment_named("Alpha"));
    ws.write_fragment(&ws.complex(), "Zulu", enum_fragment("Zulu", &["On", "Off"]));
    ws.write_fragment(
        &ws.simple(),
        "Code",
        json!({ "@name": "Code", "xs:restriction": { "@base": "xs:token" } }),
    );
    ws.write_fragment(&ws.simple(), "Kind", enum_fragment("Kind", &["K"]));

    let outcome = generate_into_registry(&ws.config()).unwrap();
    assert_eq!(outcome.registry.names(), vec!["Zulu", "Alpha", "Kind", "Code"]);
}

fn foo_fragment_named(name: &str) -> Value {
    let mut record = foo_fragment();
    record["@name"] = json!(name);
    record
}

#[test]
fn strip_removes_all_documentation() {
    let ws = Workspace::new();
    ws.write_fragment(
        &ws.complex(),
        "Doc",
        json!({
            "@name": "Doc",
            "xs:annotation": { "xs:documentation": "Top level." },
            "xs:sequence": { "xs:element": {
                "@name": "a",
                "@type": "xs:int",
                "xs:annotation": { "xs:documentation": { "#text": "Field doc" } }
            } },
            "xs:attribute": {
                "@name": "b",
                "@type": "xs:string",
                "xs:annotation": { "xs:documentation": "Attr doc" }
            }
        }),
    );
    ws.write_fragment(&ws.simple(), "E", enum_fragment("E", &["x"]));

    let documented = ws.generate(&ws.config());
    assert!(documented.contains("/**\n * Top level.\n */"));
    assert!(documented.contains("  /** Field doc */"));
    assert!(documented.contains("  /** Attr doc */"));
    assert!(documented.contains(" * E enum."));

    let mut config = ws.config();
    config.strip_documentation = true;
    let stripped = ws.generate(&config);
    assert!(!stripped.contains("/**"));
    assert!(!stripped.contains("*/"));
}

#[test]
fn malformed_overrides_file_is_not_fatal() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());
    let overrides = ws.write_overrides("{ this is not json");

    let mut config = ws.config();
    config.overrides = Some(overrides);
    let outcome = generate_types(&config).unwrap();

    assert_eq!(outcome.report.override_count, 0);
    assert!(outcome.report.override_warning.is_some());
    assert_eq!(
        fs::read_to_string(&config.output).unwrap(),
        "export interface Foo {\n  bar?: string;\n}\n"
    );
}

#[test]
fn missing_overrides_file_is_not_fatal() {
    let ws = Workspace::new();
    ws.write_fragment(&ws.complex(), "Foo", foo_fragment());

    let mut config = ws.config();
    config.overrides = Some(ws.dir.path().join("absent.json"));
    let outcome = generate_types(&config).unwrap();

    assert!(outcome.report.override_warning.is_none());
    assert_eq!(outcome.report.declaration_count, 1);
}

#[test]
fn unparseable_fragment_is_fatal() {
    let ws = Workspace::new();
    fs::write(ws.complex().join("Broken.json"), "{ not json").unwrap();

    let err = generate_types(&ws.config()).unwrap_err();
    assert!(matches!(err, GenerateError::ParseFragment { .. }));
    assert!(!ws.output().exists());
}

#[test]
fn missing_input_directory_is_fatal() {
    let ws = Workspace::new();
    let config = GenerateConfig::new(ws.dir.path().join("nope"), ws.simple(), ws.output());
    assert!(matches!(
        generate_types(&config),
        Err(GenerateError::ReadDirectory { .. })
    ));
}

#[test]
fn degraded_fragments_are_reported_but_still_emitted() {
    let ws = Workspace::new();
    ws.write_fragment(
        &ws.complex(),
        "Partial",
        json!({
            "@name": "Partial",
            "xs:complexContent": { "xs:extension": { "xs:sequence": {} } },
            "xs:sequence": { "xs:element": [
                { "@name": "kept", "@type": "xs:boolean" },
                { "@type": "xs:string" }
            ] }
        }),
    );

    let outcome = generate_types(&ws.config()).unwrap();
    let fragment = outcome.report.fragment("Partial").unwrap();

    assert!(fragment
        .outcome(BranchKind::ComplexContent)
        .is_some_and(BranchOutcome::is_failed));
    assert_eq!(
        fragment.outcome(BranchKind::Sequence),
        Some(&BranchOutcome::Degraded {
            warnings: vec!["element #2 has no @name".to_string()]
        })
    );
    assert_eq!(outcome.report.warning_count(), 2);
    assert_eq!(
        fs::read_to_string(ws.output()).unwrap(),
        "export interface Partial {\n  kept: boolean;\n}\n"
    );
}

#[test]
fn output_is_identical_across_job_counts() {
    let ws = Workspace::new();
    for index in 0..20 {
        let name = format!("Type{index:02}");
        ws.write_fragment(&ws.complex(), &name, foo_fragment_named(&name));
    }
    for index in 0..5 {
        let name = format!("Enum{index}");
        ws.write_fragment(&ws.simple(), &name, enum_fragment(&name, &["A", "B"]));
    }

    let mut serial = ws.config();
    serial.jobs = Some(1);
    let first = ws.generate(&serial);

    let mut parallel = ws.config();
    parallel.jobs = Some(4);
    let second = ws.generate(&parallel);

    assert_eq!(first, second);
    assert!(first.starts_with("export interface Type00 {"));
}
