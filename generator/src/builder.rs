//! Declaration building from classified fragments.
//!
//! Each content-model branch is processed inside its own failure boundary:
//! a branch whose content could not be extracted contributes nothing and is
//! recorded as failed, members missing a name or type are skipped with a
//! warning, and the remaining branches still apply. A declaration is always
//! produced.

use tracing::{debug, warn};
use wsdl_typegen_core::render::render_type;
use wsdl_typegen_core::{
    BranchContent, BranchKind, ClassifiedFragment, ComplexExtension, Declaration,
    DeclarationBody, DeclarationKind, Enumeration, Field, Member, OverrideRule, Primitive,
    Restriction, Sequence, SimpleExtension, Structure, TypeExpr, TypeRef, apply_field_overrides,
    extract_documentation, map_type_reference, validate_declaration,
};

use crate::overrides::OverrideStore;
use crate::report::{BranchOutcome, BranchReport, FragmentReport, OverrideReport};

/// Options that change what the builder emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Drop every documentation block and field comment.
    pub strip_documentation: bool,
}

/// A built declaration and the report of how it was built.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub declaration: Declaration,
    pub report: FragmentReport,
}

/// Builds declarations, consulting the override store for field rules.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use wsdl_typegen::builder::{BuildOptions, DeclarationBuilder};
/// use wsdl_typegen::classify::classify_fragment;
/// use wsdl_typegen::overrides::OverrideStore;
/// use wsdl_typegen_core::{DeclarationKind, RenderOptions, render_declaration};
///
/// let record = json!({
///     "@name": "Foo",
///     "xs:sequence": { "xs:element": { "@name": "bar", "@type": "xs:string", "@minOccurs": "0" } }
/// });
/// let fragment = classify_fragment(&record, "Foo").unwrap();
///
/// let overrides = OverrideStore::new();
/// let builder = DeclarationBuilder::new(&overrides, BuildOptions::default());
/// let outcome = builder.build(&fragment, DeclarationKind::Interface);
///
/// assert!(outcome.report.is_clean());
/// assert_eq!(
///     render_declaration(&outcome.declaration, &RenderOptions::default()),
///     "export interface Foo {\n  bar?: string;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct DeclarationBuilder<'a> {
    overrides: &'a OverrideStore,
    options: BuildOptions,
}

/// How a member's optionality is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MemberRule {
    /// `minOccurs`/`maxOccurs` cardinality.
    Element,
    /// `use="optional"`.
    Attribute,
}

impl MemberRule {
    fn label(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Attribute => "attribute",
        }
    }
}

/// Declaration content accumulated across branches.
#[derive(Debug, Default)]
struct Draft {
    extends: Option<TypeRef>,
    fields: Vec<Field>,
    open: bool,
    restriction: Option<TypeRef>,
    alias: Option<TypeExpr>,
}

impl Draft {
    fn set_alias(&mut self, expr: TypeExpr, notes: &mut Vec<String>) {
        if let Some(previous) = self.alias.replace(expr) {
            notes.push(format!(
                "alias to {} replaced by a later branch",
                render_type(&previous, false)
            ));
        }
    }

    fn finish(self, name: &str, kind: DeclarationKind, notes: &mut Vec<String>) -> Declaration {
        let structured = !self.fields.is_empty()
            || self.open
            || (kind == DeclarationKind::Interface && self.extends.is_some());

        let body = if structured {
            if let Some(alias) = &self.alias {
                notes.push(format!(
                    "alias to {} superseded by fields",
                    render_type(alias, false)
                ));
            }
            DeclarationBody::Structure(Structure {
                extends: self.extends,
                fields: self.fields,
                open: self.open,
                restriction: self.restriction,
            })
        } else if let Some(alias) = self.alias {
            DeclarationBody::Alias(alias)
        } else {
            match kind {
                DeclarationKind::Interface => DeclarationBody::Structure(Structure {
                    restriction: self.restriction,
                    ..Structure::default()
                }),
                DeclarationKind::TypeAlias => DeclarationBody::Alias(
                    self.extends
                        .map(TypeExpr::Reference)
                        .unwrap_or(TypeExpr::primitive(Primitive::Unknown)),
                ),
            }
        };

        Declaration {
            name: name.to_string(),
            kind,
            documentation: Vec::new(),
            body,
        }
    }
}

impl<'a> DeclarationBuilder<'a> {
    pub fn new(overrides: &'a OverrideStore, options: BuildOptions) -> Self {
        Self { overrides, options }
    }

    /// Builds the declaration for one fragment.
    pub fn build(&self, fragment: &ClassifiedFragment, kind: DeclarationKind) -> BuildOutcome {
        let mut report = FragmentReport::new(&fragment.name, kind);

        if fragment.is_enumeration() {
            let declaration = self.build_enumeration(fragment, kind, &mut report);
            let has_field_rules = self
                .overrides
                .get(&fragment.name)
                .and_then(OverrideRule::field_rules)
                .is_some();
            if has_field_rules {
                warn!(fragment = %fragment.name, "Field overrides ignored for enumeration");
                report
                    .issues
                    .push("field overrides ignored for enumeration".to_string());
            }
            return BuildOutcome {
                declaration,
                report,
            };
        }

        let mut draft = Draft::default();
        let mut notes = Vec::new();
        for branch in &fragment.branches {
            let outcome = match &branch.content {
                Ok(content) => {
                    let warnings =
                        self.apply_branch(&fragment.name, kind, content, &mut draft, &mut notes);
                    for warning in &warnings {
                        warn!(fragment = %fragment.name, branch = %branch.kind, "{warning}");
                    }
                    BranchOutcome::from_warnings(warnings)
                }
                Err(err) => {
                    warn!(
                        fragment = %fragment.name,
                        branch = %branch.kind,
                        error = %err,
                        "Branch failed"
                    );
                    BranchOutcome::Failed {
                        cause: err.to_string(),
                    }
                }
            };
            report.branches.push(BranchReport {
                branch: branch.kind,
                outcome,
            });
        }

        let mut declaration = draft.finish(&fragment.name, kind, &mut notes);
        if !self.options.strip_documentation {
            declaration
                .documentation
                .extend(extract_documentation(fragment.annotation.as_ref()));
        }

        self.apply_overrides(&mut declaration, &mut report, &mut notes);

        report.issues = notes;
        report.issues.extend(
            validate_declaration(&declaration)
                .into_iter()
                .map(|issue| issue.to_string()),
        );
        for issue in &report.issues {
            warn!(fragment = %fragment.name, "{issue}");
        }

        BuildOutcome {
            declaration,
            report,
        }
    }

    fn build_enumeration(
        &self,
        fragment: &ClassifiedFragment,
        kind: DeclarationKind,
        report: &mut FragmentReport,
    ) -> Declaration {
        let branch = fragment
            .branches
            .iter()
            .find(|branch| branch.kind == BranchKind::Enumeration);

        let (declaration, outcome) = match branch.map(|branch| branch.content.as_ref()) {
            Some(Ok(BranchContent::Enumeration(enumeration))) => {
                let (declaration, warnings) = self.enumeration(&fragment.name, kind, enumeration);
                for warning in &warnings {
                    warn!(fragment = %fragment.name, branch = %BranchKind::Enumeration, "{warning}");
                }
                (declaration, BranchOutcome::from_warnings(warnings))
            }
            Some(Err(err)) => {
                warn!(
                    fragment = %fragment.name,
                    branch = %BranchKind::Enumeration,
                    error = %err,
                    "Branch failed"
                );
                (
                    unknown_alias(&fragment.name, kind),
                    BranchOutcome::Failed {
                        cause: err.to_string(),
                    },
                )
            }
            _ => (
                unknown_alias(&fragment.name, kind),
                BranchOutcome::Failed {
                    cause: "enumeration content missing".to_string(),
                },
            ),
        };

        report.branches.push(BranchReport {
            branch: BranchKind::Enumeration,
            outcome,
        });
        report.issues = validate_declaration(&declaration)
            .into_iter()
            .map(|issue| issue.to_string())
            .collect();
        declaration
    }

    fn enumeration(
        &self,
        name: &str,
        kind: DeclarationKind,
        enumeration: &Enumeration,
    ) -> (Declaration, Vec<String>) {
        let mut warnings = Vec::new();
        let mut literals = Vec::new();
        let mut documentation = Vec::new();
        if !self.options.strip_documentation {
            documentation.push(format!("{name} enum."));
        }

        for (index, entry) in enumeration.values.iter().enumerate() {
            let Some(value) = &entry.value else {
                warnings.push(format!("enumeration value #{} has no @value", index + 1));
                continue;
            };
            literals.push(value.clone());
            if !self.options.strip_documentation {
                documentation.extend(extract_documentation(entry.annotation.as_ref()));
            }
        }

        let expr = if literals.is_empty() {
            warnings.push("enumeration has no usable values".to_string());
            TypeExpr::primitive(Primitive::Unknown)
        } else {
            TypeExpr::LiteralUnion(literals)
        };

        let mut declaration = Declaration::alias(name, kind, expr);
        declaration.documentation = documentation;
        (declaration, warnings)
    }

    /// Applies one branch to the draft and returns its member warnings.
    fn apply_branch(
        &self,
        name: &str,
        kind: DeclarationKind,
        content: &BranchContent,
        draft: &mut Draft,
        notes: &mut Vec<String>,
    ) -> Vec<String> {
        let mut warnings = Vec::new();
        match content {
            BranchContent::ComplexContent(ComplexExtension { base, sequence }) => {
                draft.extends = Some(map_type_reference(base));
                self.sequence(sequence, draft, &mut warnings);
            }
            BranchContent::Sequence(sequence) => self.sequence(sequence, draft, &mut warnings),
            BranchContent::Restriction(Restriction { base }) => {
                let base = base
                    .as_deref()
                    .map(map_type_reference)
                    .unwrap_or(TypeRef::Primitive(Primitive::Unknown));
                match kind {
                    DeclarationKind::TypeAlias => draft.set_alias(TypeExpr::Reference(base), notes),
                    DeclarationKind::Interface => {
                        debug!(fragment = %name, base = %base, "Restriction on structured type recorded as placeholder");
                        draft.restriction = Some(base);
                    }
                }
            }
            BranchContent::SimpleContent(SimpleExtension { base, attributes }) => {
                let base = map_type_reference(base);
                if attributes.is_empty() {
                    draft.set_alias(TypeExpr::Reference(base), notes);
                } else {
                    self.members(attributes, MemberRule::Attribute, draft, &mut warnings);
                    draft.fields.push(Field::new("value", base));
                }
            }
            BranchContent::Attributes(attributes) => {
                self.members(attributes, MemberRule::Attribute, draft, &mut warnings);
            }
            BranchContent::Enumeration(_) => {
                warnings.push("enumeration content outside an enumeration fragment".to_string());
            }
        }
        warnings
    }

    fn sequence(&self, sequence: &Sequence, draft: &mut Draft, warnings: &mut Vec<String>) {
        self.members(&sequence.members, MemberRule::Element, draft, warnings);
        draft.open |= sequence.open;
    }

    fn members(
        &self,
        members: &[Member],
        rule: MemberRule,
        draft: &mut Draft,
        warnings: &mut Vec<String>,
    ) {
        for (index, member) in members.iter().enumerate() {
            let type_ref = member.type_ref.as_deref().and_then(resolve_member_type);
            let (Some(name), Some(type_ref)) = (&member.name, type_ref) else {
                let missing = if member.name.is_none() { "@name" } else { "@type" };
                warnings.push(format!("{} #{} has no {missing}", rule.label(), index + 1));
                continue;
            };

            let (optional, array) = match rule {
                MemberRule::Element => (member.is_optional_element(), member.is_unbounded()),
                MemberRule::Attribute => (member.is_optional_attribute(), false),
            };
            let documentation = if self.options.strip_documentation {
                None
            } else {
                extract_documentation(member.annotation.as_ref())
            };

            draft.fields.push(
                Field::new(name.as_str(), type_ref)
                    .with_optional(optional)
                    .with_array(array)
                    .with_documentation(documentation),
            );
        }
    }

    fn apply_overrides(
        &self,
        declaration: &mut Declaration,
        report: &mut FragmentReport,
        notes: &mut Vec<String>,
    ) {
        let Some(fields) = self
            .overrides
            .get(&declaration.name)
            .and_then(OverrideRule::field_rules)
        else {
            return;
        };

        debug!(fragment = %declaration.name, count = fields.len(), "Applying field overrides");
        let applied = apply_field_overrides(declaration, fields);
        if let Some(alias) = &applied.discarded_alias {
            notes.push(format!(
                "alias to {} replaced by override fields",
                render_type(alias, false)
            ));
        }
        if applied.removed_duplicates > 0 {
            notes.push(format!(
                "{} duplicate field(s) collapsed by overrides",
                applied.removed_duplicates
            ));
        }
        report.overrides = Some(OverrideReport {
            replaced: applied.replaced,
            appended: applied.appended,
        });
    }
}

/// Maps a member's `@type`, treating a reference with an empty local name
/// (such as `ns:`) as absent.
fn resolve_member_type(reference: &str) -> Option<TypeRef> {
    match map_type_reference(reference) {
        TypeRef::Named(name) if name.is_empty() => None,
        type_ref => Some(type_ref),
    }
}

fn unknown_alias(name: &str, kind: DeclarationKind) -> Declaration {
    Declaration::alias(name, kind, TypeExpr::primitive(Primitive::Unknown))
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use serde_json::{Value, json};
    use wsdl_typegen_core::{FieldOverride, FieldRules, RenderOptions, render_declaration};

    use super::*;
    use crate::classify::classify_fragment;

    fn build_with(
        record: Value,
        kind: DeclarationKind,
        overrides: &OverrideStore,
        options: BuildOptions,
    ) -> BuildOutcome {
        let fragment = classify_fragment(&record, "Fallback").unwrap();
        DeclarationBuilder::new(overrides, options).build(&fragment, kind)
    }

    fn build(record: Value, kind: DeclarationKind) -> BuildOutcome {
        build_with(record, kind, &OverrideStore::new(), BuildOptions::default())
    }

    fn render(outcome: &BuildOutcome) -> String {
        render_declaration(&outcome.declaration, &RenderOptions::default())
    }

    #[test]
    fn test_optional_element() {
        let outcome = build(
            json!({
                "@name": "Foo",
                "xs:sequence": { "xs:element": { "@name": "bar", "@type": "xs:string", "@minOccurs": "0" } }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(render(&outcome), "export interface Foo {\n  bar?: string;\n}\n");
    }

    #[test]
    fn test_cardinality_and_named_types() {
        let outcome = build(
            json!({
                "@name": "Order",
                "xs:sequence": { "xs:element": [
                    { "@name": "id", "@type": "xs:long" },
                    { "@name": "lines", "@type": "ns:OrderLine", "@maxOccurs": "unbounded", "@minOccurs": 0 },
                    { "@name": "placed", "@type": "xs:dateTime" }
                ] }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(
            render(&outcome),
            "export interface Order {\n  id: number;\n  lines?: OrderLine[];\n  placed: Date;\n}\n"
        );
    }

    #[test]
    fn test_enumeration_with_docs() {
        let outcome = build(
            json!({
                "@name": "X",
                "xs:restriction": {
                    "@base": "xs:string",
                    "xs:enumeration": [
                        { "@value": "A", "xs:annotation": { "xs:documentation": "First\n    letter" } },
                        { "@value": "B" }
                    ]
                }
            }),
            DeclarationKind::TypeAlias,
        );
        assert_eq!(
            render(&outcome),
            "/**\n * X enum.\n * First letter\n */\nexport type X = \"A\" | \"B\";\n"
        );
        assert_eq!(
            outcome.report.outcome(BranchKind::Enumeration),
            Some(&BranchOutcome::Applied)
        );
    }

    #[test]
    fn test_enumeration_stripped() {
        let outcome = build_with(
            json!({
                "@name": "X",
                "xs:restriction": { "xs:enumeration": [{ "@value": "A" }, { "@value": "B" }] }
            }),
            DeclarationKind::TypeAlias,
            &OverrideStore::new(),
            BuildOptions {
                strip_documentation: true,
            },
        );
        assert!(outcome.declaration.documentation.is_empty());
        assert_eq!(render(&outcome), "export type X = \"A\" | \"B\";\n");
    }

    #[test]
    fn test_enumeration_value_without_literal_is_skipped() {
        let outcome = build(
            json!({
                "@name": "X",
                "xs:restriction": { "xs:enumeration": [{ "@value": "A" }, { "xs:annotation": {} }] }
            }),
            DeclarationKind::TypeAlias,
        );
        assert_eq!(
            outcome.declaration.body,
            DeclarationBody::Alias(TypeExpr::LiteralUnion(vec!["A".into()]))
        );
        assert_eq!(
            outcome.report.warnings(),
            vec!["enumeration: enumeration value #2 has no @value".to_string()]
        );
    }

    #[test]
    fn test_complex_extension_then_sequence() {
        let outcome = build(
            json!({
                "@name": "Derived",
                "xs:complexContent": { "xs:extension": {
                    "@base": "ns:Base",
                    "xs:sequence": { "xs:element": { "@name": "extra", "@type": "xs:int" } }
                } },
                "xs:sequence": { "xs:element": { "@name": "own", "@type": "xs:boolean" } }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(
            render(&outcome),
            "export interface Derived extends Base {\n  extra: number;\n  own: boolean;\n}\n"
        );
    }

    #[test]
    fn test_invalid_element_is_skipped_with_warning() {
        let outcome = build(
            json!({
                "@name": "Foo",
                "xs:sequence": { "xs:element": [
                    { "@name": "ok", "@type": "xs:string" },
                    { "@name": "noType" }
                ] }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(outcome.declaration.fields().len(), 1);
        assert!(matches!(
            outcome.report.outcome(BranchKind::Sequence),
            Some(BranchOutcome::Degraded { warnings }) if warnings == &vec!["element #2 has no @type".to_string()]
        ));
    }

    #[test]
    fn test_element_with_empty_type_name_is_skipped() {
        let outcome = build(
            json!({
                "@name": "Foo",
                "xs:sequence": { "xs:element": [
                    { "@name": "bar", "@type": "ns:" },
                    { "@name": "baz", "@type": "xs:int" }
                ] }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(render(&outcome), "export interface Foo {\n  baz: number;\n}\n");
        assert_eq!(
            outcome.report.warnings(),
            vec!["sequence: element #1 has no @type".to_string()]
        );
    }

    #[test]
    fn test_failed_branch_does_not_stop_others() {
        let outcome = build(
            json!({
                "@name": "Amount",
                "xs:simpleContent": { "xs:extension": { "xs:attribute": { "@name": "a", "@type": "xs:string" } } },
                "xs:attribute": { "@name": "currency", "@type": "xs:string", "@use": "optional" }
            }),
            DeclarationKind::Interface,
        );
        assert!(outcome
            .report
            .outcome(BranchKind::SimpleContent)
            .is_some_and(BranchOutcome::is_failed));
        assert_eq!(render(&outcome), "export interface Amount {\n  currency?: string;\n}\n");
    }

    #[test]
    fn test_simple_content_with_attributes() {
        let outcome = build(
            json!({
                "@name": "Amount",
                "xs:simpleContent": { "xs:extension": {
                    "@base": "xs:decimal",
                    "xs:attribute": { "@name": "currencyID", "@type": "xs:string", "@use": "optional" }
                } }
            }),
            DeclarationKind::TypeAlias,
        );
        assert_eq!(
            render(&outcome),
            "export type Amount = {\n  currencyID?: string;\n  value: number;\n};\n"
        );
    }

    #[test]
    fn test_simple_content_without_attributes_is_alias() {
        let outcome = build(
            json!({
                "@name": "Code",
                "xs:simpleContent": { "xs:extension": { "@base": "xs:token" } }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(render(&outcome), "export type Code = string;\n");
    }

    #[test]
    fn test_restriction_depends_on_kind() {
        let record = json!({ "@name": "Id", "xs:restriction": { "@base": "xs:string" } });
        let alias = build(record.clone(), DeclarationKind::TypeAlias);
        assert_eq!(render(&alias), "export type Id = string;\n");

        let interface = build(record, DeclarationKind::Interface);
        assert_eq!(
            render(&interface),
            "export interface Id {\n  // restriction of string\n}\n"
        );

        let no_base = build(json!({ "@name": "Any", "xs:restriction": {} }), DeclarationKind::TypeAlias);
        assert_eq!(render(&no_base), "export type Any = unknown;\n");
    }

    #[test]
    fn test_open_sequence() {
        let outcome = build(
            json!({ "@name": "Bag", "xs:sequence": { "xs:any": {} } }),
            DeclarationKind::Interface,
        );
        assert_eq!(render(&outcome), "export interface Bag {\n  [key: string]: unknown;\n}\n");
    }

    #[test]
    fn test_top_level_documentation_and_strip() {
        let record = json!({
            "@name": "Foo",
            "xs:annotation": { "xs:documentation": "A foo." },
            "xs:attribute": {
                "@name": "id",
                "@type": "xs:string",
                "xs:annotation": { "xs:documentation": "Identifier" }
            }
        });
        let documented = build(record.clone(), DeclarationKind::Interface);
        assert_eq!(
            render(&documented),
            "/**\n * A foo.\n */\nexport interface Foo {\n  /** Identifier */\n  id: string;\n}\n"
        );

        let stripped = build_with(
            record,
            DeclarationKind::Interface,
            &OverrideStore::new(),
            BuildOptions {
                strip_documentation: true,
            },
        );
        assert_eq!(render(&stripped), "export interface Foo {\n  id: string;\n}\n");
    }

    #[test]
    fn test_field_override_replaces_in_place() {
        let mut fields = IndexMap::new();
        fields.insert("bar".to_string(), FieldOverride::new("number").with_optional(false));
        fields.insert("extra".to_string(), FieldOverride::new("string[]"));
        let mut rules = IndexMap::new();
        rules.insert(
            "Foo".to_string(),
            OverrideRule::Fields(FieldRules {
                optional: None,
                fields: Some(fields),
            }),
        );
        let overrides = OverrideStore::from_rules(rules);

        let outcome = build_with(
            json!({
                "@name": "Foo",
                "xs:sequence": { "xs:element": [
                    { "@name": "bar", "@type": "xs:string", "@minOccurs": "0" },
                    { "@name": "baz", "@type": "xs:int" }
                ] }
            }),
            DeclarationKind::Interface,
            &overrides,
            BuildOptions::default(),
        );
        assert_eq!(
            render(&outcome),
            "export interface Foo {\n  bar: number;\n  baz: number;\n  extra?: string[];\n}\n"
        );
        assert_eq!(
            outcome.report.overrides,
            Some(OverrideReport {
                replaced: vec!["bar".into()],
                appended: vec!["extra".into()],
            })
        );
    }

    #[test]
    fn test_literal_override_is_ignored_by_builder() {
        let overrides = OverrideStore::from_json(r#"{ "Foo": "string" }"#).unwrap();
        let outcome = build_with(
            json!({ "@name": "Foo", "xs:attribute": { "@name": "id", "@type": "xs:int" } }),
            DeclarationKind::Interface,
            &overrides,
            BuildOptions::default(),
        );
        assert_eq!(render(&outcome), "export interface Foo {\n  id: number;\n}\n");
        assert!(outcome.report.overrides.is_none());
    }

    #[test]
    fn test_field_overrides_on_enumeration_are_reported() {
        let overrides =
            OverrideStore::from_json(r#"{ "X": { "fields": { "extra": { "type": "string" } } } }"#)
                .unwrap();
        let outcome = build_with(
            json!({
                "@name": "X",
                "xs:restriction": { "xs:enumeration": [{ "@value": "A" }] }
            }),
            DeclarationKind::TypeAlias,
            &overrides,
            BuildOptions::default(),
        );
        assert_eq!(
            outcome.declaration.body,
            DeclarationBody::Alias(TypeExpr::LiteralUnion(vec!["A".into()]))
        );
        assert!(outcome.report.overrides.is_none());
        assert_eq!(
            outcome.report.issues,
            vec!["field overrides ignored for enumeration".to_string()]
        );
        assert_eq!(outcome.report.warning_count(), 1);
    }

    #[test]
    fn test_duplicate_fields_are_reported() {
        let outcome = build(
            json!({
                "@name": "Dup",
                "xs:sequence": { "xs:element": { "@name": "id", "@type": "xs:string" } },
                "xs:attribute": { "@name": "id", "@type": "xs:string" }
            }),
            DeclarationKind::Interface,
        );
        assert_eq!(outcome.report.issues, vec!["duplicate field: id".to_string()]);
    }

    #[test]
    fn test_empty_fragment() {
        let interface = build(json!({ "@name": "Empty" }), DeclarationKind::Interface);
        assert_eq!(render(&interface), "export interface Empty {}\n");

        let alias = build(json!({ "@name": "Empty" }), DeclarationKind::TypeAlias);
        assert_eq!(render(&alias), "export type Empty = unknown;\n");
    }
}
