//! Directory-level orchestration of a generation run.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, info, warn};
use wsdl_typegen_core::{
    ClassifiedFragment, DeclarationKind, RenderOptions, TypeRegistry, synthesize_declaration,
};

use crate::builder::{BuildOptions, DeclarationBuilder};
use crate::classify::classify_fragment;
use crate::error::{GenerateError, Result};
use crate::overrides::{OverrideLoadStatus, OverrideStore};
use crate::report::GenerationReport;

/// Upper bound for the default number of read workers.
const MAX_DEFAULT_JOBS: usize = 8;

/// A fragment directory and the declaration kind its fragments produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputDirectory {
    pub path: PathBuf,
    pub kind: DeclarationKind,
}

/// Generation run configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Directory of structured (complex) type fragments, emitted as interfaces.
    pub structured_dir: PathBuf,
    /// Directory of simple type fragments, emitted as type aliases.
    pub simple_dir: PathBuf,
    /// Path of the generated TypeScript file.
    pub output: PathBuf,
    /// Override file. `None` behaves like a missing file.
    pub overrides: Option<PathBuf>,
    /// Omit all documentation from the output.
    pub strip_documentation: bool,
    /// Number of parallel read jobs (`None` = adaptive default).
    pub jobs: Option<usize>,
}

impl GenerateConfig {
    pub fn new(
        structured_dir: impl Into<PathBuf>,
        simple_dir: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
    ) -> Self {
        Self {
            structured_dir: structured_dir.into(),
            simple_dir: simple_dir.into(),
            output: output.into(),
            ..Self::default()
        }
    }

    /// Input directories in processing order.
    pub fn input_directories(&self) -> [InputDirectory; 2] {
        [
            InputDirectory {
                path: self.structured_dir.clone(),
                kind: DeclarationKind::Interface,
            },
            InputDirectory {
                path: self.simple_dir.clone(),
                kind: DeclarationKind::TypeAlias,
            },
        ]
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            include_documentation: !self.strip_documentation,
        }
    }
}

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub registry: TypeRegistry,
    pub report: GenerationReport,
}

/// A fragment read from disk.
#[derive(Debug, Clone)]
struct LoadedFragment {
    path: PathBuf,
    fragment: ClassifiedFragment,
}

/// Runs a full generation and writes the output file.
///
/// # Errors
///
/// Fails if an input directory or fragment cannot be read or parsed, or if
/// the output cannot be written. Malformed branches, members and override
/// files only produce warnings in the returned report.
pub fn generate_types(config: &GenerateConfig) -> Result<GenerationOutcome> {
    let mut outcome = generate_into_registry(config)?;

    let rendered = outcome.registry.render(&config.render_options());
    write_output(&config.output, &rendered)?;
    outcome.report.output = Some(config.output.clone());

    info!(
        output = %config.output.display(),
        declarations = outcome.report.declaration_count,
        warnings = outcome.report.warning_count(),
        synthesized = outcome.report.synthesized.len(),
        "Type generation complete"
    );
    Ok(outcome)
}

/// Runs a generation into an in-memory registry without writing anything.
///
/// # Examples
///
/// ```
/// use std::fs;
///
/// use wsdl_typegen::generate::{GenerateConfig, generate_into_registry};
///
/// let dir = tempfile::tempdir().unwrap();
/// let complex = dir.path().join("complex");
/// let simple = dir.path().join("simple");
/// fs::create_dir_all(&complex).unwrap();
/// fs::create_dir_all(&simple).unwrap();
/// fs::write(
///     simple.join("X.json"),
///     r#"{ "@name": "X", "xs:restriction": { "xs:enumeration": [{ "@value": "A" }] } }"#,
/// )
/// .unwrap();
///
/// let config = GenerateConfig::new(&complex, &simple, dir.path().join("types.ts"));
/// let outcome = generate_into_registry(&config).unwrap();
/// assert_eq!(outcome.registry.names(), vec!["X"]);
/// ```
pub fn generate_into_registry(config: &GenerateConfig) -> Result<GenerationOutcome> {
    let (overrides, status) = match &config.overrides {
        Some(path) => OverrideStore::load_with_status(path),
        None => (OverrideStore::new(), OverrideLoadStatus::Missing),
    };

    let mut report = GenerationReport {
        override_count: overrides.len(),
        ..GenerationReport::default()
    };
    if let OverrideLoadStatus::Invalid(reason) = status {
        report.override_warning = Some(reason);
    }

    let inputs = config
        .input_directories()
        .into_iter()
        .map(|input| {
            let paths = collect_fragment_paths(&input.path)?;
            info!(
                directory = %input.path.display(),
                kind = %input.kind,
                fragments = paths.len(),
                "Collected fragment files"
            );
            Ok((input, paths))
        })
        .collect::<Result<Vec<_>>>()?;

    let total: usize = inputs.iter().map(|(_, paths)| paths.len()).sum();
    let jobs = config
        .jobs
        .filter(|jobs| *jobs > 0)
        .unwrap_or_else(|| default_parallel_jobs(total));
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let builder = DeclarationBuilder::new(
        &overrides,
        BuildOptions {
            strip_documentation: config.strip_documentation,
        },
    );
    let mut registry = TypeRegistry::new();

    for (input, paths) in inputs {
        let fragments = pool.install(|| load_fragments(&paths))?;
        commit_directory(&builder, &mut registry, &mut report, input.kind, fragments);
    }

    report.synthesized = synthesize_overrides(&overrides, &mut registry);
    report.declaration_count = registry.len();

    Ok(GenerationOutcome { registry, report })
}

/// Collects `*.json` fragment files of one directory, sorted by path.
///
/// Subdirectories and files with other extensions are ignored.
pub fn collect_fragment_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let read_error = |source| GenerateError::ReadDirectory {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = BTreeSet::new();
    for entry in fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension() == Some(OsStr::new("json")) {
            paths.insert(path);
        }
    }
    Ok(paths.into_iter().collect())
}

/// Reads, parses and classifies one fragment file.
///
/// The file stem is the fallback name when the record has no `@name`.
pub fn load_fragment(path: &Path) -> Result<ClassifiedFragment> {
    let raw = fs::read_to_string(path).map_err(|source| GenerateError::ReadFragment {
        path: path.to_path_buf(),
        source,
    })?;
    let record: Value = serde_json::from_str(&raw).map_err(|source| GenerateError::ParseFragment {
        path: path.to_path_buf(),
        source,
    })?;

    let fallback = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    classify_fragment(&record, &fallback).map_err(|source| GenerateError::InvalidFragment {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads fragments in parallel, keeping path order.
///
/// Every file is attempted; the reported error is the first in path order.
fn load_fragments(paths: &[PathBuf]) -> Result<Vec<LoadedFragment>> {
    use rayon::prelude::*;

    let results: Vec<Result<LoadedFragment>> = paths
        .par_iter()
        .map(|path| {
            load_fragment(path).map(|fragment| LoadedFragment {
                path: path.clone(),
                fragment,
            })
        })
        .collect();
    results.into_iter().collect()
}

/// Builds and registers one directory's fragments: enumerations first, then
/// everything else, each group in path order.
fn commit_directory(
    builder: &DeclarationBuilder<'_>,
    registry: &mut TypeRegistry,
    report: &mut GenerationReport,
    kind: DeclarationKind,
    fragments: Vec<LoadedFragment>,
) {
    let (enumerations, others): (Vec<_>, Vec<_>) = fragments
        .into_iter()
        .partition(|loaded| loaded.fragment.is_enumeration());
    debug!(
        kind = %kind,
        enumerations = enumerations.len(),
        others = others.len(),
        "Committing fragments"
    );

    for loaded in enumerations.into_iter().chain(others) {
        let mut outcome = builder.build(&loaded.fragment, kind);
        debug!(
            fragment = %loaded.fragment.name,
            path = %loaded.path.display(),
            warnings = outcome.report.warning_count(),
            "Built declaration"
        );
        outcome.report.source = Some(loaded.path);

        if registry.insert(outcome.declaration).is_some() {
            warn!(
                fragment = %loaded.fragment.name,
                "Declaration replaced by a later fragment with the same name"
            );
        }
        report.fragments.push(outcome.report);
    }
}

/// Adds declarations for override rules whose name is still unregistered.
///
/// Returns the synthesized names in override file order.
pub fn synthesize_overrides(overrides: &OverrideStore, registry: &mut TypeRegistry) -> Vec<String> {
    let mut synthesized = Vec::new();
    for (name, rule) in overrides.iter() {
        let Some(declaration) = synthesize_declaration(name, rule) else {
            debug!(name, "Override without fields has nothing to synthesize");
            continue;
        };
        if registry.insert_if_absent(declaration) {
            debug!(name, "Synthesized declaration from override");
            synthesized.push(name.to_string());
        } else {
            debug!(name, "Override names a schema declaration, nothing synthesized");
        }
    }
    synthesized
}

/// Writes the rendered output, creating parent directories as needed.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    let write_error = |source| GenerateError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_error)?;
    }
    fs::write(path, content).map_err(write_error)
}

fn default_parallel_jobs(fragment_count: usize) -> usize {
    let cpu_count = std::thread::available_parallelism()
        .map(|parallelism| parallelism.get())
        .unwrap_or(4);
    cpu_count.min(MAX_DEFAULT_JOBS).max(1).min(fragment_count.max(1))
}
