//! Structured reporting for generation runs.
//!
//! Every fragment gets a [`FragmentReport`] listing the outcome of each
//! content-model branch, the field overrides applied and any validation
//! issues. Recoverable problems only ever show up here and in the log; they
//! never fail the run.

use std::path::PathBuf;

use serde::Serialize;
use wsdl_typegen_core::{BranchKind, DeclarationKind};

/// Outcome of one branch of one fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BranchOutcome {
    /// The branch contributed everything it described.
    Applied,
    /// Some elements or attributes were skipped.
    Degraded { warnings: Vec<String> },
    /// The branch contributed nothing.
    Failed { cause: String },
}

impl BranchOutcome {
    pub fn from_warnings(warnings: Vec<String>) -> Self {
        if warnings.is_empty() {
            Self::Applied
        } else {
            Self::Degraded { warnings }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}

/// A branch kind paired with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BranchReport {
    pub branch: BranchKind,
    #[serde(flatten)]
    pub outcome: BranchOutcome,
}

/// Field overrides merged into a fragment's declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OverrideReport {
    pub replaced: Vec<String>,
    pub appended: Vec<String>,
}

/// Per-fragment build report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FragmentReport {
    pub name: String,
    pub kind: DeclarationKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
    pub branches: Vec<BranchReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<OverrideReport>,
    /// Problems with the finished declaration.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<String>,
}

impl FragmentReport {
    pub fn new(name: &str, kind: DeclarationKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            source: None,
            branches: Vec::new(),
            overrides: None,
            issues: Vec::new(),
        }
    }

    /// Returns the outcome recorded for a branch.
    pub fn outcome(&self, branch: BranchKind) -> Option<&BranchOutcome> {
        self.branches
            .iter()
            .find(|report| report.branch == branch)
            .map(|report| &report.outcome)
    }

    /// All warnings of this fragment, each prefixed with its branch.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        for report in &self.branches {
            match &report.outcome {
                BranchOutcome::Applied => {}
                BranchOutcome::Degraded { warnings: items } => {
                    warnings.extend(items.iter().map(|w| format!("{}: {w}", report.branch)));
                }
                BranchOutcome::Failed { cause } => {
                    warnings.push(format!("{}: branch failed: {cause}", report.branch));
                }
            }
        }
        warnings.extend(self.issues.iter().cloned());
        warnings
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().len()
    }

    pub fn is_clean(&self) -> bool {
        self.warning_count() == 0
    }
}

/// Report for a whole generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    pub declaration_count: usize,
    pub override_count: usize,
    /// Set when the override file was present but unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_warning: Option<String>,
    pub fragments: Vec<FragmentReport>,
    /// Declarations created purely from override rules, in order.
    pub synthesized: Vec<String>,
}

impl GenerationReport {
    pub fn warning_count(&self) -> usize {
        self.fragments
            .iter()
            .map(FragmentReport::warning_count)
            .sum::<usize>()
            + usize::from(self.override_warning.is_some())
    }

    /// All warnings of the run, prefixed with the fragment name.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings: Vec<String> = self.override_warning.iter().cloned().collect();
        for fragment in &self.fragments {
            warnings.extend(
                fragment
                    .warnings()
                    .into_iter()
                    .map(|warning| format!("{}: {warning}", fragment.name)),
            );
        }
        warnings
    }

    /// Finds the report of a fragment by declaration name.
    ///
    /// When a name was generated more than once the last report wins, like
    /// the registry entry.
    pub fn fragment(&self, name: &str) -> Option<&FragmentReport> {
        self.fragments.iter().rev().find(|fragment| fragment.name == name)
    }
}
