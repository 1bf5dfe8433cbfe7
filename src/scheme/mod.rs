//! Scheme validation and bundling.
//!
//! [`validator`] runs the in-memory pipeline over pre-loaded inputs:
//! parse, backfill, structural checks, checksum, and comparison with an
//! expected checksum. [`bundle`] performs the one-shot file reads around
//! it and writes complete scheme bundles.

pub mod bundle;
pub mod validator;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::canonical::ChecksumError;
use crate::core::amplicon::ChromosomeScheme;
use crate::core::primer::BedForm;
use crate::core::reference::SequenceError;
use crate::core::types::Checksum;
use crate::parsing::info::InfoError;
use crate::parsing::ParseError;
use crate::tiling::InvariantError;

pub use bundle::{build, build_recursive, discover_scheme_dirs, validate_dir, validate_recursive};
pub use validator::{hash_scheme_bed, validate_scheme, ValidatedScheme};

/// Which of the two checksums a comparison refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecksumKind {
    Primer,
    Reference,
}

impl fmt::Display for ChecksumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primer => write!(f, "primer"),
            Self::Reference => write!(f, "reference"),
        }
    }
}

#[derive(Error, Debug)]
pub enum SchemeError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),

    #[error(transparent)]
    Checksum(#[from] ChecksumError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),

    #[error(transparent)]
    Info(#[from] InfoError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Calculated {kind} checksum ({actual}) does not match expected checksum ({expected})")]
    ChecksumMismatch {
        kind: ChecksumKind,
        expected: Checksum,
        actual: Checksum,
    },

    #[error("Required file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Bundle already exists: {}", .0.display())]
    BundleExists(PathBuf),
}

/// Run-time options for validation and build
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    /// Treat checksum mismatches as errors instead of warnings
    pub strict: bool,

    /// Expected primer checksum, overriding any recorded in metadata
    pub expected_checksum: Option<Checksum>,

    /// Expected reference checksum, overriding any recorded in metadata
    pub expected_reference_checksum: Option<Checksum>,
}

/// Per-chromosome summary line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChromosomeSummary {
    pub chrom: String,
    pub amplicon_count: usize,
    pub primer_count: usize,
}

impl From<&ChromosomeScheme> for ChromosomeSummary {
    fn from(scheme: &ChromosomeScheme) -> Self {
        Self {
            chrom: scheme.chrom.clone(),
            amplicon_count: scheme.amplicons.len(),
            primer_count: scheme.primer_count(),
        }
    }
}

/// Outcome of a successful validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Scheme directory, when validated from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,

    /// Form of the coordinate file as read
    pub input_form: BedForm,

    pub primer_count: usize,
    pub chromosomes: Vec<ChromosomeSummary>,
    pub primer_checksum: Checksum,
    pub reference_checksum: Checksum,

    /// Non-fatal findings, such as checksum mismatches outside strict mode
    pub warnings: Vec<String>,
}

impl ValidationReport {
    #[must_use]
    pub fn amplicon_count(&self) -> usize {
        self.chromosomes.iter().map(|c| c.amplicon_count).sum()
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
