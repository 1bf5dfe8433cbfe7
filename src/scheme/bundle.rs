//! File-backed scheme operations.
//!
//! A scheme directory holds `primer.bed` or `scheme.bed`, a
//! `reference.fasta`, and optionally `info.json`. All reads happen up front;
//! validation itself runs on the loaded contents.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::convert::{format_records, to_coordinate_form};
use crate::core::reference::SequenceStore;
use crate::parsing::bed::write_bed;
use crate::parsing::fasta::load_fasta_file;
use crate::parsing::info::{load_info_file, InfoError, SchemeInfo};
use crate::scheme::validator::{validate_scheme, ValidatedScheme};
use crate::scheme::{SchemeError, ValidateOptions, ValidationReport};

pub const PRIMER_BED: &str = "primer.bed";
pub const SCHEME_BED: &str = "scheme.bed";
pub const REFERENCE_FASTA: &str = "reference.fasta";
pub const INFO_JSON: &str = "info.json";

const STAGING_PREFIX: &str = ".primaschema-";

/// Contents of a scheme directory, read once
struct SchemeFiles {
    bed_text: String,
    reference_path: PathBuf,
    store: SequenceStore,
    info: Option<SchemeInfo>,
}

fn load_scheme_dir(dir: &Path) -> Result<SchemeFiles, SchemeError> {
    let bed_path = [PRIMER_BED, SCHEME_BED]
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
        .ok_or_else(|| SchemeError::MissingFile(dir.join(PRIMER_BED)))?;

    let reference_path = dir.join(REFERENCE_FASTA);
    if !reference_path.is_file() {
        return Err(SchemeError::MissingFile(reference_path));
    }

    let info_path = dir.join(INFO_JSON);
    let info = if info_path.is_file() {
        Some(load_info_file(&info_path)?)
    } else {
        None
    };

    debug!("Reading {}", bed_path.display());
    let bed_text = fs::read_to_string(&bed_path)?;
    let store = load_fasta_file(&reference_path)?;

    Ok(SchemeFiles {
        bed_text,
        reference_path,
        store,
        info,
    })
}

/// Explicit options take precedence over checksums recorded in metadata.
fn effective_options(options: &ValidateOptions, info: Option<&SchemeInfo>) -> ValidateOptions {
    ValidateOptions {
        strict: options.strict,
        expected_checksum: options
            .expected_checksum
            .clone()
            .or_else(|| info.and_then(|i| i.primer_checksum.clone())),
        expected_reference_checksum: options
            .expected_reference_checksum
            .clone()
            .or_else(|| info.and_then(|i| i.reference_checksum.clone())),
    }
}

fn validate_files(
    dir: &Path,
    files: &SchemeFiles,
    options: &ValidateOptions,
) -> Result<ValidatedScheme, SchemeError> {
    let options = effective_options(options, files.info.as_ref());
    let mut validated = validate_scheme(&files.bed_text, &files.store, &options)?;
    validated.report.source = Some(dir.to_path_buf());
    Ok(validated)
}

/// Validate the scheme in `dir`.
///
/// The expected primer checksum is `options.expected_checksum` if set,
/// otherwise `primer_checksum` from `info.json`. The reference checksum is
/// resolved the same way.
///
/// # Errors
///
/// Returns `SchemeError::MissingFile` if no BED file or reference is present,
/// or any error from reading the files or from [`validate_scheme`].
pub fn validate_dir(dir: &Path, options: &ValidateOptions) -> Result<ValidationReport, SchemeError> {
    let files = load_scheme_dir(dir)?;
    let validated = validate_files(dir, &files, options)?;
    info!(
        "{}: {} primers in {} amplicons, {}",
        dir.display(),
        validated.report.primer_count,
        validated.report.amplicon_count(),
        validated.report.primer_checksum
    );
    Ok(validated.report)
}

fn is_scheme_dir(dir: &Path) -> bool {
    [INFO_JSON, PRIMER_BED, SCHEME_BED]
        .iter()
        .any(|name| dir.join(name).is_file())
}

/// Find every directory under `root` (inclusive) that looks like a scheme.
///
/// Hidden directories below `root` are skipped. Results are sorted by path.
#[must_use]
pub fn discover_scheme_dirs(root: &Path) -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'))
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_dir() && is_scheme_dir(e.path()))
        .map(walkdir::DirEntry::into_path)
        .collect();
    dirs.sort();
    dirs
}

/// Validate every scheme directory under `root` in parallel.
///
/// Failures are reported per directory and do not stop the batch.
#[must_use]
pub fn validate_recursive(
    root: &Path,
    options: &ValidateOptions,
) -> Vec<(PathBuf, Result<ValidationReport, SchemeError>)> {
    let dirs = discover_scheme_dirs(root);
    debug!("Validating {} scheme(s) under {}", dirs.len(), root.display());
    dirs.into_par_iter()
        .map(|dir| {
            let result = validate_dir(&dir, options);
            (dir, result)
        })
        .collect()
}

fn bundle_name(dir: &Path, info: Option<&SchemeInfo>) -> String {
    info.map(SchemeInfo::bundle_name).unwrap_or_else(|| {
        dir.file_name()
            .map_or_else(|| "scheme".to_string(), |n| n.to_string_lossy().into_owned())
    })
}

fn write_bundle(
    staging: &Path,
    files: &SchemeFiles,
    validated: &ValidatedScheme,
) -> Result<(), SchemeError> {
    let ordered = format_records(&validated.records);
    fs::write(staging.join(PRIMER_BED), write_bed(&ordered))?;
    fs::write(
        staging.join(SCHEME_BED),
        write_bed(&to_coordinate_form(&ordered)),
    )?;
    fs::copy(&files.reference_path, staging.join(REFERENCE_FASTA))?;

    if let Some(info) = &files.info {
        let mut info = info.clone();
        info.primer_checksum = Some(validated.report.primer_checksum.clone());
        info.reference_checksum = Some(validated.report.reference_checksum.clone());
        let json = serde_json::to_string_pretty(&info).map_err(InfoError::from)?;
        fs::write(staging.join(INFO_JSON), json + "\n")?;
    }
    Ok(())
}

/// Validate the scheme in `dir` and write a bundle under `out_dir`.
///
/// The bundle is named `{name}-{version}` from `info.json`, or after `dir`
/// when there is no metadata. It holds `primer.bed` and `scheme.bed` in
/// display order, a copy of the reference, and `info.json` with both
/// checksums recorded. Files are staged in a temporary directory inside
/// `out_dir` and moved into place only once all of them are written.
///
/// # Errors
///
/// Returns `SchemeError::BundleExists` if the bundle directory is already
/// present, or any error from [`validate_dir`] or from writing the files.
/// Nothing is left in `out_dir` on failure.
pub fn build(dir: &Path, out_dir: &Path, options: &ValidateOptions) -> Result<PathBuf, SchemeError> {
    let files = load_scheme_dir(dir)?;
    let validated = validate_files(dir, &files, options)?;

    let target = out_dir.join(bundle_name(dir, files.info.as_ref()));
    if target.exists() {
        return Err(SchemeError::BundleExists(target));
    }

    fs::create_dir_all(out_dir)?;
    let staging = tempfile::Builder::new()
        .prefix(STAGING_PREFIX)
        .tempdir_in(out_dir)?;
    write_bundle(staging.path(), &files, &validated)?;
    fs::rename(staging.path(), &target)?;

    info!("Built {}", target.display());
    Ok(target)
}

/// Build every scheme directory under `root` into `out_dir` in parallel.
///
/// Failures are reported per directory and do not stop the batch.
#[must_use]
pub fn build_recursive(
    root: &Path,
    out_dir: &Path,
    options: &ValidateOptions,
) -> Vec<(PathBuf, Result<PathBuf, SchemeError>)> {
    let dirs = discover_scheme_dirs(root);
    debug!("Building {} scheme(s) under {}", dirs.len(), root.display());
    dirs.into_par_iter()
        .map(|dir| {
            let result = build(&dir, out_dir, options);
            (dir, result)
        })
        .collect()
}
