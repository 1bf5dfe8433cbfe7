use tracing::{debug, warn};

use crate::canonical::{hash, hash_reference};
use crate::convert::to_sequence_form;
use crate::core::primer::{BedForm, PrimerRecord};
use crate::core::reference::SequenceStore;
use crate::core::types::Checksum;
use crate::parsing::bed::{parse_bed_text, parse_records};
use crate::scheme::{ChecksumKind, ChromosomeSummary, SchemeError, ValidateOptions, ValidationReport};
use crate::tiling::check_invariants;

/// A scheme that passed validation, with its sequence-resolved records
#[derive(Debug, Clone)]
pub struct ValidatedScheme {
    /// Records in input order, sequences backfilled where absent
    pub records: Vec<PrimerRecord>,
    pub report: ValidationReport,
}

/// Compare a computed checksum with an expected one.
///
/// A mismatch is an error in strict mode; otherwise it is logged and
/// appended to `warnings`.
fn compare_checksum(
    kind: ChecksumKind,
    expected: Option<&Checksum>,
    actual: &Checksum,
    strict: bool,
    warnings: &mut Vec<String>,
) -> Result<(), SchemeError> {
    let Some(expected) = expected else {
        return Ok(());
    };
    if expected == actual {
        debug!("{} checksum matches {}", kind, expected);
        return Ok(());
    }

    if strict {
        return Err(SchemeError::ChecksumMismatch {
            kind,
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }

    let message = format!(
        "Calculated {kind} checksum ({actual}) does not match expected checksum ({expected})"
    );
    warn!("{}", message);
    warnings.push(message);
    Ok(())
}

/// Validate a scheme from its BED text and loaded reference.
///
/// Steps run in order and stop at the first failure:
/// 1. Parse the BED text, inferring its form
/// 2. Backfill sequences from the reference if the input is coordinate-only
/// 3. Check duplicate names, reference bounds, amplicon completeness and tiling
/// 4. Compute the primer and reference checksums
/// 5. Compare with any expected checksums in `options`
///
/// # Errors
///
/// Returns the `SchemeError` wrapping the first failure, or
/// `SchemeError::ChecksumMismatch` when `options.strict` is set and a
/// checksum differs.
pub fn validate_scheme(
    bed_text: &str,
    store: &SequenceStore,
    options: &ValidateOptions,
) -> Result<ValidatedScheme, SchemeError> {
    let (input_form, records) = parse_bed_text(bed_text)?;
    debug!("Parsed {} primer records ({})", records.len(), input_form);

    let records = match input_form {
        BedForm::Scheme => to_sequence_form(&records, store)?,
        BedForm::Primer => records,
    };

    let schemes = check_invariants(&records, Some(store))?;

    let primer_checksum = hash(&records)?;
    let reference_checksum = hash_reference(store.iter());

    let mut warnings = Vec::new();
    compare_checksum(
        ChecksumKind::Primer,
        options.expected_checksum.as_ref(),
        &primer_checksum,
        options.strict,
        &mut warnings,
    )?;
    compare_checksum(
        ChecksumKind::Reference,
        options.expected_reference_checksum.as_ref(),
        &reference_checksum,
        options.strict,
        &mut warnings,
    )?;

    let report = ValidationReport {
        source: None,
        input_form,
        primer_count: records.len(),
        chromosomes: schemes.iter().map(ChromosomeSummary::from).collect(),
        primer_checksum,
        reference_checksum,
        warnings,
    };

    Ok(ValidatedScheme { records, report })
}

/// Checksum of coordinate-only BED text after backfilling from the reference.
///
/// Equal to the checksum of the matching sequence-resolved BED.
///
/// # Errors
///
/// Returns a parse error if the text is not 6-column BED, a sequence error
/// if a record falls outside the reference, or a checksum error.
pub fn hash_scheme_bed(bed_text: &str, store: &SequenceStore) -> Result<Checksum, SchemeError> {
    let records = parse_records(bed_text, BedForm::Scheme)?;
    let records = to_sequence_form(&records, store)?;
    Ok(hash(&records)?)
}
