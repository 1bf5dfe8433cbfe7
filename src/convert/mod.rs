//! Conversion between coordinate-only and sequence-resolved primer records.
//!
//! `scheme.bed` (6 columns) and `primer.bed` (7 columns) describe the same
//! primers; the sequence column can always be recovered from the reference:
//!
//! - `+` strand primers take `reference[start..end]`
//! - `-` strand primers take the reverse complement of `reference[start..end]`
//!
//! Converting to sequence form and back yields the original coordinates.

pub mod order;

pub use order::{diff, format_records, DiffEntry, DiffSide};

use crate::core::primer::{PrimerRecord, Strand};
use crate::core::reference::{SequenceError, SequenceStore};
use crate::core::types::ConversionDirection;

/// Drop primer sequences, preserving record order and all other fields.
#[must_use]
pub fn to_coordinate_form(records: &[PrimerRecord]) -> Vec<PrimerRecord> {
    records
        .iter()
        .cloned()
        .map(|mut record| {
            record.sequence = None;
            record
        })
        .collect()
}

/// Backfill primer sequences from the reference, preserving record order.
///
/// Existing sequences are replaced by the reference-derived ones.
///
/// # Errors
///
/// Returns `SequenceError::UnknownChromosome` if a record's chromosome is
/// not in the store, or `SequenceError::Range` if its interval extends
/// past the end of the chromosome.
pub fn to_sequence_form(
    records: &[PrimerRecord],
    store: &SequenceStore,
) -> Result<Vec<PrimerRecord>, SequenceError> {
    records
        .iter()
        .map(|record| -> Result<PrimerRecord, SequenceError> {
            let sequence = match record.strand {
                Strand::Forward => store
                    .substring(&record.chrom, record.start, record.end)?
                    .to_string(),
                Strand::Reverse => {
                    store.reverse_complement_substring(&record.chrom, record.start, record.end)?
                }
            };
            Ok(record.clone().with_sequence(sequence))
        })
        .collect()
}

/// Convert records in the given direction.
///
/// # Errors
///
/// Returns any error from [`to_sequence_form`]; conversion to coordinate
/// form cannot fail.
pub fn convert(
    records: &[PrimerRecord],
    direction: ConversionDirection,
    store: &SequenceStore,
) -> Result<Vec<PrimerRecord>, SequenceError> {
    match direction {
        ConversionDirection::ToCoordinate => Ok(to_coordinate_form(records)),
        ConversionDirection::ToSequence => to_sequence_form(records, store),
    }
}
