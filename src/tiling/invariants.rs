use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::core::amplicon::{group_amplicons, ChromosomeScheme};
use crate::core::primer::PrimerRecord;
use crate::core::reference::SequenceStore;
use crate::tiling::overlap::{check_tiling, TilingError};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("Tiling check failed on {chrom} (amplicon {amplicon}): {source}")]
    Tiling {
        chrom: String,
        /// Amplicon number at the index the failure refers to
        amplicon: String,
        source: TilingError,
    },

    #[error("Duplicate primer name '{name}' (records {first} and {second})")]
    DuplicatePrimerName {
        name: String,
        first: usize,
        second: usize,
    },

    #[error("Amplicon {amplicon} ends at {end}, beyond the end of {chrom} (length {length})")]
    OutOfBounds {
        chrom: String,
        amplicon: String,
        end: u64,
        length: u64,
    },

    #[error("Reference chromosome {0} not found in reference")]
    UnknownChromosome(String),

    #[error("Amplicon {amplicon} on {chrom} has {count} primer(s); at least 2 are required")]
    IncompleteAmplicon {
        chrom: String,
        amplicon: String,
        count: usize,
    },
}

/// Reject primer names that occur more than once.
///
/// Record positions in the error are 1-based.
///
/// # Errors
///
/// Returns `InvariantError::DuplicatePrimerName` for the first repeated name.
pub fn check_duplicate_names(records: &[PrimerRecord]) -> Result<(), InvariantError> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        if let Some(&first) = seen.get(record.name.as_str()) {
            return Err(InvariantError::DuplicatePrimerName {
                name: record.name.to_string(),
                first: first + 1,
                second: i + 1,
            });
        }
        seen.insert(record.name.as_str(), i);
    }
    Ok(())
}

/// Every chromosome must exist in the reference and every amplicon must
/// end within it.
///
/// # Errors
///
/// Returns `InvariantError::UnknownChromosome` or `InvariantError::OutOfBounds`.
pub fn check_bounds(
    schemes: &[ChromosomeScheme],
    store: &SequenceStore,
) -> Result<(), InvariantError> {
    for scheme in schemes {
        let length = store
            .length(&scheme.chrom)
            .ok_or_else(|| InvariantError::UnknownChromosome(scheme.chrom.clone()))?;

        if let Some(amplicon) = scheme.amplicons.iter().find(|a| a.max_end() > length) {
            return Err(InvariantError::OutOfBounds {
                chrom: scheme.chrom.clone(),
                amplicon: amplicon.number.clone(),
                end: amplicon.max_end(),
                length,
            });
        }
    }
    Ok(())
}

/// # Errors
///
/// Returns `InvariantError::IncompleteAmplicon` for any amplicon with fewer
/// than two primers.
pub fn check_amplicon_completeness(schemes: &[ChromosomeScheme]) -> Result<(), InvariantError> {
    for scheme in schemes {
        if let Some(amplicon) = scheme.amplicons.iter().find(|a| a.primers.len() < 2) {
            return Err(InvariantError::IncompleteAmplicon {
                chrom: scheme.chrom.clone(),
                amplicon: amplicon.number.clone(),
                count: amplicon.primers.len(),
            });
        }
    }
    Ok(())
}

/// Run the tiling check independently on each chromosome.
///
/// # Errors
///
/// Returns `InvariantError::Tiling` for the first chromosome that fails.
pub fn check_scheme_tiling(schemes: &[ChromosomeScheme]) -> Result<(), InvariantError> {
    for scheme in schemes {
        let bounds = scheme.bounds();
        debug!("Checking tiling of {} amplicons on {}", bounds.len(), scheme.chrom);

        check_tiling(&bounds).map_err(|source| {
            let amplicon = source
                .amplicon_index()
                .and_then(|i| scheme.amplicons.get(i))
                .map(|a| a.number.clone())
                .unwrap_or_default();
            InvariantError::Tiling {
                chrom: scheme.chrom.clone(),
                amplicon,
                source,
            }
        })?;
    }
    Ok(())
}

/// Validate a record set against all structural invariants.
///
/// Checks run in order: duplicate names, reference bounds (when a store is
/// given), amplicon completeness, then tiling. Returns the grouped scheme
/// on success.
///
/// # Errors
///
/// Returns the first `InvariantError` encountered.
pub fn check_invariants(
    records: &[PrimerRecord],
    store: Option<&SequenceStore>,
) -> Result<Vec<ChromosomeScheme>, InvariantError> {
    check_duplicate_names(records)?;

    let schemes = group_amplicons(records);
    if let Some(store) = store {
        check_bounds(&schemes, store)?;
    }
    check_amplicon_completeness(&schemes)?;
    check_scheme_tiling(&schemes)?;

    Ok(schemes)
}
