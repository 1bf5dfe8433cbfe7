//! Property tests for checksums, conversion and tiling.

use primaschema::convert::{to_coordinate_form, to_sequence_form};
use primaschema::parsing::bed::{parse_bed_text, parse_records};
use primaschema::parsing::fasta::parse_fasta_text;
use primaschema::scheme::hash_scheme_bed;
use primaschema::tiling::{overlaps, TilingError};
use primaschema::{check_tiling, hash, BedForm, PrimerRecord, SequenceStore};
use proptest::prelude::*;

const PRIMER_BED: &str = include_str!("data/valid/primer.bed");
const SCHEME_BED: &str = include_str!("data/valid/scheme.bed");
const REFERENCE: &str = include_str!("data/valid/reference.fasta");

fn primer_records() -> Vec<PrimerRecord> {
    parse_bed_text(PRIMER_BED).unwrap().1
}

fn store() -> SequenceStore {
    parse_fasta_text(REFERENCE).unwrap()
}

/// Amplicon extents of `step <= length < 2 * step` placed `step` apart tile.
fn tiling_bounds() -> impl Strategy<Value = Vec<(u64, u64)>> {
    (2usize..30, 50u64..500).prop_flat_map(|(n, step)| {
        proptest::collection::vec(0..step, n).prop_map(move |extra| {
            extra
                .iter()
                .enumerate()
                .map(|(i, e)| {
                    let start = i as u64 * step;
                    (start, start + step + e)
                })
                .collect()
        })
    })
}

#[test]
fn test_cross_form_checksum_equivalence() {
    let store = store();
    assert_eq!(
        hash_scheme_bed(SCHEME_BED, &store).unwrap(),
        hash(&primer_records()).unwrap()
    );
}

#[test]
fn test_alternate_renaming_does_not_change_checksum() {
    let renamed = PRIMER_BED.replace("test-scheme_", "renamed_");
    let (_, records) = parse_bed_text(&renamed).unwrap();
    assert_eq!(hash(&records).unwrap(), hash(&primer_records()).unwrap());
}

proptest! {
    #[test]
    fn test_hash_ignores_order_case_and_whitespace(
        records in Just(primer_records()).prop_shuffle(),
        lower in proptest::collection::vec(any::<bool>(), 7),
        padded in proptest::collection::vec(any::<bool>(), 7),
    ) {
        let expected = hash(&primer_records()).unwrap();
        let variant: Vec<PrimerRecord> = records
            .into_iter()
            .zip(lower.iter().zip(&padded))
            .map(|(mut record, (&lower, &padded))| {
                let mut seq = record.sequence.take().unwrap();
                if lower {
                    seq = seq.to_lowercase();
                }
                if padded {
                    seq = format!(" {seq}\t");
                }
                record.with_sequence(seq)
            })
            .collect();
        prop_assert_eq!(hash(&variant).unwrap(), expected);
    }

    #[test]
    fn test_sequence_form_round_trip(
        records in Just(parse_records(SCHEME_BED, BedForm::Scheme).unwrap()).prop_shuffle(),
    ) {
        let resolved = to_sequence_form(&records, &store()).unwrap();
        prop_assert_eq!(to_coordinate_form(&resolved), records);
    }

    #[test]
    fn test_generated_tilings_pass(bounds in tiling_bounds()) {
        prop_assert_eq!(check_tiling(&bounds), Ok(()));
    }

    #[test]
    fn test_dropping_interior_amplicon_breaks_tiling(
        bounds in tiling_bounds().prop_filter("need an interior amplicon", |b| b.len() >= 3),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut bounds = bounds;
        let i = 1 + pick.index(bounds.len() - 2);
        bounds.remove(i);
        let is_missing_overlap = matches!(
            check_tiling(&bounds),
            Err(TilingError::MissingOverlap { .. })
        );
        prop_assert!(is_missing_overlap);
    }

    #[test]
    fn test_overlaps_symmetric(a in (0u64..1000, 0u64..1000), b in (0u64..1000, 0u64..1000)) {
        prop_assert_eq!(overlaps(a, b), overlaps(b, a));
    }
}
