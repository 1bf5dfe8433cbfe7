use std::cmp::Ordering;

use crate::core::primer::PrimerRecord;

/// Ordering used for canonical output: `(start, end, pool, strand, sequence)`,
/// with the chromosome as a final tie-break.
#[must_use]
pub fn canonical_order(a: &PrimerRecord, b: &PrimerRecord) -> Ordering {
    a.start
        .cmp(&b.start)
        .then(a.end.cmp(&b.end))
        .then(a.pool.cmp(&b.pool))
        .then(a.strand.cmp(&b.strand))
        .then_with(|| a.sequence.cmp(&b.sequence))
        .then_with(|| a.chrom.cmp(&b.chrom))
}

/// True if two records are identical on every field that enters the checksum
#[must_use]
pub fn same_content(a: &PrimerRecord, b: &PrimerRecord) -> bool {
    a.chrom == b.chrom
        && a.start == b.start
        && a.end == b.end
        && a.pool == b.pool
        && a.strand == b.strand
        && a.sequence == b.sequence
}

/// Trim and upper-case a primer sequence
#[must_use]
pub fn normalize_sequence(sequence: &str) -> String {
    sequence.trim().to_ascii_uppercase()
}

/// Normalize a record set for hashing.
///
/// Sequences are trimmed and upper-cased, records are sorted with
/// [`canonical_order`], and records whose checksum fields are identical
/// collapse to the first one in sorted order.
#[must_use]
pub fn normalize(records: &[PrimerRecord]) -> Vec<PrimerRecord> {
    let mut normalized: Vec<PrimerRecord> = records
        .iter()
        .cloned()
        .map(|mut record| {
            record.chrom = record.chrom.trim().to_string();
            record.sequence = record.sequence.as_deref().map(normalize_sequence);
            record
        })
        .collect();

    normalized.sort_by(canonical_order);
    normalized.dedup_by(|later, earlier| same_content(later, earlier));
    normalized
}
