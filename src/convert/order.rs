use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::canonical::normalize::{canonical_order, normalize_sequence};
use crate::core::primer::PrimerRecord;

fn orientation_rank(orientation: &str) -> u8 {
    match orientation {
        "LEFT" => 0,
        "RIGHT" => 1,
        _ => 2,
    }
}

fn numeric(s: &str) -> u64 {
    s.parse().unwrap_or(u64::MAX)
}

/// Sort records into display order.
///
/// Chromosomes keep their first-appearance order; within a chromosome records
/// sort by amplicon number, LEFT before RIGHT, alternate index, then start.
/// This is the order most downstream tools expect.
#[must_use]
pub fn format_records(records: &[PrimerRecord]) -> Vec<PrimerRecord> {
    let mut chrom_rank: HashMap<&str, usize> = HashMap::new();
    for record in records {
        let next = chrom_rank.len();
        chrom_rank.entry(record.chrom.as_str()).or_insert(next);
    }

    let display_order = |a: &PrimerRecord, b: &PrimerRecord| -> Ordering {
        chrom_rank[a.chrom.as_str()]
            .cmp(&chrom_rank[b.chrom.as_str()])
            .then_with(|| numeric(a.amplicon_number()).cmp(&numeric(b.amplicon_number())))
            .then_with(|| a.amplicon_number().cmp(b.amplicon_number()))
            .then_with(|| orientation_rank(a.orientation()).cmp(&orientation_rank(b.orientation())))
            .then_with(|| a.orientation().cmp(b.orientation()))
            .then_with(|| numeric(a.name.alt_index()).cmp(&numeric(b.name.alt_index())))
            .then_with(|| a.name.alt_index().cmp(b.name.alt_index()))
            .then_with(|| a.start.cmp(&b.start))
            .then_with(|| a.end.cmp(&b.end))
    };

    let mut sorted = records.to_vec();
    sorted.sort_by(display_order);
    sorted
}

/// Which input a differing record came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiffSide {
    A,
    B,
}

impl std::fmt::Display for DiffSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// A record present in only one of two schemes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffEntry {
    pub side: DiffSide,
    pub record: PrimerRecord,
}

fn normalized_set(records: &[PrimerRecord]) -> Vec<PrimerRecord> {
    let mut normalized: Vec<PrimerRecord> = records
        .iter()
        .cloned()
        .map(|mut record| {
            record.sequence = record.sequence.as_deref().map(normalize_sequence);
            record
        })
        .collect();
    normalized.sort_by(|a, b| canonical_order(a, b).then_with(|| a.name.cmp(&b.name)));
    normalized.dedup();
    normalized
}

/// Records of `a` missing from `b` followed by records of `b` missing from `a`.
///
/// Records are compared on every field, including the name, after sequence
/// normalization. Each side is reported in canonical order.
#[must_use]
pub fn diff(a: &[PrimerRecord], b: &[PrimerRecord]) -> Vec<DiffEntry> {
    let a = normalized_set(a);
    let b = normalized_set(b);
    let in_a: HashSet<&PrimerRecord> = a.iter().collect();
    let in_b: HashSet<&PrimerRecord> = b.iter().collect();

    let only_a = a
        .iter()
        .filter(|r| !in_b.contains(r))
        .map(|r| DiffEntry {
            side: DiffSide::A,
            record: r.clone(),
        });
    let only_b = b
        .iter()
        .filter(|r| !in_a.contains(r))
        .map(|r| DiffEntry {
            side: DiffSide::B,
            record: r.clone(),
        });

    only_a.chain(only_b).collect()
}
