use std::collections::HashMap;

use serde::Serialize;

use crate::core::primer::PrimerRecord;

/// Primers sharing a chromosome and amplicon number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmpliconGroup {
    pub chrom: String,
    pub number: String,
    pub primers: Vec<PrimerRecord>,
}

impl AmpliconGroup {
    #[must_use]
    pub fn min_start(&self) -> u64 {
        self.primers.iter().map(|p| p.start).min().unwrap_or(0)
    }

    #[must_use]
    pub fn max_end(&self) -> u64 {
        self.primers.iter().map(|p| p.end).max().unwrap_or(0)
    }

    #[must_use]
    pub fn bounds(&self) -> (u64, u64) {
        (self.min_start(), self.max_end())
    }

    /// `{scheme}_{amplicon_number}` of the first member
    #[must_use]
    pub fn key(&self) -> &str {
        self.primers
            .first()
            .map_or(self.number.as_str(), |p| p.name.amplicon_key())
    }

    fn sort_key(&self) -> (u64, &str, u64) {
        // Non-numeric amplicon numbers sort after numeric ones
        let numeric = self.number.parse::<u64>().unwrap_or(u64::MAX);
        (numeric, self.number.as_str(), self.min_start())
    }
}

/// The amplicons of a single reference chromosome, in tiling order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromosomeScheme {
    pub chrom: String,
    pub amplicons: Vec<AmpliconGroup>,
}

impl ChromosomeScheme {
    #[must_use]
    pub fn bounds(&self) -> Vec<(u64, u64)> {
        self.amplicons.iter().map(AmpliconGroup::bounds).collect()
    }

    #[must_use]
    pub fn primer_count(&self) -> usize {
        self.amplicons.iter().map(|a| a.primers.len()).sum()
    }
}

/// Group primer records into per-chromosome amplicons.
///
/// Chromosomes keep their first-appearance order. Within a chromosome,
/// amplicons are ordered by amplicon number (numerically), tie-broken
/// by `min_start`. Primers keep their input order inside each group.
#[must_use]
pub fn group_amplicons(records: &[PrimerRecord]) -> Vec<ChromosomeScheme> {
    let mut schemes: Vec<ChromosomeScheme> = Vec::new();
    let mut chrom_index: HashMap<&str, usize> = HashMap::new();
    let mut group_index: HashMap<(&str, &str), usize> = HashMap::new();

    for record in records {
        let ci = *chrom_index.entry(record.chrom.as_str()).or_insert_with(|| {
            schemes.push(ChromosomeScheme {
                chrom: record.chrom.clone(),
                amplicons: Vec::new(),
            });
            schemes.len() - 1
        });

        let amplicons = &mut schemes[ci].amplicons;
        let gi = *group_index
            .entry((record.chrom.as_str(), record.amplicon_number()))
            .or_insert_with(|| {
                amplicons.push(AmpliconGroup {
                    chrom: record.chrom.clone(),
                    number: record.amplicon_number().to_string(),
                    primers: Vec::new(),
                });
                amplicons.len() - 1
            });
        amplicons[gi].primers.push(record.clone());
    }

    for scheme in &mut schemes {
        scheme
            .amplicons
            .sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
    }

    schemes
}

/// Extent of one amplicon on its reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmpliconInterval {
    pub chrom: String,
    pub start: u64,
    pub end: u64,
    pub key: String,
}

/// Compute the `(min_start, max_end)` extent of every amplicon, in tiling order.
#[must_use]
pub fn amplicon_intervals(records: &[PrimerRecord]) -> Vec<AmpliconInterval> {
    group_amplicons(records)
        .iter()
        .flat_map(|scheme| scheme.amplicons.iter())
        .map(|amplicon| AmpliconInterval {
            chrom: amplicon.chrom.clone(),
            start: amplicon.min_start(),
            end: amplicon.max_end(),
            key: amplicon.key().to_string(),
        })
        .collect()
}
