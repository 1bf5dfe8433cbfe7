use std::collections::BTreeMap;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Reference chromosome '{0}' not found")]
    UnknownChromosome(String),

    #[error("Range {start}..{end} is outside '{chrom}' (length {length})")]
    Range {
        chrom: String,
        start: u64,
        end: u64,
        length: u64,
    },

    #[error("Illegal residue '{residue}' at position {position} of '{chrom}'")]
    IllegalResidue {
        chrom: String,
        position: usize,
        residue: char,
    },

    #[error("Duplicate reference sequence '{0}'")]
    DuplicateId(String),
}

/// A named reference sequence, upper-cased on construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceSequence {
    pub id: String,
    residues: String,
}

impl ReferenceSequence {
    /// Create a reference sequence, upper-casing its residues.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::IllegalResidue` if any residue is outside
    /// `{A, C, G, T, N}` after upper-casing.
    pub fn new(id: impl Into<String>, residues: &str) -> Result<Self, SequenceError> {
        let id = id.into();
        let residues = residues.to_ascii_uppercase();

        if let Some((position, residue)) = residues
            .char_indices()
            .find(|(_, c)| !matches!(c, 'A' | 'C' | 'G' | 'T' | 'N'))
        {
            return Err(SequenceError::IllegalResidue {
                chrom: id,
                position,
                residue,
            });
        }

        Ok(Self { id, residues })
    }

    #[must_use]
    pub fn residues(&self) -> &str {
        &self.residues
    }

    #[must_use]
    pub fn length(&self) -> u64 {
        self.residues.len() as u64
    }
}

/// Complement a single upper-case base. `N` maps to itself.
#[must_use]
pub fn complement(base: char) -> char {
    match base {
        'A' => 'T',
        'T' => 'A',
        'C' => 'G',
        'G' => 'C',
        other => other,
    }
}

#[must_use]
pub fn reverse_complement(sequence: &str) -> String {
    sequence.chars().rev().map(complement).collect()
}

/// Immutable set of reference sequences keyed by id
#[derive(Debug, Clone, Default)]
pub struct SequenceStore {
    sequences: BTreeMap<String, ReferenceSequence>,
}

impl SequenceStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-validated sequences.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::DuplicateId` if two sequences share an id.
    pub fn from_sequences(
        sequences: impl IntoIterator<Item = ReferenceSequence>,
    ) -> Result<Self, SequenceError> {
        let mut store = Self::new();
        for sequence in sequences {
            store.insert(sequence)?;
        }
        Ok(store)
    }

    /// # Errors
    ///
    /// Returns `SequenceError::DuplicateId` if the id is already present.
    pub fn insert(&mut self, sequence: ReferenceSequence) -> Result<(), SequenceError> {
        if self.sequences.contains_key(&sequence.id) {
            return Err(SequenceError::DuplicateId(sequence.id));
        }
        self.sequences.insert(sequence.id.clone(), sequence);
        Ok(())
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ReferenceSequence> {
        self.sequences.get(id)
    }

    #[must_use]
    pub fn length(&self, id: &str) -> Option<u64> {
        self.get(id).map(ReferenceSequence::length)
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.sequences.contains_key(id)
    }

    /// Sequences in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &ReferenceSequence> {
        self.sequences.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Residues of `[start, end)` on `id`.
    ///
    /// # Errors
    ///
    /// Returns `SequenceError::UnknownChromosome` if `id` is not loaded, or
    /// `SequenceError::Range` if `end` exceeds the sequence length or
    /// `start > end`.
    pub fn substring(&self, id: &str, start: u64, end: u64) -> Result<&str, SequenceError> {
        let sequence = self
            .get(id)
            .ok_or_else(|| SequenceError::UnknownChromosome(id.to_string()))?;
        let length = sequence.length();

        if end > length || start > end {
            return Err(SequenceError::Range {
                chrom: id.to_string(),
                start,
                end,
                length,
            });
        }

        // Residues are ASCII so byte offsets are character offsets
        Ok(&sequence.residues[start as usize..end as usize])
    }

    /// Reverse complement of `[start, end)` on `id`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`SequenceStore::substring`].
    pub fn reverse_complement_substring(
        &self,
        id: &str,
        start: u64,
        end: u64,
    ) -> Result<String, SequenceError> {
        self.substring(id, start, end).map(reverse_complement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> SequenceStore {
        SequenceStore::from_sequences([
            ReferenceSequence::new("chr1", "acgtAAccGGtt").unwrap(),
            ReferenceSequence::new("chr2", "NNNNACGT").unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn test_residues_uppercased() {
        let store = store();
        assert_eq!(store.get("chr1").unwrap().residues(), "ACGTAACCGGTT");
        assert_eq!(store.length("chr1"), Some(12));
    }

    #[test]
    fn test_illegal_residue() {
        let err = ReferenceSequence::new("chr1", "ACGU").unwrap_err();
        assert_eq!(
            err,
            SequenceError::IllegalResidue {
                chrom: "chr1".to_string(),
                position: 3,
                residue: 'U'
            }
        );
    }

    #[test]
    fn test_n_permitted_in_reference() {
        let store = store();
        assert_eq!(store.substring("chr2", 0, 4).unwrap(), "NNNN");
    }

    #[test]
    fn test_substring() {
        let store = store();
        assert_eq!(store.substring("chr1", 0, 4).unwrap(), "ACGT");
        assert_eq!(store.substring("chr1", 8, 12).unwrap(), "GGTT");
        assert_eq!(store.substring("chr1", 12, 12).unwrap(), "");
    }

    #[test]
    fn test_reverse_complement_substring() {
        let store = store();
        // AACC -> GGTT
        assert_eq!(store.reverse_complement_substring("chr1", 4, 8).unwrap(), "GGTT");
        assert_eq!(reverse_complement("ACGTN"), "NACGT");
    }

    #[test]
    fn test_substring_out_of_range() {
        let store = store();
        assert!(matches!(
            store.substring("chr1", 10, 13),
            Err(SequenceError::Range { length: 12, .. })
        ));
        assert!(matches!(
            store.reverse_complement_substring("chr1", 10, 13),
            Err(SequenceError::Range { .. })
        ));
    }

    #[test]
    fn test_unknown_chromosome() {
        let store = store();
        assert_eq!(
            store.substring("chrX", 0, 1).unwrap_err(),
            SequenceError::UnknownChromosome("chrX".to_string())
        );
    }

    #[test]
    fn test_duplicate_id() {
        let result = SequenceStore::from_sequences([
            ReferenceSequence::new("chr1", "ACGT").unwrap(),
            ReferenceSequence::new("chr1", "ACGT").unwrap(),
        ]);
        assert_eq!(
            result.unwrap_err(),
            SequenceError::DuplicateId("chr1".to_string())
        );
    }

    #[test]
    fn test_iter_sorted_by_id() {
        let store = SequenceStore::from_sequences([
            ReferenceSequence::new("b", "A").unwrap(),
            ReferenceSequence::new("a", "C").unwrap(),
        ])
        .unwrap();
        let ids: Vec<&str> = store.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
