use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::canonical::normalize::normalize;
use crate::core::primer::PrimerRecord;
use crate::core::reference::ReferenceSequence;
use crate::core::types::Checksum;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    #[error("Illegal character '{character}' in sequence of primer {name} ({chrom}:{start}-{end}); only A, C, G and T are allowed")]
    IllegalCharacter {
        name: String,
        chrom: String,
        start: u64,
        end: u64,
        character: char,
    },

    #[error("Primer {name} ({chrom}:{start}-{end}) has no sequence; backfill it from the reference first")]
    MissingSequence {
        name: String,
        chrom: String,
        start: u64,
        end: u64,
    },
}

/// Render the canonical checksum text for a record set.
///
/// One line per normalized record: `chrom, start, end, pool, strand, sequence`
/// separated by tabs, each line terminated by `\n`, no header.
///
/// # Errors
///
/// Returns `ChecksumError::MissingSequence` if a record has no (or an empty)
/// sequence, or `ChecksumError::IllegalCharacter` if a normalized sequence
/// contains anything other than `A`, `C`, `G` or `T`.
pub fn canonical_text(records: &[PrimerRecord]) -> Result<String, ChecksumError> {
    let mut text = String::new();

    for record in normalize(records) {
        let sequence = match record.sequence.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => {
                return Err(ChecksumError::MissingSequence {
                    name: record.name.to_string(),
                    chrom: record.chrom.clone(),
                    start: record.start,
                    end: record.end,
                })
            }
        };

        if let Some(character) = sequence
            .chars()
            .find(|c| !matches!(c, 'A' | 'C' | 'G' | 'T'))
        {
            return Err(ChecksumError::IllegalCharacter {
                name: record.name.to_string(),
                chrom: record.chrom.clone(),
                start: record.start,
                end: record.end,
                character,
            });
        }

        text.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}\n",
            record.chrom, record.start, record.end, record.pool, record.strand, sequence
        ));
    }

    Ok(text)
}

fn sha256_checksum(bytes: &[u8]) -> Checksum {
    let digest = Sha256::digest(bytes);
    Checksum::from_hex_digest(&format!("{digest:x}"))
}

/// Compute the primer checksum of a record set.
///
/// The result is independent of input order, surrounding whitespace and
/// sequence letter case.
///
/// # Errors
///
/// Returns any error from [`canonical_text`].
pub fn hash(records: &[PrimerRecord]) -> Result<Checksum, ChecksumError> {
    let text = canonical_text(records)?;
    Ok(sha256_checksum(text.as_bytes()))
}

/// Compute the checksum of a set of reference sequences.
///
/// Sequences are sorted by id and serialized as `>id\nresidues\n`, with
/// trailing whitespace stripped from the concatenation.
pub fn hash_reference<'a>(sequences: impl IntoIterator<Item = &'a ReferenceSequence>) -> Checksum {
    let mut sorted: Vec<&ReferenceSequence> = sequences.into_iter().collect();
    sorted.sort_by(|a, b| a.id.cmp(&b.id));

    let mut text = String::new();
    for sequence in sorted {
        text.push('>');
        text.push_str(&sequence.id);
        text.push('\n');
        text.push_str(sequence.residues());
        text.push('\n');
    }

    sha256_checksum(text.trim_end().as_bytes())
}
