//! Parser for reference FASTA files using noodles.
//!
//! Loads every record into a [`SequenceStore`], upper-casing residues.
//! Supports both uncompressed and gzip/bgzip compressed files.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use noodles::fasta;
use tracing::debug;

use crate::core::reference::{ReferenceSequence, SequenceStore};
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Load a FASTA file into a sequence store.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, `ParseError::Noodles` if
/// parsing fails, or `ParseError::InvalidFormat` if no sequences are found, a
/// residue is outside `{A, C, G, T, N}`, or an id is repeated.
pub fn load_fasta_file(path: &Path) -> Result<SequenceStore, ParseError> {
    let file = std::fs::File::open(path)?;
    let store = if is_gzipped(path) {
        let decoder = GzDecoder::new(file);
        parse_fasta_reader(BufReader::new(decoder))?
    } else {
        parse_fasta_reader(BufReader::new(file))?
    };

    debug!(
        "Loaded {} reference sequence(s) from {}",
        store.len(),
        path.display()
    );
    Ok(store)
}

/// Parse FASTA text into a sequence store.
///
/// # Errors
///
/// Returns the same errors as [`load_fasta_file`], except `ParseError::Io`.
pub fn parse_fasta_text(text: &str) -> Result<SequenceStore, ParseError> {
    parse_fasta_reader(text.as_bytes())
}

/// Parse from any buffered FASTA source
///
/// # Errors
///
/// Returns the same errors as [`load_fasta_file`].
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<SequenceStore, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut store = SequenceStore::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        if check_record_limit(store.len()).is_some() {
            return Err(ParseError::TooManyRecords(store.len()));
        }

        let name = String::from_utf8_lossy(record.name()).to_string();
        let residues = String::from_utf8_lossy(record.sequence().as_ref());

        let sequence = ReferenceSequence::new(name, &residues)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        store
            .insert(sequence)
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
    }

    if store.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA file".to_string(),
        ));
    }

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_fasta_file() {
        let fasta_content = b">chr1 description\nACGTACGT\nacgt\n>chr2\nGGGG\n";

        let mut temp = NamedTempFile::with_suffix(".fa").unwrap();
        temp.write_all(fasta_content).unwrap();
        temp.flush().unwrap();

        let store = load_fasta_file(temp.path()).unwrap();
        assert_eq!(store.len(), 2);
        let chr1 = store.get("chr1").unwrap();
        assert_eq!(chr1.length(), 12); // 8 + 4 bases
        assert_eq!(chr1.residues(), "ACGTACGTACGT");
        assert_eq!(store.length("chr2"), Some(4));
    }

    #[test]
    fn test_load_gzipped_fasta() {
        let temp = NamedTempFile::with_suffix(".fasta.gz").unwrap();
        let mut encoder = GzEncoder::new(temp.reopen().unwrap(), Compression::default());
        encoder.write_all(b">ref\nACGTN\n").unwrap();
        encoder.finish().unwrap();

        let store = load_fasta_file(temp.path()).unwrap();
        assert_eq!(store.get("ref").unwrap().residues(), "ACGTN");
    }

    #[test]
    fn test_parse_empty_fasta() {
        assert!(matches!(
            parse_fasta_text(""),
            Err(ParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_illegal_residue_rejected() {
        let result = parse_fasta_text(">chr1\nACGTRY\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(msg)) if msg.contains("'R'")));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = parse_fasta_text(">chr1\nACGT\n>chr1 again\nACGT\n");
        assert!(matches!(result, Err(ParseError::InvalidFormat(_))));
    }
}
