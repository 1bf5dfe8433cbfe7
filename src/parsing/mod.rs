//! Parsers for primer scheme inputs.
//!
//! This module provides parsers for:
//!
//! - **BED files**: 6-column `scheme.bed` and 7-column `primer.bed` primer records
//! - **FASTA files**: reference sequences, optionally gzip/bgzip compressed
//! - **Scheme metadata**: `info.json` documents describing a scheme
//!
//! ## Example
//!
//! ```rust
//! use primaschema::parsing::bed::parse_bed_text;
//! use primaschema::BedForm;
//!
//! let bed = "MN908947.3\t25\t50\tSARS-CoV-2_1_LEFT_1\t1\t+\n\
//!            MN908947.3\t408\t431\tSARS-CoV-2_1_RIGHT_1\t1\t-\n";
//! let (form, records) = parse_bed_text(bed).unwrap();
//! assert_eq!(form, BedForm::Scheme);
//! assert_eq!(records[1].orientation(), "RIGHT");
//! ```
//!
//! ## BED Columns
//!
//! | Column | Field | Required |
//! |--------|-------|----------|
//! | 1 | chrom | Yes |
//! | 2 | chromStart | Yes |
//! | 3 | chromEnd | Yes |
//! | 4 | name (`{scheme}_{amplicon}_{LEFT|RIGHT}_{alt}`) | Yes |
//! | 5 | poolName | Yes |
//! | 6 | strand | Yes |
//! | 7 | sequence | primer.bed only |

use thiserror::Error;

pub mod bed;
pub mod fasta;
pub mod info;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Cannot infer BED type from {columns} columns (expected 6 or 7)")]
    AmbiguousFormat { columns: usize },

    #[error("Invalid primer name on line {line}: '{name}' (expected {{scheme}}_{{amplicon}}_{{LEFT|RIGHT}}_{{alt}})")]
    InvalidName { line: usize, name: String },

    #[error("Invalid strand on line {line}: '{strand}' (expected '+' or '-')")]
    InvalidStrand { line: usize, strand: String },

    #[error("Invalid coordinates on line {line}: {message}")]
    InvalidCoordinates { line: usize, message: String },

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed (100000)")]
    TooManyRecords(usize),
}
