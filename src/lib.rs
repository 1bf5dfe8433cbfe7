//! # primaschema
//!
//! A library for validating, checksumming and converting tiled amplicon
//! primer schemes.
//!
//! A primer scheme is a set of primer pairs that amplify overlapping regions
//! of a reference genome. Schemes are distributed as BED files, either with
//! primer sequences (`primer.bed`, 7 columns) or without (`scheme.bed`,
//! 6 columns, resolved against a reference FASTA). The same scheme is often
//! copied, reformatted and re-derived; `primaschema` gives it a stable
//! checksum and checks that it is structurally sound.
//!
//! ## Features
//!
//! - **Canonical checksums**: independent of line order, whitespace and sequence case
//! - **Cross-form equivalence**: `scheme.bed` plus reference hashes like `primer.bed`
//! - **Tiling validation**: each amplicon overlaps exactly its neighbours
//! - **Companion checks**: duplicate names, reference bounds, incomplete amplicons
//! - **Bundles**: validated scheme directories with recorded checksums
//!
//! ## Example
//!
//! ```rust
//! use primaschema::parsing::bed::parse_bed_text;
//! use primaschema::{check_invariants, hash};
//!
//! let bed = "X\t100\t120\tS_1_LEFT_1\t1\t+\tACGTACGT\n\
//!            X\t200\t220\tS_1_RIGHT_1\t1\t-\tTTGGCCAA\n\
//!            X\t180\t200\tS_2_LEFT_1\t2\t+\tGGCCGGCC\n\
//!            X\t300\t320\tS_2_RIGHT_1\t2\t-\tCATGCATG\n";
//!
//! let (_, records) = parse_bed_text(bed).unwrap();
//! let schemes = check_invariants(&records, None).unwrap();
//! assert_eq!(schemes[0].amplicons.len(), 2);
//!
//! let checksum = hash(&records).unwrap();
//! assert!(checksum.as_str().starts_with("primaschema:"));
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Primer records, amplicons, reference sequences, checksums
//! - [`parsing`]: BED, FASTA and `info.json` readers
//! - [`canonical`]: Normalization and checksum computation
//! - [`tiling`]: Tiling and companion structural checks
//! - [`convert`]: Coordinate/sequence form conversion, display order, diff
//! - [`scheme`]: Validation pipeline and scheme bundles
//! - [`cli`]: Command-line interface implementation

pub mod canonical;
pub mod cli;
pub mod convert;
pub mod core;
pub mod parsing;
pub mod scheme;
pub mod tiling;
pub mod utils;

// Re-export commonly used types for convenience
pub use canonical::{hash, hash_reference, normalize};
pub use convert::{convert, diff, format_records, to_coordinate_form, to_sequence_form};
pub use core::amplicon::{amplicon_intervals, group_amplicons, AmpliconGroup, ChromosomeScheme};
pub use core::primer::{BedForm, PrimerName, PrimerRecord, Strand};
pub use core::reference::{ReferenceSequence, SequenceStore};
pub use core::types::*;
pub use scheme::{validate_dir, validate_scheme, SchemeError, ValidateOptions, ValidationReport};
pub use tiling::{check_invariants, check_tiling};
