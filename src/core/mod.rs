//! Core data types for primer schemes.
//!
//! - [`PrimerRecord`](primer::PrimerRecord): one primer, with an optional sequence
//! - [`PrimerName`](primer::PrimerName): the structured
//!   `{scheme}_{amplicon}_{LEFT|RIGHT}_{alt}` name
//! - [`AmpliconGroup`](amplicon::AmpliconGroup): primers sharing a chromosome
//!   and amplicon number
//! - [`SequenceStore`](reference::SequenceStore): reference sequences by id
//! - [`Checksum`](types::Checksum): a `primaschema:`-prefixed SHA-256 digest
//!
//! ## Coordinates
//!
//! All intervals are zero-based and half-open, as in BED:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `start` | first base covered |
//! | `end` | one past the last base covered |
//!
//! A `-` strand primer's sequence is the reverse complement of
//! `reference[start..end]`.

pub mod amplicon;
pub mod primer;
pub mod reference;
pub mod types;
