//! Canonical normalization and checksums.
//!
//! A primer checksum identifies the primer content of a scheme regardless
//! of how it is presented:
//!
//! 1. Sequences are trimmed and upper-cased
//! 2. Records are sorted by `(start, end, pool, strand, sequence, chrom)`
//! 3. Records identical on those fields are collapsed
//! 4. Each record is rendered as `chrom\tstart\tend\tpool\tstrand\tsequence\n`
//! 5. The SHA-256 of that text is prefixed with `primaschema:`
//!
//! Primer names are not part of the checksum, so renaming alternates or
//! redistributing a scheme as `scheme.bed` plus reference yields the same value.

pub mod checksum;
pub mod normalize;

pub use checksum::{canonical_text, hash, hash_reference, ChecksumError};
pub use normalize::normalize;
