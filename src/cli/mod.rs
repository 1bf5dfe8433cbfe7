//! Command-line interface for primaschema.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **hash-bed** / **hash-ref**: Print primer or reference checksums
//! - **validate**: Validate one scheme directory, or all of them under a root
//! - **build**: Write validated scheme bundles with checksums recorded
//! - **sequence-bed** / **coordinate-bed**: Convert between BED forms
//! - **format-bed**: Reorder a BED file into display order
//! - **show-intervals**: Print the extent of every amplicon
//! - **diff**: Show primers present in only one of two BED files
//!
//! ## Usage
//!
//! ```text
//! # Checksum a primer.bed
//! primaschema hash-bed primer.bed
//!
//! # Checksum a scheme.bed, backfilling sequences from its reference
//! primaschema hash-bed scheme.bed --reference reference.fasta
//!
//! # Validate every scheme under a directory, failing on checksum mismatches
//! primaschema validate schemes/ --recursive --strict
//!
//! # JSON output for scripting
//! primaschema --format json validate artic-v4.1/
//! ```

use clap::{Parser, Subcommand};

pub mod build;
pub mod convert;
pub mod hash;
pub mod inspect;
pub mod validate;

#[derive(Parser)]
#[command(name = "primaschema")]
#[command(version)]
#[command(about = "Validate, checksum and convert tiled amplicon primer schemes")]
#[command(
    long_about = "primaschema checks that a primer scheme is structurally sound and gives it a stable checksum.\n\nSchemes are read from primer.bed (with sequences) or scheme.bed plus reference.fasta (without). The checksum is the same for both forms and does not depend on line order, whitespace or sequence case."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the primer checksum of a BED file
    HashBed(hash::HashBedArgs),

    /// Print the checksum of a reference FASTA
    HashRef(hash::HashRefArgs),

    /// Validate a scheme directory
    Validate(validate::ValidateArgs),

    /// Validate a scheme directory and write a bundle
    Build(build::BuildArgs),

    /// Convert scheme.bed to primer.bed using a reference
    SequenceBed(convert::SequenceBedArgs),

    /// Convert primer.bed to scheme.bed
    CoordinateBed(convert::CoordinateBedArgs),

    /// Reorder a BED file into display order
    FormatBed(convert::FormatBedArgs),

    /// Print the extent of every amplicon
    ShowIntervals(inspect::ShowIntervalsArgs),

    /// Show primers present in only one of two BED files
    Diff(inspect::DiffArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
