use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::canonical::{hash, hash_reference};
use crate::cli::OutputFormat;
use crate::convert::to_sequence_form;
use crate::core::primer::BedForm;
use crate::parsing::bed::parse_bed_file;
use crate::parsing::fasta::load_fasta_file;

#[derive(Args)]
pub struct HashBedArgs {
    /// primer.bed (7 columns) or scheme.bed (6 columns)
    #[arg(required = true)]
    pub bed: PathBuf,

    /// Reference FASTA used to backfill sequences of a scheme.bed
    #[arg(short, long)]
    pub reference: Option<PathBuf>,
}

#[derive(Args)]
pub struct HashRefArgs {
    /// Reference FASTA (optionally gzip compressed)
    #[arg(required = true)]
    pub fasta: PathBuf,
}

pub fn run_bed(args: HashBedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (form, records) = parse_bed_file(&args.bed)?;

    if verbose {
        eprintln!("Read {} primer records ({form})", records.len());
    }

    let records = match form {
        BedForm::Primer => records,
        BedForm::Scheme => {
            let reference = args.reference.as_ref().ok_or_else(|| {
                anyhow::anyhow!(
                    "{} has no sequence column; --reference is required",
                    args.bed.display()
                )
            })?;
            let store = load_fasta_file(reference)?;
            to_sequence_form(&records, &store)?
        }
    };

    let checksum = hash(&records)?;
    match format {
        OutputFormat::Text => println!("{checksum}"),
        OutputFormat::Json => {
            let output = json!({ "primer_checksum": checksum });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn run_ref(args: HashRefArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let store = load_fasta_file(&args.fasta)?;

    if verbose {
        eprintln!("Read {} reference sequence(s)", store.len());
    }

    let checksum = hash_reference(store.iter());
    match format {
        OutputFormat::Text => println!("{checksum}"),
        OutputFormat::Json => {
            let output = json!({ "reference_checksum": checksum });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
