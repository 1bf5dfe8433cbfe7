use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::convert::{format_records, to_coordinate_form, to_sequence_form};
use crate::core::primer::{BedForm, PrimerRecord};
use crate::parsing::bed::{parse_bed_file, write_bed};
use crate::parsing::fasta::load_fasta_file;

#[derive(Args)]
pub struct SequenceBedArgs {
    /// scheme.bed (6 columns)
    #[arg(required = true)]
    pub bed: PathBuf,

    /// Reference FASTA the coordinates refer to
    #[arg(required = true)]
    pub reference: PathBuf,
}

#[derive(Args)]
pub struct CoordinateBedArgs {
    /// primer.bed (7 columns)
    #[arg(required = true)]
    pub bed: PathBuf,
}

#[derive(Args)]
pub struct FormatBedArgs {
    /// primer.bed or scheme.bed
    #[arg(required = true)]
    pub bed: PathBuf,
}

fn print_records(records: &[PrimerRecord], format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", write_bed(records)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(records)?),
    }
    Ok(())
}

pub fn run_sequence(args: SequenceBedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (form, records) = parse_bed_file(&args.bed)?;
    if form != BedForm::Scheme {
        anyhow::bail!("{} is not a 6-column scheme.bed", args.bed.display());
    }

    let store = load_fasta_file(&args.reference)?;
    if verbose {
        eprintln!(
            "Backfilling {} primers from {} reference sequence(s)",
            records.len(),
            store.len()
        );
    }

    print_records(&to_sequence_form(&records, &store)?, format)
}

pub fn run_coordinate(args: CoordinateBedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (form, records) = parse_bed_file(&args.bed)?;
    if form != BedForm::Primer {
        anyhow::bail!("{} is not a 7-column primer.bed", args.bed.display());
    }
    if verbose {
        eprintln!("Dropping sequences from {} primers", records.len());
    }

    print_records(&to_coordinate_form(&records), format)
}

pub fn run_format(args: FormatBedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (form, records) = parse_bed_file(&args.bed)?;
    if verbose {
        eprintln!("Reordering {} primers ({form})", records.len());
    }

    print_records(&format_records(&records), format)
}
