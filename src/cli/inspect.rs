use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::convert::diff;
use crate::core::amplicon::amplicon_intervals;
use crate::parsing::bed::{parse_bed_file, parse_interval_records, write_bed};

#[derive(Args)]
pub struct ShowIntervalsArgs {
    /// primer.bed or scheme.bed
    #[arg(required = true)]
    pub bed: PathBuf,
}

#[derive(Args)]
pub struct DiffArgs {
    /// First BED file (side A)
    #[arg(required = true)]
    pub bed_a: PathBuf,

    /// Second BED file (side B)
    #[arg(required = true)]
    pub bed_b: PathBuf,
}

pub fn run_intervals(args: ShowIntervalsArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.bed)?;
    let records = parse_interval_records(&text)?;
    let intervals = amplicon_intervals(&records);

    if verbose {
        eprintln!("{} amplicons from {} primers", intervals.len(), records.len());
    }

    match format {
        OutputFormat::Text => {
            for interval in &intervals {
                println!(
                    "{}\t{}\t{}\t{}",
                    interval.chrom, interval.start, interval.end, interval.key
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&intervals)?),
    }
    Ok(())
}

pub fn run_diff(args: DiffArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let (_, a) = parse_bed_file(&args.bed_a)?;
    let (_, b) = parse_bed_file(&args.bed_b)?;
    let entries = diff(&a, &b);

    if verbose {
        eprintln!(
            "{} primers differ ({} in A, {} in B)",
            entries.len(),
            a.len(),
            b.len()
        );
    }

    match format {
        OutputFormat::Text => {
            for entry in &entries {
                print!("{}\t{}", entry.side, write_bed(std::slice::from_ref(&entry.record)));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&entries)?),
    }
    Ok(())
}
