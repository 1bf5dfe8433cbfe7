use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::core::types::Checksum;
use crate::scheme::{validate_dir, validate_recursive, ValidateOptions, ValidationReport};

#[derive(Args)]
pub struct ValidateArgs {
    /// Scheme directory containing primer.bed or scheme.bed and reference.fasta
    #[arg(required = true)]
    pub dir: PathBuf,

    /// Validate every scheme directory below DIR
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail on checksum mismatches instead of warning
    #[arg(long)]
    pub strict: bool,

    /// Expected primer checksum, overriding info.json
    #[arg(long)]
    pub checksum: Option<Checksum>,
}

fn print_report(report: &ValidationReport) {
    if let Some(source) = &report.source {
        println!("Scheme:    {}", source.display());
    }
    println!("Form:      {}", report.input_form);
    println!("Primers:   {}", report.primer_count);
    println!("Amplicons: {}", report.amplicon_count());
    for chrom in &report.chromosomes {
        println!(
            "  {}: {} amplicons, {} primers",
            chrom.chrom, chrom.amplicon_count, chrom.primer_count
        );
    }
    println!("Primer checksum:    {}", report.primer_checksum);
    println!("Reference checksum: {}", report.reference_checksum);
    for warning in &report.warnings {
        println!("Warning: {warning}");
    }
}

pub fn run(args: ValidateArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = ValidateOptions {
        strict: args.strict,
        expected_checksum: args.checksum,
        expected_reference_checksum: None,
    };

    if !args.recursive {
        let report = validate_dir(&args.dir, &options)?;
        match format {
            OutputFormat::Text => print_report(&report),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        }
        return Ok(());
    }

    let results = validate_recursive(&args.dir, &options);
    if verbose {
        eprintln!("Validated {} scheme(s)", results.len());
    }

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();
    match format {
        OutputFormat::Text => {
            for (dir, result) in &results {
                match result {
                    Ok(report) => println!("OK\t{}\t{}", dir.display(), report.primer_checksum),
                    Err(e) => println!("FAIL\t{}\t{e}", dir.display()),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|(dir, result)| match result {
                    Ok(report) => json!({ "dir": dir, "ok": true, "report": report }),
                    Err(e) => json!({ "dir": dir, "ok": false, "error": e.to_string() }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} scheme(s) failed validation", results.len());
    }
    Ok(())
}
