use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::scheme::{build, build_recursive, ValidateOptions};

#[derive(Args)]
pub struct BuildArgs {
    /// Scheme directory containing primer.bed or scheme.bed and reference.fasta
    #[arg(required = true)]
    pub dir: PathBuf,

    /// Output directory for built bundles
    #[arg(short, long, default_value = "built")]
    pub out: PathBuf,

    /// Build every scheme directory below DIR
    #[arg(short, long)]
    pub recursive: bool,

    /// Fail on checksum mismatches instead of warning
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: BuildArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let options = ValidateOptions {
        strict: args.strict,
        ..ValidateOptions::default()
    };

    let results = if args.recursive {
        build_recursive(&args.dir, &args.out, &options)
    } else {
        vec![(args.dir.clone(), build(&args.dir, &args.out, &options))]
    };

    if verbose {
        let built = results.iter().filter(|(_, r)| r.is_ok()).count();
        eprintln!("Built {built} of {} scheme(s)", results.len());
    }

    let failures = results.iter().filter(|(_, r)| r.is_err()).count();
    match format {
        OutputFormat::Text => {
            for (dir, result) in &results {
                match result {
                    Ok(target) => println!("OK\t{}\t{}", dir.display(), target.display()),
                    Err(e) => println!("FAIL\t{}\t{e}", dir.display()),
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|(dir, result)| match result {
                    Ok(target) => json!({ "dir": dir, "ok": true, "bundle": target }),
                    Err(e) => json!({ "dir": dir, "ok": false, "error": e.to_string() }),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} scheme(s) failed to build", results.len());
    }
    Ok(())
}
