//! End-to-end tests of the `primaschema` binary against the fixture
//! schemes in `tests/data`.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

const PRIMER_CHECKSUM: &str =
    "primaschema:7a7ffaedb67078794339d3963b16f307810f48578a7c9816231a0396cbe7a043";
const REFERENCE_CHECKSUM: &str =
    "primaschema:c6a21235cfb0b661504c3b7a5419f50e22babaad4590f2b945f3bf95add2342d";

fn data(path: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data").join(path)
}

fn primaschema(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_primaschema"))
        .args(args)
        .output()
        .expect("Failed to run primaschema")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Fixture path is not UTF-8")
}

#[test]
fn test_hash_primer_bed() {
    let output = primaschema(&["hash-bed", path_arg(&data("valid/primer.bed"))]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), PRIMER_CHECKSUM);
}

#[test]
fn test_hash_scheme_bed_matches_primer_bed() {
    let output = primaschema(&[
        "hash-bed",
        path_arg(&data("valid/scheme.bed")),
        "--reference",
        path_arg(&data("valid/reference.fasta")),
    ]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), PRIMER_CHECKSUM);
}

#[test]
fn test_hash_scheme_bed_requires_reference() {
    let output = primaschema(&["hash-bed", path_arg(&data("valid/scheme.bed"))]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--reference"));
}

#[test]
fn test_hash_ref() {
    let output = primaschema(&["hash-ref", path_arg(&data("valid/reference.fasta"))]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), REFERENCE_CHECKSUM);
}

#[test]
fn test_hash_ref_json() {
    let output = primaschema(&[
        "--format",
        "json",
        "hash-ref",
        path_arg(&data("valid/reference.fasta")),
    ]);
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reference_checksum"], REFERENCE_CHECKSUM);
}

#[test]
fn test_validate_valid_scheme() {
    let output = primaschema(&["validate", "--strict", path_arg(&data("valid"))]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Amplicons: 3"));
    assert!(text.contains(PRIMER_CHECKSUM));
}

#[test]
fn test_validate_json_report() {
    let output = primaschema(&["--format", "json", "validate", path_arg(&data("valid"))]);
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["input_form"], "primer");
    assert_eq!(report["primer_count"], 7);
    assert_eq!(report["primer_checksum"], PRIMER_CHECKSUM);
    assert_eq!(report["warnings"].as_array().unwrap().len(), 0);
}

#[test]
fn test_validate_broken_schemes() {
    for (dir, message) in [
        ("broken/non-tiling", "overlaps non-adjacent amplicon"),
        ("broken/duplicated-primers", "Duplicate primer name"),
        ("broken/primer-bounds", "beyond the end of ref1"),
    ] {
        let output = primaschema(&["validate", path_arg(&data(dir))]);
        assert!(!output.status.success(), "{dir} should fail validation");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains(message), "{dir}: {stderr}");
    }
}

#[test]
fn test_checksum_mismatch_warns_unless_strict() {
    let dir = data("broken/checksum-mismatch");

    let output = primaschema(&["validate", path_arg(&dir)]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Warning: Calculated primer checksum"));

    let output = primaschema(&["validate", "--strict", path_arg(&dir)]);
    assert!(!output.status.success());

    let output = primaschema(&[
        "validate",
        "--strict",
        "--checksum",
        PRIMER_CHECKSUM,
        path_arg(&dir),
    ]);
    assert!(output.status.success());
}

#[test]
fn test_validate_recursive_reports_all() {
    let output = primaschema(&["validate", "--recursive", path_arg(&data(""))]);
    assert!(!output.status.success());

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines.iter().filter(|l| l.starts_with("OK")).count(), 2);
    assert_eq!(lines.iter().filter(|l| l.starts_with("FAIL")).count(), 3);
}

#[test]
fn test_build_bundle() {
    let out = TempDir::new().unwrap();
    let output = primaschema(&[
        "build",
        path_arg(&data("valid")),
        "--out",
        path_arg(out.path()),
    ]);
    assert!(output.status.success());

    let bundle = out.path().join("test-scheme-v1.0.0");
    for file in ["primer.bed", "scheme.bed", "reference.fasta", "info.json"] {
        assert!(bundle.join(file).is_file(), "missing {file}");
    }

    let output = primaschema(&["validate", "--strict", path_arg(&bundle)]);
    assert!(output.status.success());

    // A second build into the same directory must not overwrite
    let output = primaschema(&[
        "build",
        path_arg(&data("valid")),
        "--out",
        path_arg(out.path()),
    ]);
    assert!(!output.status.success());
}

#[test]
fn test_sequence_bed_round_trip() {
    let output = primaschema(&[
        "sequence-bed",
        path_arg(&data("valid/scheme.bed")),
        path_arg(&data("valid/reference.fasta")),
    ]);
    assert!(output.status.success());
    let expected = std::fs::read_to_string(data("valid/primer.bed")).unwrap();
    assert_eq!(stdout(&output), expected);

    let output = primaschema(&["coordinate-bed", path_arg(&data("valid/primer.bed"))]);
    assert!(output.status.success());
    let expected = std::fs::read_to_string(data("valid/scheme.bed")).unwrap();
    assert_eq!(stdout(&output), expected);
}

#[test]
fn test_coordinate_bed_rejects_scheme_bed() {
    let output = primaschema(&["coordinate-bed", path_arg(&data("valid/scheme.bed"))]);
    assert!(!output.status.success());
}

#[test]
fn test_format_bed() {
    let output = primaschema(&["format-bed", path_arg(&data("valid/primer.bed"))]);
    assert!(output.status.success());
    let names: Vec<String> = stdout(&output)
        .lines()
        .map(|l| l.split('\t').nth(3).unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "test-scheme_1_LEFT_1",
            "test-scheme_1_RIGHT_1",
            "test-scheme_2_LEFT_1",
            "test-scheme_2_LEFT_2",
            "test-scheme_2_RIGHT_1",
            "test-scheme_3_LEFT_1",
            "test-scheme_3_RIGHT_1",
        ]
    );
}

#[test]
fn test_show_intervals() {
    let output = primaschema(&["show-intervals", path_arg(&data("valid/primer.bed"))]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "ref1\t10\t140\ttest-scheme_1\n\
         ref1\t100\t230\ttest-scheme_2\n\
         ref1\t190\t290\ttest-scheme_3\n"
    );
}

#[test]
fn test_diff() {
    let output = primaschema(&[
        "diff",
        path_arg(&data("valid/primer.bed")),
        path_arg(&data("broken/non-tiling/primer.bed")),
    ]);
    assert!(output.status.success());
    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("A\tref1\t190\t210\ttest-scheme_3_LEFT_1"));
    assert!(lines[1].starts_with("B\tref1\t125\t145\ttest-scheme_3_LEFT_1"));
}
