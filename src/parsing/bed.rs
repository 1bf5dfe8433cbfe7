//! Parser and writer for primer scheme BED files.
//!
//! Records are tab-separated with no header. Blank lines and lines starting
//! with `#` are ignored. The chromosome is the token before the first
//! whitespace of column 1.

use std::path::Path;

use crate::core::primer::{BedForm, PrimerName, PrimerRecord, Strand};
use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

fn data_lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with('#'))
}

/// Infer the BED form from the column count of the first record.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if there are no records, or
/// `ParseError::AmbiguousFormat` if the first record has neither 6 nor 7 columns.
pub fn infer_form(text: &str) -> Result<BedForm, ParseError> {
    let (_, first) = data_lines(text)
        .next()
        .ok_or_else(|| ParseError::InvalidFormat("No primer records found".to_string()))?;
    let columns = first.split('\t').count();
    BedForm::from_field_count(columns).ok_or(ParseError::AmbiguousFormat { columns })
}

/// Parse BED text after inferring its form.
///
/// # Errors
///
/// Returns any error from [`infer_form`] or [`parse_records`].
pub fn parse_bed_text(text: &str) -> Result<(BedForm, Vec<PrimerRecord>), ParseError> {
    let form = infer_form(text)?;
    let records = parse_records(text, form)?;
    Ok((form, records))
}

/// Read and parse a BED file, inferring its form.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or any parse error.
pub fn parse_bed_file(path: &Path) -> Result<(BedForm, Vec<PrimerRecord>), ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_bed_text(&content)
}

/// Parse BED text strictly as the given form.
///
/// Every record must have exactly `form.field_count()` columns.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` for a wrong column count, empty chromosome,
/// unparsable pool, or an input with no records; `ParseError::InvalidCoordinates`
/// for unparsable or empty intervals; `ParseError::InvalidName` and
/// `ParseError::InvalidStrand` for malformed fields; or
/// `ParseError::TooManyRecords` if the limit is exceeded.
pub fn parse_records(text: &str, form: BedForm) -> Result<Vec<PrimerRecord>, ParseError> {
    let expected = form.field_count();
    let mut records = Vec::new();

    for (line_num, line) in data_lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != expected {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has {} fields, expected {expected}",
                fields.len()
            )));
        }

        let mut record = parse_coordinate_fields(&fields, line_num)?;
        if form == BedForm::Primer {
            record.sequence = Some(fields[6].trim().to_string());
        }

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }
        records.push(record);
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No primer records found".to_string(),
        ));
    }

    Ok(records)
}

/// Lenient parse used for interval computation.
///
/// Lines with fewer than 6 columns are skipped and any columns past the
/// sixth are ignored, so sequences are never populated.
///
/// # Errors
///
/// Returns the same field-level errors as [`parse_records`].
pub fn parse_interval_records(text: &str) -> Result<Vec<PrimerRecord>, ParseError> {
    let mut records = Vec::new();

    for (line_num, line) in data_lines(text) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < BedForm::Scheme.field_count() {
            continue;
        }

        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }
        records.push(parse_coordinate_fields(&fields, line_num)?);
    }

    Ok(records)
}

fn parse_coordinate_fields(fields: &[&str], line_num: usize) -> Result<PrimerRecord, ParseError> {
    let chrom = fields[0]
        .split_whitespace()
        .next()
        .ok_or_else(|| ParseError::InvalidFormat(format!("Empty chromosome on line {line_num}")))?;

    let start = parse_coordinate(fields[1], line_num)?;
    let end = parse_coordinate(fields[2], line_num)?;
    if end <= start {
        return Err(ParseError::InvalidCoordinates {
            line: line_num,
            message: format!("end ({end}) must be greater than start ({start})"),
        });
    }

    let raw_name = fields[3].trim();
    let name = PrimerName::parse(raw_name).ok_or_else(|| ParseError::InvalidName {
        line: line_num,
        name: raw_name.to_string(),
    })?;

    let pool: i64 = fields[4].trim().parse().map_err(|_| {
        ParseError::InvalidFormat(format!(
            "Invalid pool on line {line_num}: '{}'",
            fields[4]
        ))
    })?;

    let raw_strand = fields[5].trim();
    let strand = Strand::parse(raw_strand).ok_or_else(|| ParseError::InvalidStrand {
        line: line_num,
        strand: raw_strand.to_string(),
    })?;

    Ok(PrimerRecord::new(chrom, start, end, name, pool, strand))
}

fn parse_coordinate(field: &str, line_num: usize) -> Result<u64, ParseError> {
    field
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidCoordinates {
            line: line_num,
            message: format!("'{field}' is not a non-negative integer"),
        })
}

/// Serialize records as BED, one line per record in the given order.
///
/// Records carrying a sequence are written with 7 columns, others with 6.
#[must_use]
pub fn write_bed(records: &[PrimerRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&format!(
            "{}\t{}\t{}\t{}\t{}\t{}",
            record.chrom, record.start, record.end, record.name, record.pool, record.strand
        ));
        if let Some(sequence) = &record.sequence {
            out.push('\t');
            out.push_str(sequence);
        }
        out.push('\n');
    }
    out
}
