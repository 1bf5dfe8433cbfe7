use serde::{Serialize, Serializer};

/// Strand a primer anneals to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Strand {
    /// Parse a BED strand field. Only `+` and `-` are accepted.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Forward),
            "-" => Some(Self::Reverse),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "+",
            Self::Reverse => "-",
        }
    }
}

impl std::fmt::Display for Strand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout of a primer BED file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BedForm {
    /// 6 columns, coordinates only (`scheme.bed`)
    Scheme,
    /// 7 columns, trailing primer sequence (`primer.bed`)
    Primer,
}

impl BedForm {
    #[must_use]
    pub fn field_count(self) -> usize {
        match self {
            Self::Scheme => 6,
            Self::Primer => 7,
        }
    }

    #[must_use]
    pub fn from_field_count(count: usize) -> Option<Self> {
        match count {
            6 => Some(Self::Scheme),
            7 => Some(Self::Primer),
            _ => None,
        }
    }
}

impl std::fmt::Display for BedForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scheme => write!(f, "scheme.bed (6 columns)"),
            Self::Primer => write!(f, "primer.bed (7 columns)"),
        }
    }
}

/// A primer name of the form `{scheme}_{amplicon_number}_{LEFT|RIGHT}_{alt_index}`
///
/// The name is stored verbatim along with the positions of its three
/// underscores, so component accessors are plain slices.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrimerName {
    raw: String,
    separators: [usize; 3],
}

impl PrimerName {
    /// Returns `None` unless the name has exactly four underscore-delimited parts.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let separators: Vec<usize> = raw.match_indices('_').map(|(i, _)| i).collect();
        let separators: [usize; 3] = separators.try_into().ok()?;
        Some(Self { raw, separators })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.raw[..self.separators[0]]
    }

    #[must_use]
    pub fn amplicon_number(&self) -> &str {
        &self.raw[self.separators[0] + 1..self.separators[1]]
    }

    /// `LEFT` or `RIGHT` in well-formed schemes
    #[must_use]
    pub fn orientation(&self) -> &str {
        &self.raw[self.separators[1] + 1..self.separators[2]]
    }

    #[must_use]
    pub fn alt_index(&self) -> &str {
        &self.raw[self.separators[2] + 1..]
    }

    /// `{scheme}_{amplicon_number}`, e.g. `SARS-CoV-2_99`
    #[must_use]
    pub fn amplicon_key(&self) -> &str {
        &self.raw[..self.separators[1]]
    }
}

impl std::fmt::Display for PrimerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for PrimerName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

/// A single primer BED record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PrimerRecord {
    /// Reference sequence identifier
    pub chrom: String,

    /// Zero-based start (inclusive)
    pub start: u64,

    /// Zero-based end (exclusive)
    pub end: u64,

    pub name: PrimerName,

    /// Pool the primer belongs to
    pub pool: i64,

    pub strand: Strand,

    /// Primer sequence, present only in the 7-column form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

impl PrimerRecord {
    pub fn new(
        chrom: impl Into<String>,
        start: u64,
        end: u64,
        name: PrimerName,
        pool: i64,
        strand: Strand,
    ) -> Self {
        Self {
            chrom: chrom.into(),
            start,
            end,
            name,
            pool,
            strand,
            sequence: None,
        }
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = Some(sequence.into());
        self
    }

    #[must_use]
    pub fn amplicon_number(&self) -> &str {
        self.name.amplicon_number()
    }

    #[must_use]
    pub fn orientation(&self) -> &str {
        self.name.orientation()
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primer_name_components() {
        let name = PrimerName::parse("SARS-CoV-2_1_LEFT_1").unwrap();
        assert_eq!(name.scheme(), "SARS-CoV-2");
        assert_eq!(name.amplicon_number(), "1");
        assert_eq!(name.orientation(), "LEFT");
        assert_eq!(name.alt_index(), "1");
        assert_eq!(name.amplicon_key(), "SARS-CoV-2_1");
        assert_eq!(name.to_string(), "SARS-CoV-2_1_LEFT_1");
    }

    #[test]
    fn test_primer_name_wrong_part_count() {
        assert!(PrimerName::parse("bad_name").is_none());
        assert!(PrimerName::parse("S_1_LEFT").is_none());
        assert!(PrimerName::parse("S_1_LEFT_1_alt").is_none());
        assert!(PrimerName::parse("").is_none());
    }

    #[test]
    fn test_strand_parse() {
        assert_eq!(Strand::parse("+"), Some(Strand::Forward));
        assert_eq!(Strand::parse("-"), Some(Strand::Reverse));
        assert_eq!(Strand::parse("."), None);
        assert_eq!(Strand::parse("++"), None);
        // Forward sorts first, matching the byte order of '+' and '-'
        assert!(Strand::Forward < Strand::Reverse);
    }

    #[test]
    fn test_bed_form_field_count() {
        assert_eq!(BedForm::from_field_count(6), Some(BedForm::Scheme));
        assert_eq!(BedForm::from_field_count(7), Some(BedForm::Primer));
        assert_eq!(BedForm::from_field_count(5), None);
        assert_eq!(BedForm::Primer.field_count(), 7);
    }

    #[test]
    fn test_record_accessors() {
        let name = PrimerName::parse("S_12_RIGHT_2").unwrap();
        let record = PrimerRecord::new("X", 200, 220, name, 1, Strand::Reverse);
        assert_eq!(record.amplicon_number(), "12");
        assert_eq!(record.orientation(), "RIGHT");
        assert_eq!(record.len(), 20);
        assert!(record.sequence.is_none());
        assert_eq!(record.with_sequence("TTTT").sequence.as_deref(), Some("TTTT"));
    }
}
