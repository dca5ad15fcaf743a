use serde::Deserialize;

use super::age::parse_age;

// ---------------------------------------------------------------------------
// CaseRecord – one row of the source dataset
// ---------------------------------------------------------------------------

/// Fallback label for absent/empty gender or category values.
pub const FALLBACK_LABEL: &str = "Lainnya";

/// Fallback label for absent/empty age labels in the age-group chart.
pub const AGE_FALLBACK_LABEL: &str = "Tidak Terdefinisi";

/// One row as it appears in the input file. Field names are fixed by the
/// source format (Indonesian column headers); every field may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCaseRecord {
    #[serde(rename = "JK")]
    pub gender: Option<String>,
    #[serde(rename = "Usia")]
    pub age_label: Option<String>,
    #[serde(rename = "Kategori ISPA")]
    pub category: Option<String>,
    #[serde(rename = "Gejala")]
    pub symptoms: Option<String>,
}

/// A normalized case record.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseRecord {
    /// Expected `"LK"` or `"PR"`; anything else aggregates under
    /// [`FALLBACK_LABEL`].
    pub gender: Option<String>,
    /// Free-text label like `"5 Th"` or `"6 Bl"`; may be malformed.
    pub age_label: Option<String>,
    /// Severity category, e.g. `"ISPA Ringan"`.
    pub category: Option<String>,
    /// Free-text symptoms; carried but not aggregated.
    pub symptoms: Option<String>,
    /// Always 1 for a raw source row. Aggregation sums this field, which
    /// makes the totals equal to record counts.
    pub case_count: u64,
    /// Numeric sort key derived from `age_label`, see [`parse_age`].
    pub numeric_age: f64,
}

impl CaseRecord {
    /// Normalize a raw row: attach the unit case count and the derived
    /// numeric age.
    pub fn normalize(raw: RawCaseRecord) -> Self {
        let numeric_age = raw.age_label.as_deref().map(parse_age).unwrap_or(0.0);
        CaseRecord {
            gender: raw.gender,
            age_label: raw.age_label,
            category: raw.category,
            symptoms: raw.symptoms,
            case_count: 1,
            numeric_age,
        }
    }
}

// ---------------------------------------------------------------------------
// CaseDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full loaded dataset plus the filter option lists derived from it.
///
/// Immutable after load: no row is added, removed, or edited, and the option
/// lists are never narrowed by a filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseDataset {
    /// All case records, in file order.
    pub records: Vec<CaseRecord>,
    /// Distinct non-empty gender values, in first-seen order.
    pub genders: Vec<String>,
    /// Distinct non-empty category values, in first-seen order.
    pub categories: Vec<String>,
}

impl CaseDataset {
    /// Build the dataset and its filter option lists from normalized records.
    pub fn from_records(records: Vec<CaseRecord>) -> Self {
        let genders = distinct_first_seen(records.iter().map(|r| r.gender.as_deref()));
        let categories = distinct_first_seen(records.iter().map(|r| r.category.as_deref()));
        CaseDataset {
            records,
            genders,
            categories,
        }
    }

    /// Number of case records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset has zero records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Collect distinct non-empty values in the order they first appear.
fn distinct_first_seen<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for value in values.flatten() {
        if !value.is_empty() && !seen.iter().any(|s| s == value) {
            seen.push(value.to_string());
        }
    }
    seen
}
