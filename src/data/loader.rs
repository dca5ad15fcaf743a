use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{CaseDataset, CaseRecord, RawCaseRecord};

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Why a dataset failed to load. Transport failures (`Io`) are kept distinct
/// from parse failures so the UI can word its messages accordingly.
///
/// An empty-but-valid file is not an error: it loads into an empty
/// [`CaseDataset`] and the UI renders the empty-dataset state.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("tidak dapat membaca file: {0}")]
    Io(#[from] std::io::Error),
    #[error("dokumen bukan JSON yang valid: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dokumen JSON bukan array di tingkat atas")]
    NotAnArray,
    #[error("baris CSV tidak valid: {0}")]
    Csv(#[from] csv::Error),
    #[error("ekstensi file tidak didukung: .{0}")]
    UnsupportedExtension(String),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a case dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.json` – top-level array of record objects (the canonical format)
/// * `.csv`  – header row with the same column names (`JK`, `Usia`,
///   `Kategori ISPA`, `Gejala`)
pub fn load_file(path: &Path) -> Result<CaseDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema: a top-level array of row objects,
///
/// ```json
/// [
///   { "JK": "LK", "Usia": "5 Th", "Kategori ISPA": "ISPA Ringan", "Gejala": "batuk" },
///   ...
/// ]
/// ```
///
/// Unknown keys are ignored; every known field may be absent.
fn load_json(path: &Path) -> Result<CaseDataset, LoadError> {
    let text = std::fs::read_to_string(path)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    if !root.is_array() {
        return Err(LoadError::NotAnArray);
    }
    let raw: Vec<RawCaseRecord> = serde_json::from_value(root)?;

    Ok(normalize(raw))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row naming the columns; rows missing a column (or with
/// an empty cell) get `None` for that field.
fn load_csv(path: &Path) -> Result<CaseDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let gender_idx = headers.iter().position(|h| h == "JK");
    let age_idx = headers.iter().position(|h| h == "Usia");
    let category_idx = headers.iter().position(|h| h == "Kategori ISPA");
    let symptoms_idx = headers.iter().position(|h| h == "Gejala");

    let mut raw = Vec::new();
    for result in reader.records() {
        let record = result?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .filter(|s| !s.is_empty())
                .map(String::from)
        };
        raw.push(RawCaseRecord {
            gender: field(gender_idx),
            age_label: field(age_idx),
            category: field(category_idx),
            symptoms: field(symptoms_idx),
        });
    }

    Ok(normalize(raw))
}

/// Normalization pass: one case per row, derived numeric age.
fn normalize(raw: Vec<RawCaseRecord>) -> CaseDataset {
    CaseDataset::from_records(raw.into_iter().map(CaseRecord::normalize).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("ispa-dash-test-{name}"));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn loads_and_normalizes_json_records() {
        let path = temp_file(
            "ok.json",
            r#"[
                {"JK": "LK", "Usia": "5 Th", "Kategori ISPA": "ISPA Ringan", "Gejala": "batuk"},
                {"JK": "PR", "Usia": "6 Bl", "Kategori ISPA": "ISPA Ringan"},
                {"Usia": "10 Th"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(ds.records.iter().all(|r| r.case_count == 1));
        assert_eq!(ds.records[1].numeric_age, 0.06);
        assert_eq!(ds.records[2].gender, None);
        assert_eq!(ds.genders, vec!["LK", "PR"]);
        assert_eq!(ds.categories, vec!["ISPA Ringan"]);
    }

    #[test]
    fn empty_array_is_ok_but_empty() {
        let path = temp_file("empty.json", "[]");
        let ds = load_file(&path).unwrap();
        assert!(ds.is_empty());
    }

    #[test]
    fn non_array_top_level_is_a_parse_error() {
        let path = temp_file("notarray.json", r#"{"JK": "LK"}"#);
        assert!(matches!(load_file(&path), Err(LoadError::NotAnArray)));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let path = temp_file("invalid.json", "[{");
        assert!(matches!(load_file(&path), Err(LoadError::Json(_))));
    }

    #[test]
    fn missing_file_is_a_transport_error() {
        let path = std::env::temp_dir().join("ispa-dash-test-does-not-exist.json");
        assert!(matches!(load_file(&path), Err(LoadError::Io(_))));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let path = temp_file("data.parquet", "");
        assert!(matches!(
            load_file(&path),
            Err(LoadError::UnsupportedExtension(_))
        ));
    }

    #[test]
    fn loads_csv_with_missing_cells() {
        let path = temp_file(
            "ok.csv",
            "JK,Usia,Kategori ISPA,Gejala\nLK,5 Th,ISPA Ringan,batuk\nPR,,ISPA Berat,\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].age_label, None);
        assert_eq!(ds.records[1].numeric_age, 0.0);
        assert_eq!(ds.records[1].symptoms, None);
    }
}
