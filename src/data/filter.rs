use super::model::CaseDataset;

// ---------------------------------------------------------------------------
// Filter selection: gender + category dropdowns
// ---------------------------------------------------------------------------

/// One dropdown's selection: everything, or one specific value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Value(String),
}

impl Selection {
    /// Whether a record field passes this selection. A record with an
    /// absent field never matches a specific value.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            Selection::All => true,
            Selection::Value(wanted) => value == Some(wanted.as_str()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

/// The analyst's current filter choices. Starts at All/All; mutated only by
/// the UI, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub gender: Selection,
    pub category: Selection,
}

/// Return indices of records that pass both filters.
///
/// The result is a read-only re-sequencing of the dataset, not a copy: the
/// records themselves are untouched.
pub fn filtered_indices(dataset: &CaseDataset, selection: &FilterSelection) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.gender.matches(rec.gender.as_deref())
                && selection.category.matches(rec.category.as_deref())
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CaseRecord, RawCaseRecord};

    fn dataset() -> CaseDataset {
        let rows = [
            (Some("LK"), Some("5 Th"), Some("ISPA Ringan")),
            (Some("PR"), Some("6 Bl"), Some("ISPA Ringan")),
            (Some("LK"), Some("10 Th"), Some("ISPA Berat")),
            (None, None, None),
        ];
        let records = rows
            .into_iter()
            .map(|(gender, age, category)| {
                CaseRecord::normalize(RawCaseRecord {
                    gender: gender.map(String::from),
                    age_label: age.map(String::from),
                    category: category.map(String::from),
                    symptoms: None,
                })
            })
            .collect();
        CaseDataset::from_records(records)
    }

    #[test]
    fn all_all_is_the_identity_filter() {
        let ds = dataset();
        let indices = filtered_indices(&ds, &FilterSelection::default());
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn gender_and_category_filters_combine() {
        let ds = dataset();
        let selection = FilterSelection {
            gender: Selection::Value("LK".into()),
            category: Selection::Value("ISPA Berat".into()),
        };
        assert_eq!(filtered_indices(&ds, &selection), vec![2]);
    }

    #[test]
    fn absent_field_never_matches_a_specific_value() {
        let ds = dataset();
        let selection = FilterSelection {
            gender: Selection::Value("LK".into()),
            category: Selection::All,
        };
        assert_eq!(filtered_indices(&ds, &selection), vec![0, 2]);
    }

    #[test]
    fn unknown_gender_yields_an_empty_view() {
        let ds = dataset();
        let selection = FilterSelection {
            gender: Selection::Value("XX".into()),
            category: Selection::All,
        };
        assert!(filtered_indices(&ds, &selection).is_empty());
    }
}
