use std::path::Path;

use crate::chart::{self, ChartSet, ChartSlot};
use crate::data::aggregate;
use crate::data::filter::{filtered_indices, FilterSelection, Selection};
use crate::data::loader;
use crate::data::model::CaseDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full session state, independent of rendering.
///
/// The dataset is written exactly once per load; the filter selection is the
/// only value the UI mutates afterwards.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<CaseDataset>,

    /// Current gender/category filter choices.
    pub selection: FilterSelection,

    /// Indices of records passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// The three chart handles, replaced atomically on every redraw.
    pub charts: ChartSet,

    /// Load failure message shown in place of the charts.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            charts: ChartSet::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Load a dataset file, replacing the session on success. A failed load
    /// is terminal for the current session: the charts are cleared and the
    /// failure message takes their place.
    pub fn load_from_path(&mut self, path: &Path) {
        match loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "loaded {} case records from {} ({} genders, {} categories)",
                    dataset.len(),
                    path.display(),
                    dataset.genders.len(),
                    dataset.categories.len()
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("failed to load {}: {e}", path.display());
                self.dataset = None;
                self.visible_indices.clear();
                self.charts.clear();
                self.status_message = Some(format!("Gagal memuat file JSON. {e}"));
            }
        }
    }

    /// Ingest a newly loaded dataset and draw the initial (unfiltered) charts.
    pub fn set_dataset(&mut self, dataset: CaseDataset) {
        self.selection = FilterSelection::default();
        self.dataset = Some(dataset);
        self.status_message = None;
        self.update_all_charts();
    }

    pub fn set_gender_filter(&mut self, selection: Selection) {
        if self.selection.gender != selection {
            self.selection.gender = selection;
            self.update_all_charts();
        }
    }

    pub fn set_category_filter(&mut self, selection: Selection) {
        if self.selection.category != selection {
            self.selection.category = selection;
            self.update_all_charts();
        }
    }

    /// The redraw entry point: recompute the filtered view, re-run the three
    /// aggregations, and replace all three chart handles. Each slot's
    /// previous handle is released before its successor is installed.
    pub fn update_all_charts(&mut self) {
        let Some(dataset) = self.dataset.as_ref() else {
            return;
        };
        if dataset.is_empty() {
            self.visible_indices.clear();
            self.charts.clear();
            return;
        }

        let visible = filtered_indices(dataset, &self.selection);
        let categories = aggregate::by_category(dataset, &visible);
        let genders = aggregate::by_gender(dataset, &visible);
        let ages = aggregate::by_age_group(dataset, &visible);

        self.visible_indices = visible;
        self.charts
            .install(ChartSlot::Category, chart::category_chart(&categories));
        self.charts
            .install(ChartSlot::Gender, chart::gender_chart(&genders));
        self.charts.install(ChartSlot::Age, chart::age_chart(&ages));
    }
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
    fn set_dataset_draws_all_three_charts() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        assert_eq!(state.visible_indices, vec![0, 1, 2]);
        assert!(state.charts.get(ChartSlot::Category).is_some());
        assert!(state.charts.get(ChartSlot::Gender).is_some());
        assert!(state.charts.get(ChartSlot::Age).is_some());
        assert_eq!(state.charts.disposed_total(), 0);
    }

    #[test]
    fn redraw_is_idempotent_and_disposes_one_handle_per_slot() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        let first = state
            .charts
            .get(ChartSlot::Category)
            .map(|h| h.spec.clone())
            .unwrap();

        state.update_all_charts();
        let second = state
            .charts
            .get(ChartSlot::Category)
            .map(|h| h.spec.clone())
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(state.charts.disposed_total(), 3);

        state.update_all_charts();
        assert_eq!(state.charts.disposed_total(), 6);
    }

    #[test]
    fn filter_change_recomputes_the_view() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_gender_filter(Selection::Value("LK".into()));
        assert_eq!(state.visible_indices, vec![0, 2]);

        let spec = &state.charts.get(ChartSlot::Gender).unwrap().spec;
        assert_eq!(spec.labels, vec!["Laki-laki (LK)"]);
        assert_eq!(spec.values, vec![2]);

        // Unchanged selection does not redraw.
        let disposed = state.charts.disposed_total();
        state.set_gender_filter(Selection::Value("LK".into()));
        assert_eq!(state.charts.disposed_total(), disposed);
    }

    #[test]
    fn filter_with_no_matches_yields_empty_charts_without_panicking() {
        let mut state = AppState::default();
        state.set_dataset(dataset());

        state.set_category_filter(Selection::Value("Tidak Ada".into()));
        assert!(state.visible_indices.is_empty());
        let spec = &state.charts.get(ChartSlot::Category).unwrap().spec;
        assert!(spec.labels.is_empty());
        assert_eq!(spec.total(), 0);
    }

    #[test]
    fn empty_dataset_clears_charts_instead_of_drawing() {
        let mut state = AppState::default();
        state.set_dataset(CaseDataset::from_records(Vec::new()));

        assert!(state.dataset.as_ref().unwrap().is_empty());
        assert!(state.charts.get(ChartSlot::Category).is_none());
        assert!(state.status_message.is_none());
    }
}
