use eframe::egui::Color32;

use crate::color;
use crate::data::aggregate::AggregationResult;

// ---------------------------------------------------------------------------
// Chart renderer adapter
// ---------------------------------------------------------------------------
//
// The drawing code (ui::charts) only ever sees a ChartSpec: ordered display
// labels, values, per-point colors, and display options. Building the spec
// from an aggregation result happens here, including the gender display-label
// remap.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// Everything the renderer needs to draw one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: Option<String>,
    /// Series label shown for bar tooltips ("Total Kasus", "Frekuensi Pasien").
    pub series_label: Option<String>,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    pub colors: Vec<Color32>,
    pub bar_border: Option<Color32>,
    pub x_axis_label: Option<String>,
    pub y_axis_label: Option<String>,
    /// Shared-position tooltips (the age chart shows the whole column under
    /// the pointer, not just the hovered element).
    pub index_tooltips: bool,
}

impl ChartSpec {
    pub fn total(&self) -> u64 {
        self.values.iter().sum()
    }
}

/// Category totals as a bar chart, one fixed color per known category.
pub fn category_chart(agg: &AggregationResult) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: None,
        series_label: Some("Total Kasus".to_string()),
        labels: agg.iter().map(|(label, _)| label.clone()).collect(),
        values: agg.iter().map(|(_, count)| *count).collect(),
        colors: agg
            .iter()
            .map(|(label, _)| color::category_color(label))
            .collect(),
        bar_border: Some(color::BAR_BORDER),
        x_axis_label: None,
        y_axis_label: None,
        index_tooltips: false,
    }
}

/// Gender share as a pie chart. Display labels are remapped here; the
/// aggregation keys stay the raw codes.
pub fn gender_chart(agg: &AggregationResult) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Pie,
        title: None,
        series_label: None,
        labels: agg
            .iter()
            .map(|(code, _)| color::gender_display_label(code))
            .collect(),
        values: agg.iter().map(|(_, count)| *count).collect(),
        colors: agg
            .iter()
            .map(|(code, _)| color::gender_color(code))
            .collect(),
        bar_border: None,
        x_axis_label: None,
        y_axis_label: None,
        index_tooltips: false,
    }
}

/// Age-group frequency distribution as a bar chart with fixed axis text.
pub fn age_chart(agg: &AggregationResult) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        title: Some("Distribusi Frekuensi Usia Pasien ISPA".to_string()),
        series_label: Some("Frekuensi Pasien".to_string()),
        labels: agg.iter().map(|(label, _)| label.clone()).collect(),
        values: agg.iter().map(|(_, count)| *count).collect(),
        colors: vec![color::age_bar_fill(); agg.len()],
        bar_border: Some(color::age_bar_border()),
        x_axis_label: Some("Kelompok Usia (Th = Tahun, Bl = Bulan)".to_string()),
        y_axis_label: Some("Frekuensi Pasien".to_string()),
        index_tooltips: true,
    }
}

// ---------------------------------------------------------------------------
// Chart handles: destroy-before-recreate as scoped acquisition
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Category,
    Gender,
    Age,
}

impl ChartSlot {
    fn name(self) -> &'static str {
        match self {
            ChartSlot::Category => "category",
            ChartSlot::Gender => "gender",
            ChartSlot::Age => "age",
        }
    }
}

/// An owned, drawable chart. Disposal is the drop: replacing a handle in its
/// slot releases the previous one before the new one becomes visible.
#[derive(Debug)]
pub struct ChartHandle {
    slot: ChartSlot,
    pub spec: ChartSpec,
}

impl ChartHandle {
    pub fn new(slot: ChartSlot, spec: ChartSpec) -> Self {
        ChartHandle { slot, spec }
    }
}

impl Drop for ChartHandle {
    fn drop(&mut self) {
        log::debug!("disposing {} chart", self.slot.name());
    }
}

/// The three chart slots. Handles are replaced atomically on redraw; the
/// disposal counter exists so the one-dispose-per-slot-per-redraw contract
/// stays observable.
#[derive(Debug, Default)]
pub struct ChartSet {
    category: Option<ChartHandle>,
    gender: Option<ChartHandle>,
    age: Option<ChartHandle>,
    disposed: u64,
}

impl ChartSet {
    fn slot_mut(&mut self, slot: ChartSlot) -> &mut Option<ChartHandle> {
        match slot {
            ChartSlot::Category => &mut self.category,
            ChartSlot::Gender => &mut self.gender,
            ChartSlot::Age => &mut self.age,
        }
    }

    /// Install a freshly built spec into its slot, disposing any previous
    /// handle first.
    pub fn install(&mut self, slot: ChartSlot, spec: ChartSpec) {
        let previous = self.slot_mut(slot).replace(ChartHandle::new(slot, spec));
        if previous.is_some() {
            self.disposed += 1;
        }
    }

    /// Dispose every held handle (e.g. when the dataset becomes unusable).
    pub fn clear(&mut self) {
        for slot in [ChartSlot::Category, ChartSlot::Gender, ChartSlot::Age] {
            if self.slot_mut(slot).take().is_some() {
                self.disposed += 1;
            }
        }
    }

    pub fn get(&self, slot: ChartSlot) -> Option<&ChartHandle> {
        match slot {
            ChartSlot::Category => self.category.as_ref(),
            ChartSlot::Gender => self.gender.as_ref(),
            ChartSlot::Age => self.age.as_ref(),
        }
    }

    /// Total number of handles disposed over the lifetime of this set.
    pub fn disposed_total(&self) -> u64 {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn agg(pairs: &[(&str, u64)]) -> AggregationResult {
        pairs.iter().map(|&(l, c)| (l.to_string(), c)).collect()
    }

    #[test]
    fn category_spec_carries_fixed_colors_per_label() {
        let spec = category_chart(&agg(&[
            ("ISPA Berat", 1),
            ("ISPA Ringan", 2),
            ("Lainnya", 1),
        ]));
        assert_eq!(spec.kind, ChartKind::Bar);
        assert_eq!(spec.values, vec![1, 2, 1]);
        assert_eq!(spec.colors[0], crate::color::category_color("ISPA Berat"));
        assert_eq!(spec.colors[2], crate::color::NEUTRAL_GRAY);
        assert_eq!(spec.total(), 4);
    }

    #[test]
    fn gender_spec_remaps_display_labels_only() {
        let spec = gender_chart(&agg(&[("LK", 2), ("PR", 1)]));
        assert_eq!(spec.kind, ChartKind::Pie);
        assert_eq!(spec.labels, vec!["Laki-laki (LK)", "Perempuan (PR)"]);
        assert_eq!(spec.values, vec![2, 1]);
    }

    #[test]
    fn age_spec_uses_index_tooltips_and_fixed_axis_text() {
        let spec = age_chart(&agg(&[("6 Bl", 1), ("5 Th", 1)]));
        assert!(spec.index_tooltips);
        assert_eq!(
            spec.x_axis_label.as_deref(),
            Some("Kelompok Usia (Th = Tahun, Bl = Bulan)")
        );
        assert_eq!(spec.labels, vec!["6 Bl", "5 Th"]);
    }

    #[test]
    fn install_disposes_exactly_the_replaced_handles() {
        let mut set = ChartSet::default();
        let spec = category_chart(&agg(&[("ISPA Ringan", 1)]));

        set.install(ChartSlot::Category, spec.clone());
        set.install(ChartSlot::Gender, gender_chart(&agg(&[("LK", 1)])));
        set.install(ChartSlot::Age, age_chart(&agg(&[("5 Th", 1)])));
        assert_eq!(set.disposed_total(), 0);

        set.install(ChartSlot::Category, spec.clone());
        set.install(ChartSlot::Gender, gender_chart(&agg(&[("LK", 1)])));
        set.install(ChartSlot::Age, age_chart(&agg(&[("5 Th", 1)])));
        assert_eq!(set.disposed_total(), 3);

        set.clear();
        assert_eq!(set.disposed_total(), 6);
        assert!(set.get(ChartSlot::Category).is_none());
    }
}
