use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::filter::Selection;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter dropdowns
// ---------------------------------------------------------------------------

/// Render the left filter panel: one dropdown per filter dimension, options
/// taken from the full dataset (never narrowed by the other selection).
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    // Clone the option lists so we can mutate state inside the combo closures.
    let genders = dataset.genders.clone();
    let categories = dataset.categories.clone();

    ui.strong("Jenis Kelamin");
    let current = selection_text(&state.selection.gender, color::gender_display_label);
    let mut gender_pick: Option<Selection> = None;
    egui::ComboBox::from_id_salt("filter_gender")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selection.gender.is_all(), "Semua")
                .clicked()
            {
                gender_pick = Some(Selection::All);
            }
            for code in &genders {
                let selected = state.selection.gender == Selection::Value(code.clone());
                if ui
                    .selectable_label(selected, color::gender_display_label(code))
                    .clicked()
                {
                    gender_pick = Some(Selection::Value(code.clone()));
                }
            }
        });
    if let Some(selection) = gender_pick {
        state.set_gender_filter(selection);
    }

    ui.add_space(8.0);

    ui.strong("Kategori ISPA");
    let current = selection_text(&state.selection.category, |s| s.to_string());
    let mut category_pick: Option<Selection> = None;
    egui::ComboBox::from_id_salt("filter_category")
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selection.category.is_all(), "Semua")
                .clicked()
            {
                category_pick = Some(Selection::All);
            }
            for category in &categories {
                let selected = state.selection.category == Selection::Value(category.clone());
                if ui.selectable_label(selected, category).clicked() {
                    category_pick = Some(Selection::Value(category.clone()));
                }
            }
        });
    if let Some(selection) = category_pick {
        state.set_category_filter(selection);
    }
}

fn selection_text(selection: &Selection, display: impl Fn(&str) -> String) -> String {
    match selection {
        Selection::All => "Semua".to_string(),
        Selection::Value(v) => display(v),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} kasus dimuat, {} tampil",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open case data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_from_path(&path);
    }
}
