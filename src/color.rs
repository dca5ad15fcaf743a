use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// Fixed style maps for the three charts
// ---------------------------------------------------------------------------

/// Neutral fallback for any label outside the fixed maps. Every label always
/// resolves to some color; there is no "none".
pub const NEUTRAL_GRAY: Color32 = Color32::from_rgb(0x6c, 0x75, 0x7d);

/// Border color for category bars.
pub const BAR_BORDER: Color32 = Color32::from_rgb(0x34, 0x3a, 0x40);

/// Color for a category label in the category bar chart.
pub fn category_color(label: &str) -> Color32 {
    match label {
        "ISPA Ringan" => Color32::from_rgb(0x28, 0xa7, 0x45),
        "ISPA Sedang" => Color32::from_rgb(0xff, 0xc1, 0x07),
        "ISPA Berat" => Color32::from_rgb(0x00, 0x7b, 0xff),
        _ => NEUTRAL_GRAY,
    }
}

/// Color for a gender code in the pie chart.
pub fn gender_color(code: &str) -> Color32 {
    match code {
        "LK" => Color32::from_rgba_unmultiplied(54, 162, 235, 204),
        "PR" => Color32::from_rgba_unmultiplied(255, 99, 132, 204),
        _ => NEUTRAL_GRAY,
    }
}

/// Presentation label for a gender code. The aggregation keys stay the raw
/// codes; the remap happens only at render time.
pub fn gender_display_label(code: &str) -> String {
    match code {
        "LK" => "Laki-laki (LK)".to_string(),
        "PR" => "Perempuan (PR)".to_string(),
        other => other.to_string(),
    }
}

/// Fill color for the age-distribution bars.
pub fn age_bar_fill() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 159, 64, 179)
}

/// Border color for the age-distribution bars.
pub fn age_bar_border() -> Color32 {
    Color32::from_rgb(255, 159, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_have_fixed_colors() {
        assert_eq!(category_color("ISPA Ringan"), Color32::from_rgb(0x28, 0xa7, 0x45));
        assert_eq!(category_color("ISPA Sedang"), Color32::from_rgb(0xff, 0xc1, 0x07));
        assert_eq!(category_color("ISPA Berat"), Color32::from_rgb(0x00, 0x7b, 0xff));
    }

    #[test]
    fn unknown_labels_fall_back_to_gray() {
        assert_eq!(category_color("Lainnya"), NEUTRAL_GRAY);
        assert_eq!(category_color(""), NEUTRAL_GRAY);
        assert_eq!(gender_color("Lainnya"), NEUTRAL_GRAY);
    }

    #[test]
    fn gender_codes_remap_for_display_only() {
        assert_eq!(gender_display_label("LK"), "Laki-laki (LK)");
        assert_eq!(gender_display_label("PR"), "Perempuan (PR)");
        assert_eq!(gender_display_label("Lainnya"), "Lainnya");
    }
}
