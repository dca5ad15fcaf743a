// ---------------------------------------------------------------------------
// Age label parsing
// ---------------------------------------------------------------------------

/// Parse a free-text age label into a numeric sort key.
///
/// Labels look like `"5 Th"` (years) or `"6 Bl"` (months), case-insensitive,
/// with optional whitespace between the number and the unit. The first such
/// token anywhere in the string wins.
///
/// * `Th` → the integer value unchanged.
/// * `Bl` → the integer value divided by 100. This is a sort-key convention,
///   not a unit conversion: month ages land immediately below the nearest
///   lower year under numeric comparison. It only orders correctly while
///   years and months both stay ≤ 99.
/// * Anything else (empty, malformed, missing unit) → `0.0`, so an
///   unparseable label is indistinguishable from a genuine zero age.
pub fn parse_age(label: &str) -> f64 {
    let bytes = label.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        // Maximal digit run starting at i.
        let start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let Ok(value) = label[start..i].parse::<u64>() else {
            continue;
        };

        // Optional whitespace, then a two-letter unit token.
        let mut j = i;
        while j < bytes.len() && bytes[j].is_ascii_whitespace() {
            j += 1;
        }
        if j + 2 <= bytes.len() {
            let unit = [bytes[j].to_ascii_lowercase(), bytes[j + 1].to_ascii_lowercase()];
            match &unit {
                b"th" => return value as f64,
                b"bl" => return value as f64 / 100.0,
                _ => {}
            }
        }
        // Digit run without a unit: keep scanning ("5 years 3 Th" → 3).
    }

    0.0
}

#[cfg(test)]
mod tests {
    use super::parse_age;

    #[test]
    fn empty_label_is_zero() {
        assert_eq!(parse_age(""), 0.0);
    }

    #[test]
    fn years_pass_through() {
        assert_eq!(parse_age("5 Th"), 5.0);
        assert_eq!(parse_age("45 th"), 45.0);
    }

    #[test]
    fn months_divide_by_hundred() {
        assert_eq!(parse_age("6 Bl"), 0.06);
        assert_eq!(parse_age("11 bl"), 0.11);
    }

    #[test]
    fn whitespace_between_number_and_unit_is_optional() {
        assert_eq!(parse_age("12Th"), 12.0);
        assert_eq!(parse_age("3Bl"), 0.03);
    }

    #[test]
    fn garbage_is_zero() {
        assert_eq!(parse_age("garbage"), 0.0);
        assert_eq!(parse_age("Th"), 0.0);
        assert_eq!(parse_age("12"), 0.0);
        assert_eq!(parse_age("12 xy"), 0.0);
    }

    #[test]
    fn first_matching_token_wins() {
        assert_eq!(parse_age("sekitar 5 Th"), 5.0);
        assert_eq!(parse_age("5 apel 3 Th"), 3.0);
    }

    #[test]
    fn month_keys_sort_below_year_keys() {
        assert!(parse_age("11 Bl") < parse_age("1 Th"));
        assert!(parse_age("6 Bl") < parse_age("5 Th"));
    }
}
