use super::age::parse_age;
use super::model::{CaseDataset, CaseRecord, AGE_FALLBACK_LABEL, FALLBACK_LABEL};

// ---------------------------------------------------------------------------
// Group-sum-sort aggregation
// ---------------------------------------------------------------------------

/// An ordered sequence of (label, total case count) pairs. Produced fresh on
/// every redraw; never mutated in place.
pub type AggregationResult = Vec<(String, u64)>;

/// Group the given view of the dataset by `key_fn` and sum `case_count` per
/// label, substituting `fallback` for empty/absent keys. Labels come out in
/// first-seen order; callers impose their own sort on top.
fn aggregate_by<F>(
    dataset: &CaseDataset,
    indices: &[usize],
    key_fn: F,
    fallback: &str,
) -> AggregationResult
where
    F: Fn(&CaseRecord) -> Option<&str>,
{
    // The label cardinality is tiny (a handful of categories / two genders /
    // a few dozen age labels), so a linear scan beats a map here and keeps
    // first-seen order for free.
    let mut acc: AggregationResult = Vec::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let key = key_fn(rec).filter(|s| !s.is_empty()).unwrap_or(fallback);
        match acc.iter_mut().find(|(label, _)| label == key) {
            Some((_, total)) => *total += rec.case_count,
            None => acc.push((key.to_string(), rec.case_count)),
        }
    }
    acc
}

/// Case totals per ISPA category, labels sorted lexicographically ascending.
pub fn by_category(dataset: &CaseDataset, indices: &[usize]) -> AggregationResult {
    let mut result = aggregate_by(dataset, indices, |r| r.category.as_deref(), FALLBACK_LABEL);
    result.sort_by(|a, b| a.0.cmp(&b.0));
    result
}

/// Case totals per gender code, labels in first-seen order.
pub fn by_gender(dataset: &CaseDataset, indices: &[usize]) -> AggregationResult {
    aggregate_by(dataset, indices, |r| r.gender.as_deref(), FALLBACK_LABEL)
}

/// Case totals per raw age label (grouping by the exact label, not by the
/// numeric age), ordered ascending by the label's parsed age. The sort is
/// stable, so labels with equal keys (e.g. several unparseable ones, all 0)
/// keep their first-seen relative order.
pub fn by_age_group(dataset: &CaseDataset, indices: &[usize]) -> AggregationResult {
    let mut result = aggregate_by(
        dataset,
        indices,
        |r| r.age_label.as_deref(),
        AGE_FALLBACK_LABEL,
    );
    result.sort_by(|a, b| parse_age(&a.0).total_cmp(&parse_age(&b.0)));
    result
}
