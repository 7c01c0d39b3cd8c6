use crate::scoring::catalog::Catalog;

/// Percentage of the technical keyword universe present in `normalized`.
///
/// Every keyword slot counts, so a keyword shared by two courses appears twice
/// in both numerator and denominator. Returns 0 for an empty universe.
pub fn compute_match_score(normalized: &str, catalog: &Catalog) -> u32 {
    let mut total = 0_u32;
    let mut matched = 0_u32;

    for course in catalog.match_universe() {
        for keyword in &course.keywords {
            total += 1;
            if normalized.contains(keyword.as_str()) {
                matched += 1;
            }
        }
    }

    if total == 0 {
        return 0;
    }

    ((matched as f64 / total as f64) * 100.0).round().min(100.0) as u32
}

/// True when the score clears the catalog's admission threshold.
pub fn passes_match_gate(score: u32, catalog: &Catalog) -> bool {
    score >= catalog.policy.match_threshold
}
