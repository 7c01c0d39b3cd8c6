/// Case-folds extracted CV text so every later stage can match keywords with
/// plain substring checks. Whitespace and punctuation are left untouched.
pub fn normalize_cv_text(raw: &str) -> String {
    raw.to_lowercase()
}
