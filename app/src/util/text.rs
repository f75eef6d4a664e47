//! Display-string helpers shared across components.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Pluralized phrase count, e.g. `"1 phrase"` / `"3 phrases"`.
#[must_use]
pub fn phrase_count_label(n: usize) -> String {
    format!("{n} phrase{}", if n == 1 { "" } else { "s" })
}
