//! String similarity primitives used by the suggestion engine.

/// Minimum number of single-character insertions, deletions or substitutions
/// needed to turn `a` into `b`. Operates on Unicode scalar values.
pub fn levenshtein(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Case-insensitive similarity in `[0, 1]` derived from the edit distance
/// relative to the longer input. Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    let distance = levenshtein(&a.to_lowercase(), &b.to_lowercase());
    longest.saturating_sub(distance) as f64 / longest as f64
}

/// Similarity expressed as a whole percentage, rounded half away from zero.
pub fn similarity_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}
