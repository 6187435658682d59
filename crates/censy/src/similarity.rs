use itertools::Itertools;

/// Cosine similarity between the character frequency vectors of two strings.
///
/// Returns `1.0` for equal strings (including two empty ones), `0.0` if
/// exactly one of them is empty. The order of characters is ignored, so
/// anagrams are perfectly similar. This isn't used by the analysis
/// pipeline, but it may serve as an alternative signal for ranking fuzzy
/// candidates.
pub fn similarity(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let a = a.chars().counts();
    let b = b.chars().counts();

    let dot: usize = a
        .iter()
        .filter_map(|(char, count)| Some(count * b.get(char)?))
        .sum();

    let magnitude = |freq: &std::collections::HashMap<char, usize>| {
        (freq.values().map(|count| count * count).sum::<usize>() as f64).sqrt()
    };

    dot as f64 / (magnitude(&a) * magnitude(&b))
}
