/// Score returned when one normalized string contains the other
pub const SUBSTRING_SCORE: f64 = 0.9;

/// Calculate a heuristic similarity (0-1) between two product/ingredient names
///
/// Both sides are trimmed and lowercased before comparison:
/// - equal strings score `1.0`
/// - one containing the other scores `0.9`
/// - otherwise the share of tokens in `a` that overlap some token in `b`,
///   relative to the longer token list
///
/// A blank side never matches anything.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();

    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    if a == b {
        return 1.0;
    }

    if a.contains(&b) || b.contains(&a) {
        return SUBSTRING_SCORE;
    }

    token_overlap(&a, &b)
}

/// Token overlap ratio for already-normalized strings
#[inline]
fn token_overlap(a: &str, b: &str) -> f64 {
    let tokens_a: Vec<&str> = a.split_whitespace().collect();
    let tokens_b: Vec<&str> = b.split_whitespace().collect();

    let longest = tokens_a.len().max(tokens_b.len());
    if longest == 0 {
        return 0.0;
    }

    let matching = tokens_a
        .iter()
        .filter(|ta| tokens_b.iter().any(|tb| tb.contains(*ta) || ta.contains(tb)))
        .count();

    matching as f64 / longest as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(similarity("huevo", "huevo"), 1.0);
        assert_eq!(similarity("  Huevo ", "HUEVO"), 1.0);
    }

    #[test]
    fn test_substring_match() {
        assert_eq!(similarity("pollo", "pechuga de pollo fileteada"), SUBSTRING_SCORE);
        assert_eq!(similarity("pechuga de pollo fileteada", "pollo"), SUBSTRING_SCORE);
    }

    #[test]
    fn test_token_overlap() {
        // "tomate" is inside "tomates", "cherry" has no counterpart
        let score = similarity("tomate cherry", "tomates pera");
        assert!((score - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_divides_by_longer_token_list() {
        // one of two tokens of "aceite girasol" overlaps, four tokens on the right
        let score = similarity("aceite girasol", "aceite de oliva virgen");
        assert!((score - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn test_no_overlap() {
        assert_eq!(similarity("lentejas", "yogur natural"), 0.0);
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(similarity("", "arroz"), 0.0);
        assert_eq!(similarity("arroz", "   "), 0.0);
        assert_eq!(similarity("", ""), 0.0);
    }
}
