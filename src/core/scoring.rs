use crate::models::ScoringWeights;

/// Blend lexical similarity and skill coverage into a 0-100 score
///
/// Scoring formula:
/// score = round(
///     lexical * 100 * 0.70 +      # TF-IDF cosine similarity
///     coverage * 100 * 0.30       # Share of job skills on the resume
/// )
///
/// Rounding is half-to-even so 62.5 becomes 62 and 87.5 becomes 88. The
/// result is clamped to guard against floating-point overshoot.
pub fn calculate_match_score(lexical: f64, coverage: f64, weights: &ScoringWeights) -> u8 {
    let raw = weights.lexical * (lexical * 100.0) + weights.coverage * (coverage * 100.0);

    if raw.is_nan() {
        return 0;
    }

    raw.round_ties_even().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_match() {
        let weights = ScoringWeights::default();
        assert_eq!(calculate_match_score(1.0, 1.0, &weights), 100);
    }

    #[test]
    fn test_no_overlap() {
        let weights = ScoringWeights::default();
        assert_eq!(calculate_match_score(0.0, 0.0, &weights), 0);
    }

    #[test]
    fn test_weighted_blend() {
        let weights = ScoringWeights::default();
        // 0.7 * 50 + 0.3 * 100 = 65
        assert_eq!(calculate_match_score(0.5, 1.0, &weights), 65);
        // 0.7 * 0 + 0.3 * 50 = 15
        assert_eq!(calculate_match_score(0.0, 0.5, &weights), 15);
    }

    #[test]
    fn test_half_rounds_to_even() {
        let weights = ScoringWeights {
            lexical: 1.0,
            coverage: 0.0,
            tailor_threshold: 60,
        };
        assert_eq!(calculate_match_score(0.625, 0.0, &weights), 62);
        assert_eq!(calculate_match_score(0.875, 0.0, &weights), 88);
    }

    #[test]
    fn test_overshoot_clamped() {
        let weights = ScoringWeights::default();
        assert_eq!(calculate_match_score(1.0000001, 1.0, &weights), 100);
    }
}
