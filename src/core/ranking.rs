use crate::core::tfidf::TermWeights;
use crate::core::tokenizer::normalize_term;
use crate::core::vocabulary::{is_extra_stop, is_skill};
use crate::models::KeywordWeight;

/// Maximum number of ranked job keywords
pub const MAX_RANKED_KEYWORDS: usize = 15;

/// Rank the job posting's skill terms by TF-IDF weight
///
/// Terms are ordered by weight descending; ties keep feature order. Zero
/// weights are skipped and each feature is normalized before the
/// allowlist check, so the emitted term is the normalized form.
pub fn rank_job_keywords(weights: &TermWeights) -> Vec<KeywordWeight> {
    let job = weights.job_weights();
    let features = weights.features();

    let mut order: Vec<usize> = (0..job.len()).collect();
    // sort_by is stable
    order.sort_by(|&a, &b| {
        job[b]
            .partial_cmp(&job[a])
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut ranked = Vec::new();
    for idx in order {
        if ranked.len() >= MAX_RANKED_KEYWORDS {
            break;
        }

        let weight = job[idx];
        if weight <= 0.0 {
            continue;
        }

        let term = normalize_term(&features[idx]);
        if is_extra_stop(&term) || !is_skill(&term) {
            continue;
        }

        ranked.push(KeywordWeight {
            term,
            weight: round_to(weight, 4),
        });
    }

    ranked
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
