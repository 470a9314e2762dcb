use crate::core::vocabulary::is_english_stop;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Number of documents in the corpus: the resume and the job posting
const CORPUS_SIZE: f64 = 2.0;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\b\w\w+\b").expect("word pattern is valid"))
}

/// Split text into lowercase words of two or more characters, minus stopwords
pub fn analyze_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();

    word_pattern()
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|word| !is_english_stop(word))
        .map(str::to_string)
        .collect()
}

/// TF-IDF weights fitted jointly over a resume and a job posting
///
/// Features are ordered lexicographically, so index order is deterministic.
/// Both weight vectors are L2-normalized, which makes their dot product the
/// cosine similarity.
#[derive(Debug, Clone)]
pub struct TermWeights {
    features: Vec<String>,
    resume: Vec<f64>,
    job: Vec<f64>,
}

impl TermWeights {
    /// Fit weights over the two-document corpus
    ///
    /// `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, `tf` is the raw count.
    pub fn fit(resume_text: &str, job_text: &str) -> Self {
        // term -> [resume count, job count]
        let mut counts: BTreeMap<String, [u32; 2]> = BTreeMap::new();

        for (doc, text) in [resume_text, job_text].into_iter().enumerate() {
            for term in analyze_terms(text) {
                counts.entry(term).or_insert([0, 0])[doc] += 1;
            }
        }

        let mut features = Vec::with_capacity(counts.len());
        let mut resume = Vec::with_capacity(counts.len());
        let mut job = Vec::with_capacity(counts.len());

        for (term, [resume_tf, job_tf]) in counts {
            let df = (resume_tf > 0) as u32 + (job_tf > 0) as u32;
            let idf = ((1.0 + CORPUS_SIZE) / (1.0 + df as f64)).ln() + 1.0;

            features.push(term);
            resume.push(resume_tf as f64 * idf);
            job.push(job_tf as f64 * idf);
        }

        l2_normalize(&mut resume);
        l2_normalize(&mut job);

        Self {
            features,
            resume,
            job,
        }
    }

    /// Cosine similarity between the two documents, in [0, 1]
    pub fn similarity(&self) -> f64 {
        let dot: f64 = self
            .resume
            .iter()
            .zip(&self.job)
            .map(|(a, b)| a * b)
            .sum();

        dot.clamp(0.0, 1.0)
    }

    pub fn features(&self) -> &[String] {
        &self.features
    }

    pub fn resume_weights(&self) -> &[f64] {
        &self.resume
    }

    pub fn job_weights(&self) -> &[f64] {
        &self.job
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

/// Scale a vector to unit length; zero vectors are left untouched
fn l2_normalize(weights: &mut [f64]) {
    let norm = weights.iter().map(|w| w * w).sum::<f64>().sqrt();
    if norm > 0.0 {
        weights.iter_mut().for_each(|w| *w /= norm);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_terms_drops_stopwords_and_short_words() {
        let terms = analyze_terms("We need a Node.js developer with 5 years of React");
        assert_eq!(terms, vec!["need", "node", "js", "developer", "years", "react"]);
    }

    #[test]
    fn test_identical_documents() {
        let weights = TermWeights::fit("react node mongodb rest api", "react node mongodb rest api");
        assert!((weights.similarity() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents() {
        let weights = TermWeights::fit("python django", "react node");
        assert_eq!(weights.similarity(), 0.0);
    }

    #[test]
    fn test_features_sorted_and_unit_length() {
        let weights = TermWeights::fit("docker docker aws", "kubernetes docker");
        assert_eq!(weights.features(), &["aws", "docker", "kubernetes"]);

        let norm: f64 = weights.job_weights().iter().map(|w| w * w).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-9);
        // "aws" is absent from the job posting
        assert_eq!(weights.job_weights()[0], 0.0);
    }

    #[test]
    fn test_shared_terms_weigh_less() {
        // "docker" appears in both documents, so its idf is lower
        let weights = TermWeights::fit("docker aws", "docker kubernetes");
        let job = weights.job_weights();
        assert!(job[1] < job[2]);
    }

    #[test]
    fn test_stopword_only_corpus() {
        let weights = TermWeights::fit("the and of", "it is");
        assert!(weights.is_empty());
        assert_eq!(weights.similarity(), 0.0);
    }
}
