use crate::core::tokenizer::tokenize;
use crate::core::vocabulary::{is_extra_stop, is_skill};
use std::collections::BTreeSet;

/// Skill terms of both documents and how they overlap
///
/// `matched` and `missing` are sorted and deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordMatch {
    pub resume_terms: BTreeSet<String>,
    pub job_terms: BTreeSet<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatch {
    /// Share of the job's skill terms that the resume covers, in [0, 1]
    pub fn coverage(&self) -> f64 {
        if self.job_terms.is_empty() {
            return 0.0;
        }
        self.matched.len() as f64 / self.job_terms.len() as f64
    }
}

/// Distinct allowlisted skill terms mentioned in a document
pub fn skill_terms(text: &str) -> BTreeSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|term| !is_extra_stop(term) && is_skill(term))
        .collect()
}

/// Compare the skill terms of a resume against a job posting
pub fn match_keywords(resume_text: &str, job_text: &str) -> KeywordMatch {
    let resume_terms = skill_terms(resume_text);
    let job_terms = skill_terms(job_text);

    // BTreeSet iteration is already lexicographic
    let matched = resume_terms.intersection(&job_terms).cloned().collect();
    let missing = job_terms.difference(&resume_terms).cloned().collect();

    KeywordMatch {
        resume_terms,
        job_terms,
        matched,
        missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_and_missing() {
        let result = match_keywords(
            "Built React apps with Node.js and MongoDB",
            "Looking for React, Node, Docker and AWS experience",
        );

        assert_eq!(result.matched, vec!["node", "react"]);
        assert_eq!(result.missing, vec!["aws", "docker"]);
        assert_eq!(result.coverage(), 0.5);
    }

    #[test]
    fn test_non_skill_terms_ignored() {
        let result = match_keywords("great team player", "strong team player wanted");
        assert!(result.job_terms.is_empty());
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
        assert_eq!(result.coverage(), 0.0);
    }

    #[test]
    fn test_duplicates_collapse() {
        let result = match_keywords("docker docker docker", "docker, Docker");
        assert_eq!(result.matched, vec!["docker"]);
    }

    #[test]
    fn test_javascript_alias_counts_as_js() {
        let result = match_keywords("JavaScript", "js");
        assert_eq!(result.matched, vec!["js"]);
    }
}
