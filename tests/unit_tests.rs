// Unit tests for Resume Match

use resume_match::core::{
    keywords::match_keywords,
    ranking::rank_job_keywords,
    scoring::calculate_match_score,
    tfidf::TermWeights,
    tokenizer::{normalize_term, tokenize},
    vocabulary::{is_skill, SKILL_ALLOWLIST},
};
use resume_match::feedback::{build_bullet_examples, build_suggestions, generate_action_items, rewrite_resume};
use resume_match::models::{KeywordWeight, Priority, ScoringWeights};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_tokenizer_aliases() {
    assert_eq!(tokenize("Node.js"), vec!["node"]);
    assert_eq!(tokenize("JavaScript"), vec!["js"]);
}

#[test]
fn test_tokenizer_ing_suffix_boundary() {
    // 6 characters: stripped
    assert_eq!(tokenize("buying"), vec!["buy"]);
    // 5 characters: unchanged
    assert_eq!(tokenize("doing"), vec!["doing"]);
    assert_eq!(tokenize("bring"), vec!["bring"]);
}

#[test]
fn test_normalizing_allowlist_terms_is_idempotent() {
    for term in SKILL_ALLOWLIST {
        let once = normalize_term(term);
        assert_eq!(normalize_term(&once), once, "normalization of {} is not stable", term);
    }
    assert_eq!(normalize_term("react"), "react");
}

#[test]
fn test_identical_documents_similarity() {
    let text = "react node mongodb rest api";
    let weights = TermWeights::fit(text, text);
    assert!((weights.similarity() - 1.0).abs() < 1e-9);
}

#[test]
fn test_similarity_in_unit_range() {
    let weights = TermWeights::fit(
        "Senior engineer: Python, Django, AWS and Docker",
        "Backend role with Python, Kubernetes and AWS",
    );
    let sim = weights.similarity();
    assert!(sim > 0.0 && sim < 1.0, "unexpected similarity {}", sim);
}

#[test]
fn test_disjoint_vocabularies() {
    let result = match_keywords("python django aws", "react node mongodb");
    assert!(result.matched.is_empty());
    assert_eq!(result.coverage(), 0.0);
    assert_eq!(result.missing, vec!["mongodb", "node", "react"]);
}

#[test]
fn test_ranked_keywords_are_skills() {
    let weights = TermWeights::fit(
        "resume",
        "We need a great team player with docker, kubernetes, terraform and jenkins",
    );
    for keyword in rank_job_keywords(&weights) {
        assert!(is_skill(&keyword.term));
        assert!(keyword.weight > 0.0);
    }
}

#[test]
fn test_score_bounds() {
    let weights = ScoringWeights::default();
    for lexical in [0.0, 0.25, 0.5, 1.0] {
        for coverage in [0.0, 0.33, 1.0] {
            let score = calculate_match_score(lexical, coverage, &weights);
            assert!(score <= 100);
        }
    }
}

#[test]
fn test_suggestion_order() {
    let matched = strings(&["react"]);
    let missing = strings(&["docker"]);
    let ranked = vec![
        KeywordWeight {
            term: "python".to_string(),
            weight: 0.7,
        },
        KeywordWeight {
            term: "react".to_string(),
            weight: 0.5,
        },
    ];

    let suggestions = build_suggestions(&matched, &missing, &ranked);
    let keywords: Vec<&str> = suggestions.iter().map(|s| s.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["docker", "python"]);
}

#[test]
fn test_bullets_skip_unknown_terms() {
    let examples = build_bullet_examples(&strings(&["docker", "kubernetes"]), &strings(&["aws"]));
    assert!(examples.is_empty());
}

#[test]
fn test_rewrite_only_uses_matched() {
    let ranked = vec![KeywordWeight {
        term: "mongodb".to_string(),
        weight: 0.9,
    }];
    let lines = rewrite_resume(&strings(&["git"]), &ranked);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("Git"));
}

#[test]
fn test_action_items_priorities() {
    let items = generate_action_items(30, 60, &[], &strings(&["aws"]), "no numbers here");
    let priorities: Vec<Priority> = items.iter().map(|i| i.priority).collect();
    assert_eq!(priorities, vec![Priority::High, Priority::High, Priority::Medium]);
}
