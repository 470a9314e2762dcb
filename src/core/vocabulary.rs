//! Fixed vocabularies used by the matching engine.

/// Recognized skill terms. Only these are ever surfaced as keywords.
pub const SKILL_ALLOWLIST: &[&str] = &[
    "react", "node", "express", "mongodb", "sql", "postgres", "mysql",
    "rest", "api", "apis", "authentication", "jwt", "oauth",
    "docker", "kubernetes", "aws", "azure", "gcp",
    "typescript", "javascript", "js", "python",
    "deployment", "deploy", "ci", "cd", "cicd", "git", "github",
];

/// Generic posting words excluded from keyword matching even if allowlisted.
pub const EXTRA_STOP_WORDS: &[&str] = &[
    "look", "looking", "seeking", "need", "needs", "want", "wanted",
    "role", "position", "join", "team", "great", "strong",
];

/// Broad-coverage English stopword list applied by the term-weight engine.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against",
    "all", "almost", "alone", "along", "already", "also", "although", "always",
    "am", "among", "amongst", "amoungst", "amount", "an", "and", "another",
    "any", "anyhow", "anyone", "anything", "anyway", "anywhere", "are",
    "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being",
    "below", "beside", "besides", "between", "beyond", "bill", "both",
    "bottom", "but", "by", "call", "can", "cannot", "cant", "co", "con",
    "could", "couldnt", "cry", "de", "describe", "detail", "do", "done",
    "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone",
    "everything", "everywhere", "except", "few", "fifteen", "fifty", "fill",
    "find", "fire", "first", "five", "for", "former", "formerly", "forty",
    "found", "four", "from", "front", "full", "further", "get", "give", "go",
    "had", "has", "hasnt", "have", "he", "hence", "her", "here", "hereafter",
    "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed",
    "interest", "into", "is", "it", "its", "itself", "keep", "last", "latter",
    "latterly", "least", "less", "ltd", "made", "many", "may", "me",
    "meanwhile", "might", "mill", "mine", "more", "moreover", "most", "mostly",
    "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone",
    "nor", "not", "nothing", "now", "nowhere", "of", "off", "often", "on",
    "once", "one", "only", "onto", "or", "other", "others", "otherwise", "our",
    "ours", "ourselves", "out", "over", "own", "part", "per", "perhaps",
    "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side",
    "since", "sincere", "six", "sixty", "so", "some", "somehow", "someone",
    "something", "sometime", "sometimes", "somewhere", "still", "such",
    "system", "take", "ten", "than", "that", "the", "their", "them",
    "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin",
    "third", "this", "those", "though", "three", "through", "throughout",
    "thru", "thus", "to", "together", "too", "top", "toward", "towards",
    "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us",
    "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby",
    "wherein", "whereupon", "wherever", "whether", "which", "while", "whither",
    "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

#[inline]
pub fn is_skill(term: &str) -> bool {
    SKILL_ALLOWLIST.contains(&term)
}

#[inline]
pub fn is_extra_stop(term: &str) -> bool {
    EXTRA_STOP_WORDS.contains(&term)
}

#[inline]
pub fn is_english_stop(term: &str) -> bool {
    ENGLISH_STOP_WORDS.binary_search(&term).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stop_words_sorted() {
        // binary_search depends on this
        assert!(ENGLISH_STOP_WORDS.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_membership() {
        assert!(is_skill("react"));
        assert!(!is_skill("cobol"));
        assert!(is_extra_stop("team"));
        assert!(is_english_stop("the"));
        assert!(is_english_stop("yourselves"));
        assert!(!is_english_stop("react"));
    }

    #[test]
    fn test_extra_stop_disjoint_from_allowlist() {
        for word in EXTRA_STOP_WORDS {
            assert!(!is_skill(word), "{} is both a stop word and a skill", word);
        }
    }
}
