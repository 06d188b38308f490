//! Text normalization: raw document text to lemma tokens

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Turns raw document text into an ordered sequence of normalized tokens.
///
/// Implementations must return lowercase, alphabetic-only tokens with stop
/// words removed and each token reduced to its lemma.
pub trait TokenNormalizer: Send + Sync {
    fn normalize(&self, text: &str) -> Vec<String>;
}

pub struct TextProcessor {
    stop_words: HashSet<String>,
    protected: HashSet<String>,
    email_regex: Regex,
    url_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let stop_words = Self::create_stop_words();

        let email_regex = Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
            .expect("Invalid email regex");

        let url_regex = Regex::new(r"https?://[^\s]+")
            .expect("Invalid URL regex");

        Self {
            stop_words,
            protected: HashSet::new(),
            email_regex,
            url_regex,
        }
    }

    /// Words that are kept verbatim instead of being lemmatized
    pub fn with_protected_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.protected.extend(terms.into_iter().map(Into::into));
        self
    }

    /// Strip URLs and email addresses, which never carry skills
    pub fn clean_text(&self, text: &str) -> String {
        let without_urls = self.url_regex.replace_all(text, " ");
        self.email_regex.replace_all(&without_urls, " ").to_string()
    }

    /// Tokenize text into lowercase words using Unicode segmentation
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut tokens = Vec::new();

        for word in text.unicode_words() {
            let normalized = word.to_lowercase();

            // "node.js" or "c3po" are dropped, as is anything with digits
            if !normalized.chars().all(char::is_alphabetic) {
                continue;
            }
            if self.stop_words.contains(&normalized) {
                continue;
            }

            if self.protected.contains(&normalized) {
                tokens.push(normalized);
            } else {
                tokens.push(lemmatize(&normalized));
            }
        }

        tokens
    }

    /// Create set of common English stop words
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "against", "all", "almost", "alone",
            "along", "already", "also", "although", "always", "am", "among", "amongst",
            "an", "and", "another", "any", "anyone", "anything", "anywhere", "are",
            "around", "as", "at", "be", "became", "because", "become", "been", "before",
            "being", "below", "beside", "besides", "between", "beyond", "both", "but",
            "by", "can", "cannot", "could", "did", "do", "does", "doing", "done", "down",
            "during", "each", "either", "else", "elsewhere", "enough", "etc", "even",
            "ever", "every", "everyone", "everything", "everywhere", "few", "for",
            "former", "from", "further", "had", "has", "have", "having", "he", "hence",
            "her", "here", "hers", "herself", "him", "himself", "his", "how", "however",
            "i", "if", "in", "indeed", "into", "is", "it", "its", "itself", "just",
            "keep", "last", "latter", "least", "less", "made", "make", "many", "may",
            "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly",
            "much", "must", "my", "myself", "namely", "neither", "never", "nevertheless",
            "next", "no", "nobody", "none", "nor", "not", "nothing", "now", "nowhere",
            "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
            "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
            "per", "perhaps", "please", "put", "quite", "rather", "really", "regarding",
            "same", "say", "see", "seem", "seemed", "seems", "several", "she", "should",
            "show", "since", "so", "some", "someone", "something", "sometime",
            "sometimes", "somewhere", "still", "such", "take", "than", "that", "the",
            "their", "them", "themselves", "then", "there", "therefore", "these", "they",
            "this", "those", "though", "through", "throughout", "thus", "to", "together",
            "too", "toward", "towards", "under", "unless", "until", "up", "upon", "us",
            "used", "using", "various", "very", "via", "was", "we", "well", "were",
            "what", "whatever", "when", "whenever", "where", "whereas", "wherever",
            "whether", "which", "while", "who", "whoever", "whole", "whom", "whose",
            "why", "will", "with", "within", "without", "would", "yet", "you", "your",
            "yours", "yourself", "yourselves",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

impl TokenNormalizer for TextProcessor {
    fn normalize(&self, text: &str) -> Vec<String> {
        let cleaned = self.clean_text(text);
        self.tokenize(&cleaned)
    }
}

/// Reduce an English word to its lemma with conservative suffix rules.
///
/// Only plural and third-person "-s" forms are touched. "-ing" and "-ed"
/// endings are left alone because in skill text they are mostly nouns
/// ("machine learning", "embedded").
pub fn lemmatize(word: &str) -> String {
    if let Some(irregular) = irregular_lemma(word) {
        return irregular.to_string();
    }

    let char_count = word.chars().count();
    if char_count <= 3 {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if char_count > 4 {
            return format!("{}y", stem);
        }
    }

    for suffix in ["sses", "xes", "ches", "shes", "zzes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    let keeps_final_s = ["ss", "us", "is", "os", "as"]
        .iter()
        .any(|ending| word.ends_with(ending));

    match word.strip_suffix('s') {
        Some(stem) if !keeps_final_s => stem.to_string(),
        _ => word.to_string(),
    }
}

fn irregular_lemma(word: &str) -> Option<&'static str> {
    let lemma = match word {
        "children" => "child",
        "people" => "person",
        "analyses" => "analysis",
        "databases" => "database",
        "indices" => "index",
        "led" => "lead",
        "built" => "build",
        "wrote" => "write",
        "written" => "write",
        "taught" => "teach",
        "ran" => "run",
        _ => return None,
    };
    Some(lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenization() {
        let processor = TextProcessor::new();
        let text = "Rust programming language is awesome!";

        let tokens = processor.tokenize(text);

        assert!(tokens.contains(&"rust".to_string()));
        assert!(tokens.contains(&"programming".to_string()));
        assert!(tokens.contains(&"language".to_string()));
        assert!(tokens.contains(&"awesome".to_string()));

        // Stop words should be filtered out
        assert!(!tokens.contains(&"is".to_string()));
    }

    #[test]
    fn test_tokens_preserve_order() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Experienced with Machine Learning and Docker");

        assert_eq!(tokens, vec!["experienced", "machine", "learning", "docker"]);
    }

    #[test]
    fn test_non_alphabetic_tokens_dropped() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Python3 node.js 2024 SQL");

        assert_eq!(tokens, vec!["sql"]);
    }

    #[test]
    fn test_urls_and_emails_removed() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Contact john.doe@email.com or visit https://github.com/jdoe for Kotlin");

        assert!(!tokens.iter().any(|t| t == "john" || t == "https" || t == "github"));
        assert!(tokens.contains(&"kotlin".to_string()));
    }

    #[test]
    fn test_plural_lemmas() {
        let processor = TextProcessor::new();
        let tokens = processor.normalize("Skills: microservices, technologies, databases, patches");

        assert_eq!(tokens, vec!["skill", "microservice", "technology", "database", "patch"]);
    }

    #[test]
    fn test_protected_terms_not_lemmatized() {
        let processor = TextProcessor::new().with_protected_terms(["pandas", "kubernetes"]);
        let tokens = processor.normalize("Pandas and Kubernetes clusters");

        assert_eq!(tokens, vec!["pandas", "kubernetes", "cluster"]);
    }

    #[test]
    fn test_lemmatize_edge_cases() {
        assert_eq!(lemmatize("aws"), "aws");
        assert_eq!(lemmatize("class"), "class");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("analysis"), "analysis");
        assert_eq!(lemmatize("learning"), "learning");
        assert_eq!(lemmatize("libraries"), "library");
        assert_eq!(lemmatize("processes"), "process");
        assert_eq!(lemmatize("led"), "lead");
        assert_eq!(lemmatize(""), "");
    }

    #[test]
    fn test_empty_text() {
        let processor = TextProcessor::new();
        assert!(processor.normalize("").is_empty());
        assert!(processor.normalize("   \n\t ").is_empty());
        assert!(processor.normalize("the and of").is_empty());
    }
}
