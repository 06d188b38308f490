//! Skill vocabulary loading and phrase lookup

use aho_corasick::AhoCorasick;
use log::{info, warn};
use std::collections::HashSet;
use std::path::Path;

/// Immutable set of known skill phrases.
///
/// Entries are lowercase, trimmed and never empty. Multi-word phrases are
/// additionally compiled into an Aho-Corasick automaton so a document only
/// has to be scanned once per extraction.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    skills: HashSet<String>,
    phrases: Vec<String>,
    phrase_matcher: Option<AhoCorasick>,
}

impl SkillVocabulary {
    /// Load a vocabulary file with one skill phrase per line.
    ///
    /// A missing or unreadable file is not an error: it is logged and an
    /// empty vocabulary is returned, so no skill will ever match.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let vocabulary = Self::from_lines(content.lines());
                info!("Loaded {} skills from {}", vocabulary.len(), path.display());
                vocabulary
            }
            Err(e) => {
                warn!("Skill list {} is unavailable ({}); continuing with an empty vocabulary", path.display(), e);
                Self::default()
            }
        }
    }

    /// Build a vocabulary from raw lines. Blank lines and `#` comments are skipped.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: HashSet<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_lowercase())
            .filter(|skill| !skill.is_empty() && !skill.starts_with('#'))
            .collect();

        let mut phrases: Vec<String> = skills
            .iter()
            .filter(|skill| skill.contains(' '))
            .cloned()
            .collect();
        phrases.sort();

        let phrase_matcher = if phrases.is_empty() {
            None
        } else {
            match AhoCorasick::new(&phrases) {
                Ok(matcher) => Some(matcher),
                Err(e) => {
                    warn!("Failed to build phrase matcher, falling back to linear search: {}", e);
                    None
                }
            }
        };

        Self {
            skills,
            phrases,
            phrase_matcher,
        }
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    /// Multi-word entries, sorted
    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn single_words(&self) -> impl Iterator<Item = &str> {
        self.iter().filter(|skill| !skill.contains(' '))
    }

    /// Every distinct word that appears in any entry
    pub fn words(&self) -> HashSet<&str> {
        self.skills
            .iter()
            .flat_map(|skill| skill.split(' '))
            .filter(|word| !word.is_empty())
            .collect()
    }

    /// All entries in lexicographic order
    pub fn sorted(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.iter().collect();
        skills.sort_unstable();
        skills
    }

    /// Multi-word entries that occur anywhere in `text` as a substring
    pub fn phrases_in(&self, text: &str) -> HashSet<String> {
        match &self.phrase_matcher {
            Some(matcher) => matcher
                .find_overlapping_iter(text)
                .map(|mat| self.phrases[mat.pattern().as_usize()].clone())
                .collect(),
            None => self
                .phrases
                .iter()
                .filter(|phrase| text.contains(phrase.as_str()))
                .cloned()
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_lines_normalizes() {
        let vocabulary = SkillVocabulary::from_lines(["  Python ", "SQL", "", "   ", "Machine Learning", "python"]);

        assert_eq!(vocabulary.len(), 3);
        assert!(vocabulary.contains("python"));
        assert!(vocabulary.contains("sql"));
        assert!(vocabulary.contains("machine learning"));
        assert!(!vocabulary.contains("Python"));
        assert_eq!(vocabulary.phrases(), &["machine learning".to_string()]);
    }

    #[test]
    fn test_comments_skipped() {
        let vocabulary = SkillVocabulary::from_lines(["# languages", "rust", "#cloud"]);
        assert_eq!(vocabulary.sorted(), vec!["rust"]);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Docker\nKubernetes\n\ndata analysis").unwrap();

        let vocabulary = SkillVocabulary::load(file.path());

        assert_eq!(vocabulary.sorted(), vec!["data analysis", "docker", "kubernetes"]);
        let mut singles: Vec<&str> = vocabulary.single_words().collect();
        singles.sort();
        assert_eq!(singles, vec!["docker", "kubernetes"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let vocabulary = SkillVocabulary::load(Path::new("definitely/not/here/skills_list.txt"));

        assert!(vocabulary.is_empty());
        assert!(vocabulary.phrases_in("machine learning").is_empty());
    }

    #[test]
    fn test_phrases_in_overlapping() {
        let vocabulary = SkillVocabulary::from_lines(["machine learning", "learning rate", "deep learning"]);
        let found = vocabulary.phrases_in("applied machine learning rate tuning");

        assert_eq!(found.len(), 2);
        assert!(found.contains("machine learning"));
        assert!(found.contains("learning rate"));
    }

    #[test]
    fn test_words() {
        let vocabulary = SkillVocabulary::from_lines(["data structures", "rust", "big data"]);
        let words = vocabulary.words();

        assert_eq!(words.len(), 4);
        assert!(words.contains("structures"));
        assert!(words.contains("data"));
    }
}
