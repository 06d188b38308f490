//! Skill extraction from normalized token sequences

use crate::config::PhraseMatching;
use crate::processing::vocabulary::SkillVocabulary;
use std::collections::HashSet;

/// Extract every vocabulary skill present in `tokens`.
///
/// Single-word skills must equal a token. Multi-word skills are found by
/// substring search over the tokens joined with single spaces, which can
/// report a phrase whose words only became adjacent after stop-word
/// removal, or whose edges sit inside a longer token.
pub fn extract_skills(tokens: &[String], vocabulary: &SkillVocabulary) -> HashSet<String> {
    SkillExtractor::default().extract(tokens, vocabulary)
}

#[derive(Debug, Clone, Copy)]
pub struct SkillExtractor {
    phrase_matching: PhraseMatching,
}

impl Default for SkillExtractor {
    fn default() -> Self {
        Self::new(PhraseMatching::Substring)
    }
}

impl SkillExtractor {
    pub fn new(phrase_matching: PhraseMatching) -> Self {
        Self { phrase_matching }
    }

    pub fn phrase_matching(&self) -> PhraseMatching {
        self.phrase_matching
    }

    pub fn extract(&self, tokens: &[String], vocabulary: &SkillVocabulary) -> HashSet<String> {
        let mut extracted: HashSet<String> = tokens
            .iter()
            .filter(|token| vocabulary.contains(token))
            .cloned()
            .collect();

        if tokens.is_empty() || vocabulary.phrases().is_empty() {
            return extracted;
        }

        match self.phrase_matching {
            PhraseMatching::Substring => {
                let text = tokens.join(" ");
                extracted.extend(vocabulary.phrases_in(&text));
            }
            PhraseMatching::TokenWindow => {
                extracted.extend(Self::phrases_in_windows(tokens, vocabulary));
            }
        }

        extracted
    }

    /// Phrases equal to a contiguous run of whole tokens
    fn phrases_in_windows(tokens: &[String], vocabulary: &SkillVocabulary) -> HashSet<String> {
        let mut found = HashSet::new();

        for phrase in vocabulary.phrases() {
            let words: Vec<&str> = phrase.split(' ').collect();
            if words.len() > tokens.len() {
                continue;
            }

            let present = tokens
                .windows(words.len())
                .any(|window| window.iter().zip(&words).all(|(token, word)| token.as_str() == *word));

            if present {
                found.insert(phrase.clone());
            }
        }

        found
    }
}
