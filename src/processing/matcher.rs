//! Three-way skill matching: matched, partially matched and missing

use crate::config::{RootForm, DEFAULT_PREFIX_LENGTH};
use crate::processing::text_processor::lemmatize;
use log::debug;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashSet;

/// Classification of the job description's skills against the resume's.
///
/// The three sets are pairwise disjoint and their union is exactly the job
/// description's skill set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: HashSet<String>,
    pub partial: HashSet<String>,
    pub missing: HashSet<String>,
}

impl MatchResult {
    pub fn sorted_matched(&self) -> Vec<String> {
        sorted(&self.matched)
    }

    pub fn sorted_partial(&self) -> Vec<String> {
        sorted(&self.partial)
    }

    pub fn sorted_missing(&self) -> Vec<String> {
        sorted(&self.missing)
    }

    /// Number of job description skills that were classified
    pub fn total(&self) -> usize {
        self.matched.len() + self.partial.len() + self.missing.len()
    }
}

pub(crate) fn sorted(skills: &HashSet<String>) -> Vec<String> {
    let mut list: Vec<String> = skills.iter().cloned().collect();
    list.sort();
    list
}

/// Match with the default policy: raw strings, four leading characters.
pub fn match_skills(resume_skills: &HashSet<String>, jd_skills: &HashSet<String>) -> MatchResult {
    SkillMatcher::default().match_skills(resume_skills, jd_skills)
}

/// Near-miss predicate comparing a fixed number of leading characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixSimilarity {
    prefix_length: usize,
    root_form: RootForm,
}

impl Default for PrefixSimilarity {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX_LENGTH, RootForm::Raw)
    }
}

impl PrefixSimilarity {
    /// A `prefix_length` of zero is raised to one
    pub fn new(prefix_length: usize, root_form: RootForm) -> Self {
        Self {
            prefix_length: prefix_length.max(1),
            root_form,
        }
    }

    pub fn prefix_length(&self) -> usize {
        self.prefix_length
    }

    pub fn root_form(&self) -> RootForm {
        self.root_form
    }

    /// Identical or empty strings are never similar. A root shorter than
    /// the prefix length is compared whole.
    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        if a == b || a.is_empty() || b.is_empty() {
            return false;
        }

        let root_a = self.root(a);
        let root_b = self.root(b);

        leading_chars(&root_a, self.prefix_length) == leading_chars(&root_b, self.prefix_length)
    }

    fn root<'a>(&self, skill: &'a str) -> Cow<'a, str> {
        match self.root_form {
            RootForm::Raw => Cow::Borrowed(skill),
            RootForm::Lemma => Cow::Owned(
                skill
                    .split(' ')
                    .map(lemmatize)
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
        }
    }
}

fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SkillMatcher {
    similarity: PrefixSimilarity,
}

impl SkillMatcher {
    pub fn new(similarity: PrefixSimilarity) -> Self {
        Self { similarity }
    }

    pub fn similarity(&self) -> &PrefixSimilarity {
        &self.similarity
    }

    pub fn match_skills(&self, resume_skills: &HashSet<String>, jd_skills: &HashSet<String>) -> MatchResult {
        let matched: HashSet<String> = resume_skills.intersection(jd_skills).cloned().collect();

        let mut partial = HashSet::new();
        let mut missing = HashSet::new();

        for skill in jd_skills.difference(&matched) {
            let similar_to = resume_skills
                .iter()
                .find(|resume_skill| self.similarity.is_similar(skill, resume_skill));

            match similar_to {
                Some(resume_skill) => {
                    debug!("Partial match: '{}' resembles resume skill '{}'", skill, resume_skill);
                    partial.insert(skill.clone());
                }
                None => {
                    missing.insert(skill.clone());
                }
            }
        }

        MatchResult {
            matched,
            partial,
            missing,
        }
    }
}
