//! Skill analysis pipeline: texts in, skill report out

use crate::config::MatchingConfig;
use crate::output::report::{MatchSummary, ReportMetadata, SkillReport};
use crate::processing::document::Document;
use crate::processing::extractor::SkillExtractor;
use crate::processing::matcher::{sorted, PrefixSimilarity, SkillMatcher};
use crate::processing::recommendations::build_recommendations;
use crate::processing::text_processor::{TextProcessor, TokenNormalizer};
use crate::processing::vocabulary::SkillVocabulary;
use log::{debug, info};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Runs normalization, extraction, matching and recommendation for one
/// resume / job description pair.
///
/// The vocabulary is shared read-only, so one analyzer can serve
/// concurrent requests from several threads.
pub struct SkillAnalyzer {
    vocabulary: Arc<SkillVocabulary>,
    normalizer: Box<dyn TokenNormalizer>,
    extractor: SkillExtractor,
    matcher: SkillMatcher,
}

impl SkillAnalyzer {
    pub fn new(vocabulary: Arc<SkillVocabulary>) -> Self {
        let normalizer = TextProcessor::new().with_protected_terms(vocabulary.words());

        Self {
            vocabulary,
            normalizer: Box::new(normalizer),
            extractor: SkillExtractor::default(),
            matcher: SkillMatcher::default(),
        }
    }

    pub fn from_config(vocabulary: Arc<SkillVocabulary>, config: &MatchingConfig) -> Self {
        let similarity = PrefixSimilarity::new(config.prefix_length, config.root_form);

        let analyzer = Self::new(vocabulary)
            .with_extractor(SkillExtractor::new(config.phrase_matching))
            .with_matcher(SkillMatcher::new(similarity));

        debug!(
            "Matching {:?} phrases, partials on the first {} chars of {:?} roots",
            analyzer.extractor.phrase_matching(),
            analyzer.matcher.similarity().prefix_length(),
            analyzer.matcher.similarity().root_form()
        );
        analyzer
    }

    pub fn with_normalizer(mut self, normalizer: Box<dyn TokenNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_extractor(mut self, extractor: SkillExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_matcher(mut self, matcher: SkillMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    /// Skills found in a single raw text
    pub fn extract(&self, text: &str) -> HashSet<String> {
        let tokens = self.normalizer.normalize(text);
        debug!("Normalized {} tokens", tokens.len());
        self.extractor.extract(&tokens, &self.vocabulary)
    }

    pub fn analyze(&self, resume_text: &str, job_text: &str) -> SkillReport {
        self.run(resume_text, job_text, String::new(), String::new())
    }

    pub fn analyze_documents(&self, resume: &Document, job: &Document) -> SkillReport {
        self.run(&resume.content, &job.content, resume.file_name(), job.file_name())
    }

    fn run(&self, resume_text: &str, job_text: &str, resume_file: String, job_file: String) -> SkillReport {
        let start_time = Instant::now();

        let resume_skills = self.extract(resume_text);
        let job_skills = self.extract(job_text);
        info!(
            "Extracted {} resume skills and {} job description skills",
            resume_skills.len(),
            job_skills.len()
        );

        let result = self.matcher.match_skills(&resume_skills, &job_skills);
        let recommendations = build_recommendations(&result.missing);
        info!(
            "Matched {}, partial {}, missing {}",
            result.matched.len(),
            result.partial.len(),
            result.missing.len()
        );

        let summary = MatchSummary::new(
            result.matched.len(),
            result.partial.len(),
            result.missing.len(),
            resume_skills.len(),
        );

        SkillReport {
            summary,
            matched_skills: result.sorted_matched(),
            partial_matches: result.sorted_partial(),
            missing_skills: result.sorted_missing(),
            resume_skills: sorted(&resume_skills),
            job_skills: sorted(&job_skills),
            recommendations,
            metadata: ReportMetadata {
                generated_at: SystemTime::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file,
                job_file,
                vocabulary_size: self.vocabulary.len(),
                prefix_length: self.matcher.similarity().prefix_length(),
                processing_time_ms: start_time.elapsed().as_millis() as u64,
            },
        }
    }
}
