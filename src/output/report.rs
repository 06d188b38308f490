//! Report structures produced by a skill analysis

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Everything one resume / job description comparison produced.
///
/// Every list is sorted lexicographically so output is reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillReport {
    pub summary: MatchSummary,

    /// Job description skills also found in the resume
    pub matched_skills: Vec<String>,

    /// Job description skills close to a resume skill
    pub partial_matches: Vec<String>,

    /// Job description skills with no counterpart in the resume
    pub missing_skills: Vec<String>,

    pub resume_skills: Vec<String>,
    pub job_skills: Vec<String>,

    /// One suggestion per missing skill
    pub recommendations: Vec<String>,

    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSummary {
    pub matched_count: usize,
    pub partial_count: usize,
    pub missing_count: usize,
    pub resume_skill_count: usize,
    pub job_skill_count: usize,

    /// Matched skills as a share of the job description's skills (0-100)
    pub match_percentage: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub matcher_version: String,
    pub resume_file: String,
    pub job_file: String,
    pub vocabulary_size: usize,
    pub prefix_length: usize,
    pub processing_time_ms: u64,
}

impl MatchSummary {
    pub fn new(matched: usize, partial: usize, missing: usize, resume_skill_count: usize) -> Self {
        let job_skill_count = matched + partial + missing;
        let match_percentage = if job_skill_count == 0 {
            0
        } else {
            ((matched as f64 / job_skill_count as f64) * 100.0).round() as u8
        };

        Self {
            matched_count: matched,
            partial_count: partial,
            missing_count: missing,
            resume_skill_count,
            job_skill_count,
            match_percentage,
        }
    }
}

impl SkillReport {
    pub fn has_gaps(&self) -> bool {
        !self.missing_skills.is_empty() || !self.partial_matches.is_empty()
    }

    /// Short one-line verdict for the match percentage
    pub fn verdict(&self) -> &'static str {
        if self.summary.job_skill_count == 0 {
            return "No known skills were found in the job description";
        }
        match self.summary.match_percentage {
            80..=100 => "Strong match for this role",
            60..=79 => "Good match with a few gaps",
            40..=59 => "Partial match, several skills to develop",
            _ => "Weak match, significant skill gaps",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_percentage() {
        let summary = MatchSummary::new(2, 1, 1, 5);
        assert_eq!(summary.job_skill_count, 4);
        assert_eq!(summary.match_percentage, 50);

        let thirds = MatchSummary::new(1, 0, 2, 1);
        assert_eq!(thirds.match_percentage, 33);
    }

    #[test]
    fn test_no_job_skills() {
        let summary = MatchSummary::new(0, 0, 0, 3);
        assert_eq!(summary.match_percentage, 0);
    }
}
