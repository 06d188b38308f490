//! Skill matcher library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{Result, SkillMatcherError};
pub use processing::{build_recommendations, extract_skills, match_skills, MatchResult, SkillVocabulary};
