//! Skill extraction and matching module

pub mod analyzer;
pub mod document;
pub mod extractor;
pub mod matcher;
pub mod recommendations;
pub mod text_processor;
pub mod vocabulary;

pub use analyzer::SkillAnalyzer;
pub use extractor::extract_skills;
pub use matcher::{match_skills, MatchResult};
pub use recommendations::build_recommendations;
pub use vocabulary::SkillVocabulary;
