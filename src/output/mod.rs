//! Report structures, formatters and charts

pub mod chart;
pub mod formatter;
pub mod report;

pub use report::SkillReport;
