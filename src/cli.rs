//! CLI interface for the skill matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Extensions accepted for resumes and job descriptions
pub const DOCUMENT_EXTENSIONS: &[&str] = &["pdf", "txt", "md", "markdown"];

#[derive(Parser)]
#[command(name = "skill-matcher")]
#[command(about = "Compare the skills in a resume against a job description")]
#[command(long_about = "Extract known skills from a resume and a job description, then report matched, partially matched and missing skills with learning recommendations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against a job description
    Analyze {
        /// Path to resume file (PDF, TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to job description file (PDF, TXT, MD)
        #[arg(short, long)]
        job: PathBuf,

        /// Skill vocabulary file, one skill per line
        #[arg(long)]
        skills: Option<PathBuf>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Write a matched / missing pie chart (SVG)
        #[arg(long)]
        chart: Option<PathBuf>,

        /// List every extracted skill
        #[arg(short, long)]
        detailed: bool,

        /// Number of leading characters compared for partial matches
        #[arg(long)]
        prefix_length: Option<usize>,
    },

    /// Skill vocabulary commands
    Skills {
        /// Skill vocabulary file, one skill per line
        #[arg(long)]
        skills: Option<PathBuf>,

        #[command(subcommand)]
        action: SkillsAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum SkillsAction {
    /// List the vocabulary in sorted order
    List,

    /// Show the skills found in one document
    Check {
        /// Path to a resume or job description
        path: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
