//! Skill matcher: compare the skills in a resume against a job description

use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use skill_matcher::cli::{self, Cli, Commands, ConfigAction, SkillsAction};
use skill_matcher::config::Config;
use skill_matcher::input::InputManager;
use skill_matcher::output::chart::{ChartRenderer, SvgPieChart};
use skill_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use skill_matcher::processing::document::DocumentType;
use skill_matcher::processing::{SkillAnalyzer, SkillVocabulary};
use skill_matcher::{Result, SkillMatcherError};
use std::path::{Path, PathBuf};
use std::future::Future;
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level)
    ).init();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, cli.config.as_deref()).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: Option<&Path>) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            skills,
            output,
            save,
            chart,
            detailed,
            prefix_length,
        } => {
            info!("Starting skill match analysis");

            cli::validate_file_extension(&resume, cli::DOCUMENT_EXTENSIONS)
                .map_err(|e| SkillMatcherError::InvalidInput(format!("Resume file: {}", e)))?;
            cli::validate_file_extension(&job, cli::DOCUMENT_EXTENSIONS)
                .map_err(|e| SkillMatcherError::InvalidInput(format!("Job description file: {}", e)))?;

            let output_format = match output {
                Some(format) => cli::parse_output_format(&format).map_err(SkillMatcherError::InvalidInput)?,
                None => config.output.format.clone(),
            };

            if let Some(length) = prefix_length {
                config.matching.prefix_length = length;
                config.validate()?;
            }

            let vocabulary = load_vocabulary(skills.as_deref(), &config);

            let mut input_manager = InputManager::new();
            let (resume_doc, job_doc) = while_spinning(spinner("Extracting text from documents...")?, async {
                let resume_doc = input_manager.load_document(&resume, DocumentType::Resume).await?;
                let job_doc = input_manager.load_document(&job, DocumentType::JobDescription).await?;
                Ok::<_, SkillMatcherError>((resume_doc, job_doc))
            })
            .await?;

            for document in [&resume_doc, &job_doc] {
                if document.is_blank() {
                    warn!("{} has no extractable text: {}", document.document_type, document.file_path);
                }
            }

            let analyzer = SkillAnalyzer::from_config(vocabulary, &config.matching);
            let report = analyzer.analyze_documents(&resume_doc, &job_doc);

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                config.output.pretty_json,
                true,
            );
            let formatted = generator.generate_report(&report, &output_format)?;

            match save {
                Some(path) => {
                    save_report_to_file(&formatted, &path)?;
                    println!("{} Report saved to {}", "✓".green(), path.display());
                }
                None => println!("{}", formatted),
            }

            if let Some(chart_path) = chart.or_else(|| config.output.chart_path.clone()) {
                let renderer = SvgPieChart::new(chart_path);
                renderer.render(report.summary.matched_count, report.summary.missing_count)?;
                println!("{} Chart written to {}", "✓".green(), renderer.path().display());
            }
        }

        Commands::Skills { skills, action } => {
            let vocabulary = load_vocabulary(skills.as_deref(), &config);

            match action {
                SkillsAction::List => {
                    println!("{} ({} skills)\n", "Skill Vocabulary".bold(), vocabulary.len());
                    for skill in vocabulary.sorted() {
                        println!("  • {}", skill);
                    }
                }

                SkillsAction::Check { path } => {
                    cli::validate_file_extension(&path, cli::DOCUMENT_EXTENSIONS)
                        .map_err(SkillMatcherError::InvalidInput)?;

                    let mut input_manager = InputManager::new();
                    let text = input_manager.extract_text(&path).await?;
                    let analyzer = SkillAnalyzer::from_config(vocabulary, &config.matching);

                    let mut found: Vec<String> = analyzer.extract(&text).into_iter().collect();
                    found.sort();

                    println!("{} {} ({} of {} known skills found)\n",
                        "Skills in".bold(),
                        path.display(),
                        found.len(),
                        analyzer.vocabulary().len()
                    );
                    for skill in &found {
                        println!("  • {}", skill.green());
                    }
                }
            }
        }

        Commands::Config { action } => {
            match action {
                Some(ConfigAction::Show) | None => {
                    println!("⚙️  Current Configuration\n");
                    println!("Vocabulary: {}", config.vocabulary_path().display());
                    println!("\nMatching:");
                    println!("  Prefix length: {}", config.matching.prefix_length);
                    println!("  Root form: {:?}", config.matching.root_form);
                    println!("  Phrase matching: {:?}", config.matching.phrase_matching);
                    println!("\nOutput:");
                    println!("  Format: {:?}", config.output.format);
                    println!("  Detailed: {}", config.output.detailed);
                    println!("  Colors: {}", config.output.color_output);
                    println!("  Pretty JSON: {}", config.output.pretty_json);
                    match &config.output.chart_path {
                        Some(path) => println!("  Chart: {}", path.display()),
                        None => println!("  Chart: disabled"),
                    }
                }

                Some(ConfigAction::Reset) => {
                    println!("🔄 Resetting configuration to defaults...");
                    match config_path {
                        Some(path) => Config::default().save_to(path)?,
                        None => Config::default().save()?,
                    }
                    println!("✅ Configuration reset successfully!");
                }

                Some(ConfigAction::Path) => {
                    let path = config_path.map(Path::to_path_buf).unwrap_or_else(Config::config_path);
                    println!("{}", path.display());
                }
            }
        }
    }

    Ok(())
}

/// Vocabulary from the `--skills` flag, falling back to the configured path
fn load_vocabulary(skills: Option<&Path>, config: &Config) -> Arc<SkillVocabulary> {
    let path: PathBuf = skills
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.vocabulary_path().to_path_buf());

    Arc::new(SkillVocabulary::load(&path))
}

fn spinner(message: &'static str) -> Result<ProgressBar> {
    let style = ProgressStyle::with_template("{spinner:.cyan} {msg}").map_err(anyhow::Error::from)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(style);
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}

/// Await `task` with the spinner drawn, clearing it whatever the outcome
async fn while_spinning<T>(spinner: ProgressBar, task: impl Future<Output = Result<T>>) -> Result<T> {
    let outcome = task.await;
    spinner.finish_and_clear();
    outcome
}
