//! Integration tests for the skill matcher

use skill_matcher::config::{MatchingConfig, OutputFormat, PhraseMatching, RootForm};
use skill_matcher::input::manager::InputManager;
use skill_matcher::output::chart::{ChartRenderer, SvgPieChart};
use skill_matcher::output::formatter::{save_report_to_file, ReportGenerator};
use skill_matcher::processing::document::DocumentType;
use skill_matcher::processing::text_processor::{TextProcessor, TokenNormalizer};
use skill_matcher::processing::SkillAnalyzer;
use skill_matcher::{build_recommendations, extract_skills, match_skills, SkillMatcherError, SkillVocabulary};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn fixture_vocabulary() -> Arc<SkillVocabulary> {
    Arc::new(SkillVocabulary::load(Path::new("tests/fixtures/skills.txt")))
}

fn set(items: &[&str]) -> HashSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = manager.extract_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("machine learning"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = manager.extract_text(path).await.unwrap();
    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    assert!(text.contains("machine learning"));
    // Should not contain markdown formatting
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains('`'));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let text1 = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let text2 = manager.extract_text(path).await.unwrap();
    assert_eq!(text1, text2);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);

    let mut uncached = InputManager::new().with_cache(false);
    uncached.extract_text(path).await.unwrap();
    assert_eq!(uncached.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillMatcherError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = manager.extract_text(path).await;
    assert!(matches!(result, Err(SkillMatcherError::InvalidInput(_))));
}

#[tokio::test]
async fn test_load_document() {
    let mut manager = InputManager::new();
    let document = manager
        .load_document(Path::new("tests/fixtures/sample_job.txt"), DocumentType::JobDescription)
        .await
        .unwrap();

    assert_eq!(document.document_type, DocumentType::JobDescription);
    assert_eq!(document.file_name(), "sample_job.txt");
    assert!(document.metadata.word_count > 10);
    assert!(!document.is_blank());
}

#[tokio::test]
async fn test_analyze_fixture_documents() {
    let mut manager = InputManager::new();
    let resume = manager
        .load_document(Path::new("tests/fixtures/sample_resume.txt"), DocumentType::Resume)
        .await
        .unwrap();
    let job = manager
        .load_document(Path::new("tests/fixtures/sample_job.txt"), DocumentType::JobDescription)
        .await
        .unwrap();

    let analyzer = SkillAnalyzer::new(fixture_vocabulary());
    let report = analyzer.analyze_documents(&resume, &job);

    assert_eq!(report.resume_skills, vec!["docker", "git", "java", "machine learning", "python", "react"]);
    assert_eq!(report.job_skills, vec!["docker", "javascript", "kubernetes", "machine learning", "python", "sql"]);
    assert_eq!(report.matched_skills, vec!["docker", "machine learning", "python"]);
    assert_eq!(report.partial_matches, vec!["javascript"]);
    assert_eq!(report.missing_skills, vec!["kubernetes", "sql"]);
    assert_eq!(
        report.recommendations,
        vec![
            "Learn 'kubernetes' to improve your match score.",
            "Learn 'sql' to improve your match score.",
        ]
    );
    assert_eq!(report.summary.match_percentage, 50);
    assert_eq!(report.metadata.resume_file, "sample_resume.txt");
    assert_eq!(report.metadata.vocabulary_size, 11);
}

#[tokio::test]
async fn test_analyze_markdown_resume() {
    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    let report = SkillAnalyzer::new(fixture_vocabulary()).analyze(&resume, &job);

    assert_eq!(report.matched_skills, vec!["docker", "kubernetes", "machine learning", "python", "sql"]);
    assert!(report.partial_matches.is_empty());
    assert_eq!(report.missing_skills, vec!["javascript"]);
    assert_eq!(report.summary.match_percentage, 83);
}

#[tokio::test]
async fn test_missing_vocabulary_matches_nothing() {
    let dir = TempDir::new().unwrap();
    let vocabulary = Arc::new(SkillVocabulary::load(&dir.path().join("missing.txt")));
    assert!(vocabulary.is_empty());

    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();

    let report = SkillAnalyzer::new(vocabulary).analyze(&resume, &job);
    assert_eq!(report.summary.job_skill_count, 0);
    assert_eq!(report.summary.match_percentage, 0);
    assert!(report.recommendations.is_empty());
}

#[test]
fn test_library_pipeline() {
    let vocabulary = SkillVocabulary::from_lines(["python", "java", "javascript", "machine learning", "sql"]);
    let normalizer = TextProcessor::new().with_protected_terms(vocabulary.words());

    let resume_tokens = normalizer.normalize("Python and Java developer, some machine learning.");
    let job_tokens = normalizer.normalize("Looking for JavaScript, SQL and machine learning skills.");

    let resume = extract_skills(&resume_tokens, &vocabulary);
    let job = extract_skills(&job_tokens, &vocabulary);
    assert_eq!(resume, set(&["python", "java", "machine learning"]));
    assert_eq!(job, set(&["javascript", "sql", "machine learning"]));

    let result = match_skills(&resume, &job);
    assert_eq!(result.matched, set(&["machine learning"]));
    assert_eq!(result.partial, set(&["javascript"]));
    assert_eq!(result.missing, set(&["sql"]));

    assert_eq!(
        build_recommendations(&result.missing),
        vec!["Learn 'sql' to improve your match score."]
    );
}

#[test]
fn test_configured_analyzer_token_window() {
    let vocabulary = Arc::new(SkillVocabulary::from_lines(["data science", "python"]));
    let config = MatchingConfig {
        prefix_length: 3,
        root_form: RootForm::Lemma,
        phrase_matching: PhraseMatching::TokenWindow,
    };

    let analyzer = SkillAnalyzer::from_config(vocabulary, &config);
    assert!(analyzer.extract("Metadata science").is_empty());
    assert_eq!(analyzer.extract("Python for data science"), set(&["python", "data science"]));
}

#[tokio::test]
async fn test_reports_and_chart_written_to_disk() {
    let dir = TempDir::new().unwrap();
    let mut manager = InputManager::new();
    let resume = manager.extract_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let job = manager.extract_text(Path::new("tests/fixtures/sample_job.txt")).await.unwrap();
    let report = SkillAnalyzer::new(fixture_vocabulary()).analyze(&resume, &job);

    let generator = ReportGenerator::with_options(false, true, true, true);
    for (format, name) in [
        (OutputFormat::Json, "report.json"),
        (OutputFormat::Markdown, "report.md"),
        (OutputFormat::Html, "report.html"),
        (OutputFormat::Console, "report.txt"),
    ] {
        let content = generator.generate_report(&report, &format).unwrap();
        let path = dir.path().join("reports").join(name);
        save_report_to_file(&content, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let kubernetes = written.find("kubernetes").unwrap();
        let sql = written.rfind("sql").unwrap();
        assert!(kubernetes < sql, "missing skills out of order in {}", name);
    }

    let chart_path = dir.path().join("static").join("graph.svg");
    SvgPieChart::new(&chart_path)
        .render(report.summary.matched_count, report.summary.missing_count)
        .unwrap();

    let svg = std::fs::read_to_string(&chart_path).unwrap();
    assert!(svg.contains(">Matched<"));
    assert!(svg.contains(">Missing<"));
    assert!(svg.contains("60.0%"));
    assert!(svg.contains("40.0%"));
}

#[test]
fn test_shipped_vocabulary_is_extractable() {
    let vocabulary = SkillVocabulary::load(Path::new("skills_list.txt"));
    assert!(!vocabulary.is_empty());

    for skill in vocabulary.iter() {
        assert!(
            skill.chars().all(|c| c.is_alphabetic() || c == ' '),
            "'{}' can never be extracted from alphabetic tokens",
            skill
        );
    }

    let analyzer = SkillAnalyzer::new(Arc::new(vocabulary));
    assert!(analyzer.extract("Scikit-learn and Power BI dashboards").contains("scikit learn"));
}
