//! Output formatters for skill reports

use crate::config::OutputFormat;
use crate::error::{Result, SkillMatcherError};
use crate::output::report::SkillReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting skill reports
pub trait OutputFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Skill Match Report</title>
    {% if include_styles %}
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; line-height: 1.6; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .skill { display: inline-block; padding: 4px 12px; margin: 4px; border-radius: 14px; color: white; }
        .matched { background: #28a745; }
        .partial { background: #ffc107; color: #000; }
        .missing { background: #dc3545; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Skill Match Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ report.metadata.processing_time_ms }}ms</p>
            <h3>Match: {{ report.summary.match_percentage }}% ({{ report.summary.matched_count }} of {{ report.summary.job_skill_count }} skills)</h3>
            <p>{{ report.verdict() }}</p>
        </div>

        <div class="section">
            <h2>Matched Skills</h2>
            {% for skill in report.matched_skills %}<span class="skill matched">{{ skill }}</span>{% endfor %}
            {% if report.matched_skills.is_empty() %}<p>None</p>{% endif %}
        </div>

        <div class="section">
            <h2>Partial Matches</h2>
            {% for skill in report.partial_matches %}<span class="skill partial">{{ skill }}</span>{% endfor %}
            {% if report.partial_matches.is_empty() %}<p>None</p>{% endif %}
        </div>

        <div class="section">
            <h2>Missing Skills</h2>
            {% for skill in report.missing_skills %}<span class="skill missing">{{ skill }}</span>{% endfor %}
            {% if report.missing_skills.is_empty() %}<p>None</p>{% endif %}
        </div>

        {% if !report.recommendations.is_empty() %}
        <div class="section">
            <h2>Recommendations</h2>
            <ul>
            {% for recommendation in report.recommendations %}
                <li>{{ recommendation }}</li>
            {% endfor %}
            </ul>
        </div>
        {% endif %}

        <div class="section">
            <h2>Skills Found in Resume</h2>
            <p>{{ resume_skills }}</p>
        </div>

        <div class="metadata">
            <p><strong>Generated by Skill Matcher v{{ report.metadata.matcher_version }}</strong></p>
            <p><strong>Vocabulary:</strong> {{ report.metadata.vocabulary_size }} skills | <strong>Prefix length:</strong> {{ report.metadata.prefix_length }}</p>
            {% if !report.metadata.resume_file.is_empty() %}
            <p><strong>Resume:</strong> {{ report.metadata.resume_file }} | <strong>Job:</strong> {{ report.metadata.job_file }}</p>
            {% endif %}
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate<'a> {
    include_styles: bool,
    generated_at: String,
    resume_skills: String,
    report: &'a SkillReport,
}

fn format_timestamp(report: &SkillReport) -> String {
    chrono::DateTime::<chrono::Utc>::from(report.metadata.generated_at)
        .format("%Y-%m-%d %H:%M:%S UTC")
        .to_string()
}

fn join_or_none(skills: &[String]) -> String {
    if skills.is_empty() {
        "none".to_string()
    } else {
        skills.join(", ")
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let (badge, color) = match score {
            80..=100 => ("STRONG", Color::Green),
            60..=79 => ("GOOD", Color::Yellow),
            40..=59 => ("PARTIAL", Color::BrightYellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_skill_list(&self, title: &str, skills: &[String], color: Color) -> String {
        let mut output = self.format_header(&format!("{} ({})", title, skills.len()), 2);
        if skills.is_empty() {
            output.push_str("  none\n");
        }
        for skill in skills {
            output.push_str(&format!("  • {}\n", self.colorize(skill, color)));
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("SKILL MATCH ANALYSIS", 1));
        output.push_str(&format!("Generated: {} | Processing time: {}ms\n",
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        output.push_str(&format!("\nMatch: {}% {} ({} of {} job skills)\n",
            report.summary.match_percentage,
            self.format_score_badge(report.summary.match_percentage),
            report.summary.matched_count,
            report.summary.job_skill_count
        ));
        output.push_str(&format!("Verdict: {}\n", self.colorize(report.verdict(), Color::Cyan)));

        output.push_str(&self.format_skill_list("Matched Skills", &report.matched_skills, Color::Green));
        output.push_str(&self.format_skill_list("Partial Matches", &report.partial_matches, Color::Yellow));
        output.push_str(&self.format_skill_list("Missing Skills", &report.missing_skills, Color::Red));

        if !report.has_gaps() && report.summary.job_skill_count > 0 {
            output.push_str(&format!("\n{}\n", self.colorize("Every job skill is covered by the resume", Color::Green)));
        }

        if !report.recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            for (i, recommendation) in report.recommendations.iter().enumerate() {
                output.push_str(&format!("  {}. {}\n", i + 1, recommendation));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("Extracted Skills", 3));
            output.push_str(&format!("Resume ({}): {}\n",
                report.summary.resume_skill_count,
                join_or_none(&report.resume_skills)
            ));
            output.push_str(&format!("Job description ({}): {}\n",
                report.summary.job_skill_count,
                join_or_none(&report.job_skills)
            ));
        }

        output.push_str(&format!("\n{} Generated by Skill Matcher v{} | Vocabulary: {} skills\n",
            self.colorize("ℹ", Color::Blue),
            report.metadata.matcher_version,
            report.metadata.vocabulary_size
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let template = HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: format_timestamp(report),
            resume_skills: join_or_none(&report.resume_skills),
            report,
        };
        template.render().map_err(|e| SkillMatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_skill_section(title: &str, skills: &[String]) -> String {
        let mut output = format!("## {}\n\n", title);
        if skills.is_empty() {
            output.push_str("_None_\n\n");
            return output;
        }
        for skill in skills {
            output.push_str(&format!("- `{}`\n", skill));
        }
        output.push('\n');
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &SkillReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Skill Match Report\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Generated:** {} | **Processing Time:** {}ms\n",
                format_timestamp(report),
                report.metadata.processing_time_ms
            ));
            if !report.metadata.resume_file.is_empty() {
                output.push_str(&format!("**Resume:** `{}` | **Job:** `{}`\n",
                    report.metadata.resume_file,
                    report.metadata.job_file
                ));
            }
            output.push('\n');
        }

        output.push_str(&format!("**Match:** {}% ({} of {} job skills)\n\n",
            report.summary.match_percentage,
            report.summary.matched_count,
            report.summary.job_skill_count
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.verdict()));

        output.push_str("| Category | Count |\n");
        output.push_str("|----------|-------|\n");
        output.push_str(&format!("| Matched | {} |\n", report.summary.matched_count));
        output.push_str(&format!("| Partial | {} |\n", report.summary.partial_count));
        output.push_str(&format!("| Missing | {} |\n\n", report.summary.missing_count));

        output.push_str(&Self::markdown_skill_section("Matched Skills", &report.matched_skills));
        output.push_str(&Self::markdown_skill_section("Partial Matches", &report.partial_matches));
        output.push_str(&Self::markdown_skill_section("Missing Skills", &report.missing_skills));

        if !report.recommendations.is_empty() {
            output.push_str("## Recommendations\n\n");
            for (i, recommendation) in report.recommendations.iter().enumerate() {
                output.push_str(&format!("{}. {}\n", i + 1, recommendation));
            }
            output.push('\n');
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!("*Generated by Skill Matcher v{} with a {}-skill vocabulary*\n",
                report.metadata.matcher_version,
                report.metadata.vocabulary_size
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate_report(&self, report: &SkillReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_skills{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_skills{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_skills{}.md", base_name, timestamp_suffix),
        OutputFormat::Html => format!("{}_skills{}.html", base_name, timestamp_suffix),
    }
}
