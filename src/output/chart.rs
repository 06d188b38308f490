//! Matched / missing pie chart written as SVG

use crate::error::{Result, SkillMatcherError};
use std::f64::consts::PI;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Sink that turns skill counts into an image artifact
pub trait ChartRenderer {
    fn render(&self, matched: usize, missing: usize) -> Result<()>;
}

pub struct SvgPieChart {
    path: PathBuf,
    size: u32,
}

const MATCHED_COLOR: &str = "#1f77b4";
const MISSING_COLOR: &str = "#ff7f0e";

impl SvgPieChart {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            size: 500,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = size.max(100);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn to_svg(&self, matched: usize, missing: usize) -> String {
        let size = f64::from(self.size);
        let center = size / 2.0;
        let radius = size * 0.35;
        let total = matched + missing;

        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}" font-family="sans-serif" font-size="{1:.0}">"#,
            self.size,
            size * 0.035
        );
        let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="white"/>"#);

        if total == 0 {
            let _ = writeln!(
                svg,
                r##"  <circle cx="{0:.2}" cy="{0:.2}" r="{1:.2}" fill="none" stroke="#999999"/>"##,
                center, radius
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{0:.2}" y="{0:.2}" text-anchor="middle">No skills found</text>"#,
                center
            );
            svg.push_str("</svg>\n");
            return svg;
        }

        // Counter-clockwise from three o'clock
        let mut start_angle = 0.0_f64;
        for (label, count, color) in [("Matched", matched, MATCHED_COLOR), ("Missing", missing, MISSING_COLOR)] {
            if count == 0 {
                continue;
            }

            let fraction = count as f64 / total as f64;
            let sweep = fraction * 2.0 * PI;
            let end_angle = start_angle + sweep;

            if count == total {
                let _ = writeln!(
                    svg,
                    r#"  <circle cx="{0:.2}" cy="{0:.2}" r="{1:.2}" fill="{2}"/>"#,
                    center, radius, color
                );
            } else {
                let (x0, y0) = point(center, radius, start_angle);
                let (x1, y1) = point(center, radius, end_angle);
                let large_arc = if sweep > PI { 1 } else { 0 };
                let _ = writeln!(
                    svg,
                    r#"  <path d="M {c:.2} {c:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large_arc} 0 {x1:.2} {y1:.2} Z" fill="{color}"/>"#,
                    c = center,
                    r = radius,
                );
            }

            let middle = start_angle + sweep / 2.0;
            let (label_x, label_y) = point(center, radius * 1.15, middle);
            let (pct_x, pct_y) = point(center, radius * 0.6, middle);
            let _ = writeln!(
                svg,
                r#"  <text x="{label_x:.2}" y="{label_y:.2}" text-anchor="middle">{label}</text>"#
            );
            let _ = writeln!(
                svg,
                r#"  <text x="{pct_x:.2}" y="{pct_y:.2}" text-anchor="middle">{:.1}%</text>"#,
                fraction * 100.0
            );

            start_angle = end_angle;
        }

        svg.push_str("</svg>\n");
        svg
    }
}

fn point(center: f64, radius: f64, angle: f64) -> (f64, f64) {
    (center + radius * angle.cos(), center - radius * angle.sin())
}

impl ChartRenderer for SvgPieChart {
    fn render(&self, matched: usize, missing: usize) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SkillMatcherError::ChartRendering(format!("Cannot create {}: {}", parent.display(), e))
                })?;
            }
        }

        std::fs::write(&self.path, self.to_svg(matched, missing)).map_err(|e| {
            SkillMatcherError::ChartRendering(format!("Cannot write {}: {}", self.path.display(), e))
        })
    }
}
