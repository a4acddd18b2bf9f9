use std::fmt;

use crate::screening::ScreeningReport;

/// Qualitative band for a match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for ScoreTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScoreTier::Strong => "strong",
            ScoreTier::Moderate => "moderate",
            ScoreTier::Weak => "weak",
        };
        write!(f, "{name}")
    }
}

/// Band a score: >= 0.7 strong, >= 0.4 moderate, below that weak.
pub fn score_tier(score: f64) -> ScoreTier {
    if score >= 0.7 {
        ScoreTier::Strong
    } else if score >= 0.4 {
        ScoreTier::Moderate
    } else {
        ScoreTier::Weak
    }
}

/// Render a [0,1] score as a whole percentage, e.g. `82%`.
///
/// Rounds to one decimal of a percent first so values like 0.815, which
/// sit just under the half point in binary, still round up.
pub fn format_percent(score: f64) -> String {
    let percent = ((score * 1000.0).round() / 10.0).round() as i64;
    format!("{percent}%")
}

/// The report URL to download, when the service produced one.
pub fn download_request(report: &ScreeningReport) -> Option<&str> {
    report.report_url.as_deref()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries() {
        assert_eq!(score_tier(1.0), ScoreTier::Strong);
        assert_eq!(score_tier(0.7), ScoreTier::Strong);
        assert_eq!(score_tier(0.6999), ScoreTier::Moderate);
        assert_eq!(score_tier(0.4), ScoreTier::Moderate);
        assert_eq!(score_tier(0.3999), ScoreTier::Weak);
        assert_eq!(score_tier(0.0), ScoreTier::Weak);
    }

    #[test]
    fn tier_display_is_lowercase() {
        assert_eq!(ScoreTier::Strong.to_string(), "strong");
        assert_eq!(ScoreTier::Moderate.to_string(), "moderate");
        assert_eq!(ScoreTier::Weak.to_string(), "weak");
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(format_percent(0.815), "82%");
        assert_eq!(format_percent(0.5), "50%");
        assert_eq!(format_percent(0.824), "82%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }

    #[test]
    fn download_request_returns_url_when_present() {
        let mut report = ScreeningReport {
            results: Vec::new(),
            report_url: Some("/download-report/r1.pdf".into()),
        };
        assert_eq!(download_request(&report), Some("/download-report/r1.pdf"));

        report.report_url = None;
        assert_eq!(download_request(&report), None);
    }
}
