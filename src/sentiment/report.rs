//! Report formatting module
//!
//! Renders the analysis text returned to the caller: the label message
//! followed by the four scores.

use super::label::SentimentLabel;
use super::scorer::SentimentScores;

/// Build the multi-line analysis report.
///
/// Line 1 is the label message, line 2 the compound score to two decimal
/// places, lines 3-5 the positive/negative/neutral fractions as percentages
/// with two decimal places.
pub fn build_report(label: SentimentLabel, scores: &SentimentScores) -> String {
    format!(
        "{}\n\
         Compound Score (Overall sentiment, -1 to 1): {:.2}\n\
         Positive: {:.2}%\n\
         Negative: {:.2}%\n\
         Neutral: {:.2}%",
        label.message(),
        scores.compound,
        scores.positive * 100.0,
        scores.negative * 100.0,
        scores.neutral * 100.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_scores() -> SentimentScores {
        SentimentScores {
            positive: 0.45,
            negative: 0.0,
            neutral: 0.55,
            compound: 0.6696,
        }
    }

    #[test]
    fn test_report_shape() {
        let report = build_report(SentimentLabel::Pos, &sample_scores());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "It is a sentence carrying a positive vibe.");
        assert_eq!(
            lines
                .iter()
                .filter(|l| l.starts_with("Compound Score"))
                .count(),
            1
        );
        assert_eq!(lines.iter().filter(|l| l.ends_with('%')).count(), 3);
    }

    #[test]
    fn test_compound_rendered_to_two_decimals() {
        let report = build_report(SentimentLabel::Pos, &sample_scores());
        assert!(report.contains("Compound Score (Overall sentiment, -1 to 1): 0.67"));

        let negative = SentimentScores {
            compound: -0.4215,
            ..sample_scores()
        };
        let report = build_report(SentimentLabel::Neg, &negative);
        assert!(report.contains("-1 to 1): -0.42"));
    }

    #[test]
    fn test_percentages_sum_to_hundred() {
        let scores = SentimentScores {
            positive: 0.213,
            negative: 0.108,
            neutral: 0.679,
            compound: 0.1,
        };
        let report = build_report(SentimentLabel::Pos, &scores);

        let total: f64 = report
            .lines()
            .filter(|l| l.ends_with('%'))
            .map(|l| {
                let value = l
                    .split(": ")
                    .nth(1)
                    .and_then(|v| v.trim_end_matches('%').parse::<f64>().ok());
                value.expect("percentage line should parse")
            })
            .sum();
        assert!((total - 100.0).abs() <= 0.01, "total: {total}");
    }

    #[test]
    fn test_neutral_report_uses_neutral_template() {
        let scores = SentimentScores {
            positive: 0.0,
            negative: 0.0,
            neutral: 1.0,
            compound: 0.0,
        };
        let report = build_report(SentimentLabel::Neutral, &scores);
        assert!(report.starts_with("It is a sentence carrying a neutral vibe."));
        assert!(report.contains("Neutral: 100.00%"));
    }
}
