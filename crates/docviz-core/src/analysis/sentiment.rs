//! Per-line sentiment polarity and the positive/neutral/negative tally.
//!
//! Lines are scored with the VADER lexicon; the compound score is the
//! polarity.

use serde::Serialize;
use tracing::trace;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::models::config::SentimentConfig;

/// Number of lines in each sentiment class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

impl SentimentTally {
    pub fn total(&self) -> usize {
        self.positive + self.neutral + self.negative
    }
}

/// Polarity of one line in [-1, 1]. Lines without scored words are 0.
pub fn polarity(line: &str) -> f32 {
    let analyzer = SentimentIntensityAnalyzer::new();
    // The lexicon's contractions ("isn't", "don't") use ASCII apostrophes.
    let line = line.replace('’', "'");
    let scores = analyzer.polarity_scores(&line);
    let compound = scores.get("compound").copied().unwrap_or(0.0);
    (compound as f32).clamp(-1.0, 1.0)
}

/// Score every non-blank line of `text` and count the classes.
pub fn sentiment_tally(text: &str, config: &SentimentConfig) -> SentimentTally {
    let mut tally = SentimentTally::default();
    for line in text.split('\n').filter(|l| !l.trim().is_empty()) {
        let score = polarity(line);
        trace!("{:+.3} {}", score, line);
        if score > config.positive_threshold {
            tally.positive += 1;
        } else if score < config.negative_threshold {
            tally.negative += 1;
        } else {
            tally.neutral += 1;
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_love_hate_scenario() {
        let tally = sentiment_tally("I love this!\n\nI hate this!", &SentimentConfig::default());
        assert_eq!(
            tally,
            SentimentTally {
                positive: 1,
                neutral: 0,
                negative: 1,
            }
        );
    }

    #[test]
    fn test_tally_sums_to_non_blank_lines() {
        let text = "Great work.\n  \nThe meeting is at noon.\nThis is awful\n\n\tnothing here\nnot bad";
        let tally = sentiment_tally(text, &SentimentConfig::default());
        let non_blank = text.split('\n').filter(|l| !l.trim().is_empty()).count();
        assert_eq!(tally.total(), non_blank);
    }

    #[test]
    fn test_neutral_line() {
        assert_eq!(polarity("The meeting is at noon."), 0.0);
    }

    #[test]
    fn test_negation_flips_and_damps() {
        let plain = polarity("this is good");
        let negated = polarity("this is not good");
        assert!(plain > 0.0);
        assert!(negated < 0.0);
        assert!(negated.abs() < plain.abs());
        assert!(polarity("this isn’t bad") > 0.0);
    }

    #[test]
    fn test_boosters_and_emphasis() {
        assert!(polarity("very good") > polarity("good"));
        assert!(polarity("good!!!") > polarity("good"));
    }

    #[test]
    fn test_common_sentiment_words() {
        assert!(polarity("The performance was outstanding") > 0.1);
        assert!(polarity("A fabulous, terrific result") > 0.1);
        assert!(polarity("What a dreadful, miserable day") < -0.1);
        assert!(polarity("The staff were rude") < -0.1);
    }

    #[test]
    fn test_polarity_is_bounded() {
        for line in [
            "best best best best best!!!",
            "worst horrible awful terrible disgusting!!!",
        ] {
            let score = polarity(line);
            assert!((-1.0..=1.0).contains(&score), "{} out of range for {:?}", score, line);
        }
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let config = SentimentConfig {
            positive_threshold: 0.9,
            negative_threshold: -0.9,
        };
        let tally = sentiment_tally("I love this", &config);
        assert_eq!(tally.neutral, 1);
    }
}
