//! Stopword removal and case folding.

use super::stopwords::is_stopword;
use crate::models::request::NormalizeOptions;

/// Drop stopwords from whitespace-separated text.
///
/// Tokens are rejoined with single spaces, so line breaks do not survive.
pub fn remove_stopwords(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !is_stopword(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Apply the normalization switches in order: stopwords first, then case.
pub fn normalize(text: &str, options: &NormalizeOptions) -> String {
    let text = if options.remove_stopwords {
        remove_stopwords(text)
    } else {
        text.to_string()
    };

    if options.case_sensitive {
        text
    } else {
        text.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_remove_stopwords_joins_lines() {
        assert_eq!(remove_stopwords("The cat\nsat on   the mat"), "cat sat mat");
    }

    #[test]
    fn test_remove_stopwords_is_idempotent() {
        let inputs = [
            "The cat sat. The cat ran.",
            "  it is what it is  ",
            "Rust\tis a systems programming language\n\nWith Zero cost abstractions",
            "",
        ];
        for input in inputs {
            let once = remove_stopwords(input);
            assert_eq!(remove_stopwords(&once), once);
        }
    }

    #[test]
    fn test_case_insensitive_output_is_lowercase() {
        let options = NormalizeOptions {
            remove_stopwords: false,
            case_sensitive: false,
        };
        for input in ["Hello World", "ÀÉÎ Straße", "MiXeD cAsE 123"] {
            let output = normalize(input, &options);
            assert_eq!(output, output.to_lowercase());
        }
    }

    #[test]
    fn test_stopwords_compared_before_folding() {
        let options = NormalizeOptions {
            remove_stopwords: true,
            case_sensitive: true,
        };
        assert_eq!(normalize("The Cat sat", &options), "Cat sat");
    }

    #[test]
    fn test_default_normalization() {
        let output = normalize("The cat sat. The cat ran.", &NormalizeOptions::default());
        assert_eq!(output, "cat sat. cat ran.");
    }

    #[test]
    fn test_everything_filtered() {
        let output = normalize("the and of it", &NormalizeOptions::default());
        assert!(output.trim().is_empty());
    }

    #[test]
    fn test_disabled_keeps_text() {
        let options = NormalizeOptions {
            remove_stopwords: false,
            case_sensitive: true,
        };
        assert_eq!(normalize("The\ncat", &options), "The\ncat");
    }
}
