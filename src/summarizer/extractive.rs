use std::sync::LazyLock;

use regex::Regex;

/// Texts shorter than this (in characters) are returned as they are
pub const SHORT_TEXT_THRESHOLD: usize = 300;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"));

/// Crude local summarizer: first two sentences plus the last one.
///
/// Best effort only, there is no notion of sentence importance. Pure and
/// infallible, which is what makes it usable as the last line of defense
/// behind the external summarizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractiveSummarizer;

impl ExtractiveSummarizer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, text: &str) -> String {
        if text.chars().count() < SHORT_TEXT_THRESHOLD {
            return text.to_string();
        }

        let sentences = split_sentences(text);
        if sentences.len() <= 3 {
            return text.to_string();
        }

        let last = sentences[sentences.len() - 1];
        [sentences[0], sentences[1], last].join(" ")
    }
}

/// Split after `.`, `!` or `?` followed by whitespace; the punctuation stays
/// with its sentence. Fragments are trimmed and empty ones dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY.find_iter(text) {
        // punctuation is a single ASCII byte
        let end = boundary.start() + 1;
        sentences.push(&text[start..end]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text() -> String {
        [
            "The city council approved the new transit plan on Tuesday after months of debate.",
            "Supporters say the plan will cut commute times across the region.",
            "Opponents argued that the cost estimates were far too optimistic.",
            "Construction is expected to begin next spring with federal funding.",
            "The first new line should open to riders within four years!",
        ]
        .join(" ")
    }

    #[test]
    fn test_short_text_unchanged() {
        let text = "Short. Text. With. Many. Sentences.";
        assert_eq!(ExtractiveSummarizer::new().summarize(text), text);
    }

    #[test]
    fn test_text_just_below_threshold_unchanged() {
        let text = "a. ".repeat(99) + "ab";
        assert_eq!(text.chars().count(), 299);
        assert_eq!(ExtractiveSummarizer::new().summarize(&text), text);
    }

    #[test]
    fn test_first_two_and_last_sentence() {
        let text = long_text();
        assert!(text.chars().count() >= SHORT_TEXT_THRESHOLD);

        let summary = ExtractiveSummarizer::new().summarize(&text);

        assert_eq!(
            summary,
            "The city council approved the new transit plan on Tuesday after months of debate. \
             Supporters say the plan will cut commute times across the region. \
             The first new line should open to riders within four years!"
        );
    }

    #[test]
    fn test_three_sentences_returned_unchanged() {
        let text = format!(
            "{}. {}? {}!",
            "x".repeat(120),
            "y".repeat(120),
            "z".repeat(120)
        );
        assert_eq!(ExtractiveSummarizer::new().summarize(&text), text);
    }

    #[test]
    fn test_summarizing_own_output_is_safe() {
        let summarizer = ExtractiveSummarizer::new();
        let once = summarizer.summarize(&long_text());
        let twice = summarizer.summarize(&once);

        assert!(twice.len() <= once.len());
        assert_eq!(twice, once, "a three-sentence summary is stable");
    }

    #[test]
    fn test_split_sentences_keeps_punctuation() {
        assert_eq!(
            split_sentences("One. Two!  Three?\nFour"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
    }

    #[test]
    fn test_split_sentences_ignores_inner_dots() {
        assert_eq!(
            split_sentences("Version 1.75 shipped. It works."),
            vec!["Version 1.75 shipped.", "It works."]
        );
    }

    #[test]
    fn test_split_sentences_drops_empty_fragments() {
        assert_eq!(split_sentences("   "), Vec::<&str>::new());
        assert_eq!(split_sentences("Trailing. "), vec!["Trailing."]);
    }

    #[test]
    fn test_multibyte_text() {
        let sentence = "Über die Brücke fährt täglich ein Zug nach München. ";
        let text = sentence.repeat(8);
        let summary = ExtractiveSummarizer::new().summarize(&text);

        assert_eq!(
            summary,
            [sentence.trim(), sentence.trim(), sentence.trim()].join(" ")
        );
    }
}
