use std::sync::LazyLock;

use regex::Regex;

/// Tokens of this many characters or fewer carry no weight in the key
const MAX_INSIGNIFICANT_LEN: usize = 3;

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Order- and case-independent canonical form of a headline.
///
/// Two headlines with the same key are treated as the same story. Titles made
/// only of short words all share the empty key and therefore collapse into a
/// single duplicate group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedTitleKey(String);

impl NormalizedTitleKey {
    pub fn from_title(title: &str) -> Self {
        let mut words: Vec<String> = WORD_RE
            .find_iter(title)
            .map(|m| m.as_str().to_lowercase())
            .filter(|w| w.chars().count() > MAX_INSIGNIFICANT_LEN)
            .collect();

        words.sort();

        Self(words.join(" "))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
