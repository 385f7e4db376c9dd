use super::{Normalizer, Token};
use unicode_segmentation::UnicodeSegmentation;

impl Normalizer {
    /// Splits cleaned text on whitespace into tokens, left to right.
    /// A unit with nothing left after extraction (e.g. `[]`) yields no token.
    pub fn tokenize(&self, cleaned: &str) -> Vec<Token> {
        cleaned
            .split_whitespace()
            .map(|unit| self.tokenize_unit(unit))
            .filter(|token| !token.is_empty())
            .collect()
    }

    fn tokenize_unit(&self, unit: &str) -> Token {
        let (core, punctuation) = self.split_trailing_punctuation(unit);
        let (text, embedded_phones) = self.extract_embedded(core);
        Token {
            text,
            embedded_phones,
            punctuation: punctuation.to_string(),
        }
    }

    /// Returns `(core, suffix)` where `suffix` is the longest run of
    /// punctuation graphemes at the end of `word`.
    pub fn split_trailing_punctuation<'a>(&self, word: &'a str) -> (&'a str, &'a str) {
        let mut cut = word.len();
        for (idx, grapheme) in word.grapheme_indices(true).rev() {
            let mut chars = grapheme.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if self.config.is_punctuation(c) => cut = idx,
                _ => break,
            }
        }
        word.split_at(cut)
    }

    /// Pulls the first `[...]` group out of a word; the rest is its text.
    fn extract_embedded(&self, core: &str) -> (String, Option<String>) {
        let open = self.config.embedded_open;
        let close = self.config.embedded_close;

        let Some(start) = core.find(open) else {
            return (core.to_string(), None);
        };
        let inner_start = start + open.len_utf8();
        let Some(len) = core[inner_start..].find(close) else {
            return (core.to_string(), None);
        };
        let inner_end = inner_start + len;

        let text = format!("{}{}", &core[..start], &core[inner_end + close.len_utf8()..]);
        let phones = core[inner_start..inner_end].trim();
        let phones = (!phones.is_empty()).then(|| phones.to_string());
        (text, phones)
    }
}
