use super::Normalizer;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref HYPHEN_RUN: Regex = Regex::new(r"-{2,}").unwrap();
    static ref DOT_RUN: Regex = Regex::new(r"\.{2,3}").unwrap();
    // "!." / ".!" / ".?." keep only the stronger mark
    static ref REDUNDANT_TERMINAL: Regex = Regex::new(r"\.?([!?])\.?").unwrap();
}

const DASHES: [char; 2] = ['\u{2014}', '\u{2013}'];

impl Normalizer {
    /// Rewrite raw text until none of the cleaning rules applies any more.
    pub fn clean(&self, raw: &str) -> String {
        let mut current = self.clean_once(raw);
        loop {
            let next = self.clean_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }

    fn clean_once(&self, raw: &str) -> String {
        let text = self.strip_leading(raw);

        let text = text.replace(DASHES, "-");
        let text = HYPHEN_RUN.replace_all(&text, "-");
        let text = DOT_RUN.replace_all(&text, "…");
        let text = REDUNDANT_TERMINAL.replace_all(&text, "$1");

        let mut text: String = text
            .chars()
            .filter(|c| !self.config.quotes.contains(c))
            .collect();
        if !self.config.unknown_marker.is_empty() {
            text = text.replace(&self.config.unknown_marker, "");
        }

        // rewrites above can expose new leading punctuation
        self.strip_leading(&text).to_string()
    }

    fn strip_leading<'a>(&self, text: &'a str) -> &'a str {
        text.trim_start_matches(|c: char| c.is_whitespace() || self.config.is_punctuation(c))
            .trim_end()
    }
}
