use super::merged::MergedToken;
use super::phones::PhoneCursor;
use crate::engine::config::OutputConfig;
use crate::engine::error::LineError;
use crate::normalize::Token;

/// Result of a scan that did not run out of phone tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Merge {
    pub tokens: Vec<MergedToken>,
    /// Number of phone tokens consumed
    pub consumed: usize,
    /// Phone tokens never consumed; non-empty means the cardinalities disagree.
    pub leftover: Vec<String>,
}

impl Merge {
    pub fn is_exact(&self) -> bool {
        self.leftover.is_empty()
    }
}

pub struct Merger {
    config: OutputConfig,
}

impl Merger {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Walks the word tokens left to right, consuming phone tokens in lockstep.
    ///
    /// Standalone punctuation consumes nothing, a compound word consumes one
    /// phone token per segment and every other word consumes exactly one.
    /// Running out of phone tokens fails the whole line.
    pub fn merge(&self, tokens: &[Token], phones: &[String]) -> Result<Merge, LineError> {
        let mut cursor = PhoneCursor::new(phones);
        let mut merged = Vec::with_capacity(tokens.len());

        for token in tokens {
            if token.is_standalone_punctuation() {
                merged.push(MergedToken::Punctuation(token.punctuation.clone()));
                continue;
            }

            let phones_for_token =
                self.resolve_phones(token, &mut cursor)
                    .ok_or_else(|| LineError::CardinalityUnderflow {
                        words: tokens.iter().map(Token::written).collect(),
                        phones: phones.to_vec(),
                    })?;

            merged.push(MergedToken::Word {
                text: token.text.clone(),
                phones: phones_for_token,
                punctuation: token.punctuation.clone(),
            });
        }

        Ok(Merge {
            tokens: merged,
            consumed: cursor.consumed(),
            leftover: cursor.remaining().to_vec(),
        })
    }

    /// Merged tokens joined with single spaces.
    pub fn render(&self, merge: &Merge) -> String {
        merge
            .tokens
            .iter()
            .map(|token| token.render(&self.config))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn resolve_phones(&self, token: &Token, cursor: &mut PhoneCursor<'_>) -> Option<String> {
        let consumed = match self.compound_segments(&token.text) {
            Some(segments) => {
                let mut parts = Vec::with_capacity(segments);
                for _ in 0..segments {
                    parts.push(cursor.take()?);
                }
                parts.join(&self.config.compound_joiner)
            }
            None => {
                let phone = cursor.take()?;
                // phonemizers transcribe a written trailing colon as a length mark
                match phone.strip_suffix(':') {
                    Some(trimmed) if token.written().ends_with(':') => trimmed.to_string(),
                    _ => phone.to_string(),
                }
            }
        };

        match &token.embedded_phones {
            Some(embedded) if *embedded != consumed => Some(format!("{} {}", consumed, embedded)),
            _ => Some(consumed),
        }
    }

    /// Segment count of a word split on the compound separators, or `None`
    /// for a word without any separator.
    fn compound_segments(&self, text: &str) -> Option<usize> {
        if !text.contains(self.config.compound_separators.as_slice()) {
            return None;
        }
        let count = text
            .split(self.config.compound_separators.as_slice())
            .filter(|segment| !segment.is_empty())
            .count();
        (count > 0).then_some(count)
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new(OutputConfig::default())
    }
}
