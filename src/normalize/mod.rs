//! Text normalizer
//!
//! Turns raw utterance text into a cleaned string and an ordered token
//! sequence that lines up with the phonemizer's per-word output.
//!
//! - **clean.rs**: the rewrite rules (dashes, ellipsis, quotes, leading punctuation)
//! - **tokenize.rs**: whitespace split, trailing punctuation cut, embedded annotations
//! - **token.rs**: the `Token` triple

pub mod clean;
pub mod token;
pub mod tokenize;

pub use token::Token;

use crate::engine::config::NormalizerConfig;
use crate::engine::error::SkipReason;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DIGIT: Regex = Regex::new(r"\d").unwrap();
}

pub struct Normalizer {
    config: NormalizerConfig,
}

/// Cleaned text plus its tokens, in original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    pub cleaned: String,
    pub tokens: Vec<Token>,
}

impl Normalized {
    /// Text handed to the phonemizer: the cleaned words with embedded annotations removed.
    pub fn phonemizer_input(&self) -> String {
        self.tokens
            .iter()
            .map(Token::written)
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Written form of every token, used in diagnostics.
    pub fn words(&self) -> Vec<String> {
        self.tokens.iter().map(Token::written).collect()
    }
}

impl Normalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// Clean and tokenize. Text containing a decimal digit is rejected
    /// before tokenization.
    pub fn normalize(&self, raw: &str) -> Result<Normalized, SkipReason> {
        let cleaned = self.clean(raw);
        if DIGIT.is_match(&cleaned) {
            return Err(SkipReason::NumericContent);
        }
        let tokens = self.tokenize(&cleaned);
        Ok(Normalized { cleaned, tokens })
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}
