/// One whitespace-delimited unit of cleaned utterance text
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Token {
    pub text: String,
    /// Phonetic annotation written by the transcript author, e.g. `Kowalski[kovalski]`.
    pub embedded_phones: Option<String>,
    /// Trailing punctuation in original order (e.g. "?!" for "word?!").
    pub punctuation: String,
}

impl Token {
    pub fn word(text: &str, punctuation: &str) -> Self {
        Self {
            text: text.to_string(),
            embedded_phones: None,
            punctuation: punctuation.to_string(),
        }
    }

    pub fn standalone(punctuation: &str) -> Self {
        Self::word("", punctuation)
    }

    pub fn with_embedded(mut self, phones: &str) -> Self {
        self.embedded_phones = Some(phones.to_string());
        self
    }

    /// Punctuation with no word attached; consumes no phone token.
    pub fn is_standalone_punctuation(&self) -> bool {
        self.text.is_empty() && self.embedded_phones.is_none() && !self.punctuation.is_empty()
    }

    /// Nothing written and nothing annotated.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.embedded_phones.is_none() && self.punctuation.is_empty()
    }

    /// The word as written, without any embedded annotation.
    pub fn written(&self) -> String {
        format!("{}{}", self.text, self.punctuation)
    }
}
