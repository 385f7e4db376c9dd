use thiserror::Error;

/// A per-line problem worth reporting on the error channel.
///
/// Failures skip the line; warnings (`MalformedKey`, `CardinalityOverflow`)
/// travel alongside an emitted line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LineError {
    #[error("no text after utterance key: {line:?}")]
    MissingText { line: String },

    #[error("too many '|' separators ({fields} fields), using the first two: {line:?}")]
    MalformedKey { line: String, fields: usize },

    #[error("phonemization failed for {text:?}: {reason}")]
    Phonemization { text: String, reason: String },

    #[error("cannot merge, phone tokens exhausted; words {words:?}, phones {phones:?}")]
    CardinalityUnderflow {
        words: Vec<String>,
        phones: Vec<String>,
    },

    #[error("cannot merge, {leftover} phone token(s) left over; words {words:?}, phones {phones:?}")]
    CardinalityOverflow {
        words: Vec<String>,
        phones: Vec<String>,
        leftover: usize,
    },
}

/// Why a line produced no output without any diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankLine,
    /// Digits must be spelled out upstream
    NumericContent,
    /// Nothing left to say, e.g. punctuation-only text
    EmptyResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underflow_message_carries_both_sequences() {
        let err = LineError::CardinalityUnderflow {
            words: vec!["Hi".to_string(), "there".to_string()],
            phones: vec!["HI".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("\"there\""));
        assert!(message.contains("\"HI\""));
    }

    #[test]
    fn test_overflow_message_counts_leftover() {
        let err = LineError::CardinalityOverflow {
            words: vec!["a".to_string()],
            phones: vec!["A".to_string(), "B".to_string()],
            leftover: 1,
        };
        assert!(err.to_string().contains("1 phone token(s) left over"));
    }

    #[test]
    fn test_malformed_key_error() {
        let err = LineError::MalformedKey {
            line: "a|b|c|d".to_string(),
            fields: 4,
        };
        assert!(matches!(err, LineError::MalformedKey { fields: 4, .. }));
    }
}
