use crate::engine::config::OutputConfig;
use crate::engine::error::{LineError, SkipReason};

/// One corpus line: utterance id plus its raw transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Utterance {
    pub id: String,
    pub text: String,
}

/// A parsed line and the non-fatal problem found while parsing it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLine {
    pub utterance: Utterance,
    pub warning: Option<LineError>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed(ParsedLine),
    Skipped(SkipReason),
    Failed(LineError),
}

/// Most pipe fields accepted; a third one (e.g. normalized text) is ignored.
const MAX_PIPE_FIELDS: usize = 3;

/// Parse `key|text` or `key<whitespace>text` into an utterance.
///
/// Supports:
/// - `utt001|Hello` and `utt001|Hello|hello` (third field ignored)
/// - `wavs/utt001.wav Hello` → id `utt001`
/// - more than three `|` fields → MalformedKey warning, first two fields used
/// - key without text → MissingText failure
pub fn parse_line(line: &str, config: &OutputConfig) -> ParseOutcome {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return ParseOutcome::Skipped(SkipReason::BlankLine);
    }

    let mut warning = None;
    let split = if line.contains('|') {
        let fields: Vec<&str> = line.split('|').collect();
        if fields.len() > MAX_PIPE_FIELDS {
            warning = Some(LineError::MalformedKey {
                line: line.to_string(),
                fields: fields.len(),
            });
        }
        Some((fields[0], fields[1]))
    } else {
        line.trim().split_once(char::is_whitespace)
    };

    let Some((key, text)) = split else {
        return ParseOutcome::Failed(LineError::MissingText {
            line: line.to_string(),
        });
    };

    let text = text.trim();
    if text.is_empty() {
        return ParseOutcome::Failed(LineError::MissingText {
            line: line.to_string(),
        });
    }

    ParseOutcome::Parsed(ParsedLine {
        utterance: Utterance {
            id: utterance_id(key, &config.audio_extension),
            text: text.to_string(),
        },
        warning,
    })
}

/// Strip the audio extension and any directory from a corpus key.
pub fn utterance_id(key: &str, audio_extension: &str) -> String {
    let key = key.trim();
    let key = if audio_extension.is_empty() {
        key
    } else {
        key.strip_suffix(audio_extension).unwrap_or(key)
    };
    match key.rfind('/') {
        Some(idx) => key[idx + 1..].to_string(),
        None => key.to_string(),
    }
}
