use super::config::{Config, PhoneConfig};
use super::error::{LineError, SkipReason};
use crate::align::{prepare_phones, Merger};
use crate::input::{parse_line, ParseOutcome, Utterance};
use crate::normalize::Normalizer;
use crate::phonemizer::Phonemizer;

/// What became of one input line
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// The annotated line, ready to print
    Emitted(String),
    /// Nothing to print and nothing to report
    Skipped(SkipReason),
    Failed(LineError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineReport {
    /// Utterance id, once the line got far enough to have one
    pub utterance: Option<String>,
    pub outcome: LineOutcome,
    /// Reported problems that did not stop the line
    pub warnings: Vec<LineError>,
}

impl LineReport {
    fn new(utterance: Option<String>, outcome: LineOutcome) -> Self {
        Self {
            utterance,
            outcome,
            warnings: Vec::new(),
        }
    }

    pub fn emitted(&self) -> Option<&str> {
        match &self.outcome {
            LineOutcome::Emitted(line) => Some(line),
            _ => None,
        }
    }
}

/// Normalizer, phonemizer and merger composed for one line at a time.
pub struct Annotator<P: Phonemizer> {
    normalizer: Normalizer,
    merger: Merger,
    phone_config: PhoneConfig,
    phonemizer: P,
}

impl<P: Phonemizer> Annotator<P> {
    pub fn new(config: Config, phonemizer: P) -> Self {
        Self {
            normalizer: Normalizer::new(config.normalizer),
            merger: Merger::new(config.output),
            phone_config: config.phones,
            phonemizer,
        }
    }

    /// Parse a raw corpus line and annotate it.
    pub fn annotate_line(&self, line: &str) -> LineReport {
        match parse_line(line, self.merger.config()) {
            ParseOutcome::Skipped(reason) => LineReport::new(None, LineOutcome::Skipped(reason)),
            ParseOutcome::Failed(error) => LineReport::new(None, LineOutcome::Failed(error)),
            ParseOutcome::Parsed(parsed) => {
                let mut report = self.annotate(&parsed.utterance);
                if let Some(warning) = parsed.warning {
                    report.warnings.insert(0, warning);
                }
                report
            }
        }
    }

    pub fn annotate(&self, utterance: &Utterance) -> LineReport {
        let id = Some(utterance.id.clone());

        let normalized = match self.normalizer.normalize(&utterance.text) {
            Ok(normalized) => normalized,
            Err(reason) => return LineReport::new(id, LineOutcome::Skipped(reason)),
        };
        if normalized.tokens.is_empty() {
            return LineReport::new(id, LineOutcome::Skipped(SkipReason::EmptyResult));
        }

        let text = normalized.phonemizer_input();
        let raw_phones = match self.phonemizer.phonemize(&text) {
            Ok(raw) => raw,
            Err(err) => {
                let error = LineError::Phonemization {
                    text,
                    reason: err.to_string(),
                };
                return LineReport::new(id, LineOutcome::Failed(error));
            }
        };
        let phones = prepare_phones(&raw_phones, &self.phone_config);

        let merge = match self.merger.merge(&normalized.tokens, &phones) {
            Ok(merge) => merge,
            Err(error) => return LineReport::new(id, LineOutcome::Failed(error)),
        };

        let body = self.merger.render(&merge);
        if body.is_empty() {
            return LineReport::new(id, LineOutcome::Skipped(SkipReason::EmptyResult));
        }

        let line = format!("{}{}{}", utterance.id, self.merger.config().id_separator, body);
        let mut report = LineReport::new(id, LineOutcome::Emitted(line));
        if !merge.is_exact() {
            report.warnings.push(LineError::CardinalityOverflow {
                words: normalized.words(),
                leftover: merge.leftover.len(),
                phones,
            });
        }
        report
    }
}
