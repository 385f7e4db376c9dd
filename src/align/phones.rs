use crate::engine::config::PhoneConfig;

/// Splits raw phonemizer output into per-word phone tokens.
///
/// Units are separated by `unit_separator`; the symbols inside a unit are
/// re-joined with `phone_separator`. Boundary sentinels and empty units
/// are dropped.
pub fn prepare_phones(raw: &str, config: &PhoneConfig) -> Vec<String> {
    raw.trim()
        .split(config.unit_separator.as_str())
        .map(|unit| {
            unit.split_whitespace()
                .collect::<Vec<_>>()
                .join(&config.phone_separator)
        })
        .filter(|unit| !unit.is_empty() && !config.boundary_sentinels.contains(unit))
        .collect()
}

/// Read position into a prepared phone-token sequence.
#[derive(Debug, Clone)]
pub struct PhoneCursor<'a> {
    tokens: &'a [String],
    position: usize,
}

impl<'a> PhoneCursor<'a> {
    pub fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.tokens.len()
    }

    /// Consumes the next phone token, or `None` once exhausted.
    pub fn take(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token.as_str())
    }

    pub fn consumed(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> &'a [String] {
        &self.tokens[self.position.min(self.tokens.len())..]
    }
}
