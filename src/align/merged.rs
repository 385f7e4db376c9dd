use crate::engine::config::OutputConfig;

/// Output unit of the merger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergedToken {
    Word {
        text: String,
        phones: String,
        punctuation: String,
    },
    Punctuation(String),
}

impl MergedToken {
    /// `text[phones]punctuation`, or the bare punctuation.
    pub fn render(&self, config: &OutputConfig) -> String {
        match self {
            MergedToken::Word {
                text,
                phones,
                punctuation,
            } => format!(
                "{}{}{}{}{}",
                text, config.open_bracket, phones, config.close_bracket, punctuation
            ),
            MergedToken::Punctuation(punctuation) => punctuation.clone(),
        }
    }
}

/// Removes every `open ... close` group from a merged body.
///
/// Each `close` is paired with the nearest `open` before it, so a stray
/// bracket inside a word (`odd[word[ODWORD]`) stays with the word.
pub fn strip_annotations(body: &str, open: &str, close: &str) -> String {
    if open.is_empty() || close.is_empty() {
        return body.to_string();
    }

    let mut result = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(end) = rest.find(close) {
        let after_close = end + close.len();
        match rest[..end].rfind(open) {
            Some(start) => result.push_str(&rest[..start]),
            None => result.push_str(&rest[..after_close]),
        }
        rest = &rest[after_close..];
    }
    result.push_str(rest);
    result
}
