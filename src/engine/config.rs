// Configuration for the normalizer, phone preparation and merged output.
// Every value has a documented default; the CLI overrides individual fields.

/// Text cleaning and tokenization settings
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizerConfig {
    /// Characters stripped from the start of a line and cut off the back of a word
    /// (default `. , ; : ! ? - … ) &` plus em and en dash)
    pub punctuation: Vec<char>,

    /// Quotation marks discarded entirely (default `"`, `„`, `“`, `”`)
    pub quotes: Vec<char>,

    /// Placeholder for an unknown token, removed from the text (default `<unk>`)
    pub unknown_marker: String,

    /// Brackets around an author-supplied phonetic annotation inside a word
    pub embedded_open: char,
    pub embedded_close: char,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            punctuation: vec![
                '.', ',', ';', ':', '!', '?', '-', '…', ')', '&', '\u{2014}', '\u{2013}',
            ],
            quotes: vec!['"', '\u{201E}', '\u{201C}', '\u{201D}'],
            unknown_marker: "<unk>".to_string(),
            embedded_open: '[',
            embedded_close: ']',
        }
    }
}

impl NormalizerConfig {
    pub fn is_punctuation(&self, c: char) -> bool {
        self.punctuation.contains(&c)
    }
}

/// How the phonemizer output is segmented
#[derive(Debug, Clone, PartialEq)]
pub struct PhoneConfig {
    /// Separator between word-level units (default three spaces)
    pub unit_separator: String,

    /// Units that mark a boundary and carry no phones
    pub boundary_sentinels: Vec<String>,

    /// Joins the symbols of one unit (default empty: symbols concatenated)
    pub phone_separator: String,
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            unit_separator: "   ".to_string(),
            boundary_sentinels: vec!["|".to_string(), "||".to_string()],
            phone_separator: String::new(),
        }
    }
}

/// Shape of the merged output line
#[derive(Debug, Clone, PartialEq)]
pub struct OutputConfig {
    pub open_bracket: String,
    pub close_bracket: String,

    /// Between the utterance id and the merged tokens (default one space)
    pub id_separator: String,

    /// Joins the phone tokens of a compound word (default `+`)
    pub compound_joiner: String,

    /// Characters splitting a word into compound segments (default `-` and `.`)
    pub compound_separators: Vec<char>,

    /// Extension stripped from utterance keys (default `.wav`)
    pub audio_extension: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            open_bracket: "[".to_string(),
            close_bracket: "]".to_string(),
            id_separator: " ".to_string(),
            compound_joiner: "+".to_string(),
            compound_separators: vec!['-', '.'],
            audio_extension: ".wav".to_string(),
        }
    }
}

/// Master configuration combining all annotrans settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub normalizer: NormalizerConfig,
    pub phones: PhoneConfig,
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_punctuation_includes_dashes() {
        let config = NormalizerConfig::default();
        assert!(config.is_punctuation('\u{2014}'));
        assert!(config.is_punctuation('\u{2013}'));
        assert!(config.is_punctuation('…'));
        assert!(!config.is_punctuation('('));
        assert!(!config.is_punctuation('a'));
    }

    #[test]
    fn test_default_output_shape() {
        let config = OutputConfig::default();
        assert_eq!(config.open_bracket, "[");
        assert_eq!(config.close_bracket, "]");
        assert_eq!(config.id_separator, " ");
        assert_eq!(config.compound_joiner, "+");
    }

    #[test]
    fn test_default_phone_segmentation() {
        let config = PhoneConfig::default();
        assert_eq!(config.unit_separator, "   ");
        assert!(config.phone_separator.is_empty());
        assert_eq!(config.boundary_sentinels, vec!["|", "||"]);
    }
}
