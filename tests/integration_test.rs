use annotrans::align::{prepare_phones, strip_annotations, Merger};
use annotrans::app::App;
use annotrans::engine::config::PhoneConfig;
use annotrans::engine::{Annotator, Config, LineError, LineOutcome, SkipReason};
use annotrans::input::{open_source, InputSource};
use annotrans::normalize::Normalizer;
use annotrans::phonemizer::PhonemizeError;
use std::io::Write;

fn fixed(output: &'static str) -> impl Fn(&str) -> Result<String, PhonemizeError> {
    move |_: &str| Ok(output.to_string())
}

/// Spells every letter of every word, words split on '-' and '.' as a
/// word-level phonemizer would.
fn spelling(text: &str) -> Result<String, PhonemizeError> {
    let units: Vec<String> = text
        .split(|c: char| c.is_whitespace() || c == '-' || c == '.')
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphabetic())
                .map(|c| c.to_uppercase().to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|unit| !unit.is_empty())
        .collect();
    Ok(units.join("   "))
}

#[test]
fn scenario_exact_merge() {
    let annotator = Annotator::new(Config::default(), fixed("H E L O   W O R L D"));
    let report = annotator.annotate_line("utt001|Hello, world!");
    assert_eq!(report.emitted(), Some("utt001 Hello[HELO], world[WORLD]!"));
}

#[test]
fn scenario_hyphenated_compound() {
    let annotator = Annotator::new(Config::default(), fixed("I T S   W E L   N O N"));
    let report = annotator.annotate_line("utt002|It's well-known.");
    assert_eq!(report.emitted(), Some("utt002 It's[ITS] well-known[WEL+NON]."));
}

#[test]
fn scenario_digit_guard() {
    let annotator = Annotator::new(Config::default(), fixed("X"));
    let report = annotator.annotate_line("utt003|Room 42 is empty.");
    assert_eq!(report.outcome, LineOutcome::Skipped(SkipReason::NumericContent));
    assert!(report.warnings.is_empty());
}

#[test]
fn scenario_underflow_emits_nothing() {
    let app = App::new(Annotator::new(Config::default(), fixed("H I   ")));
    let mut output = Vec::new();

    let summary = app
        .run("utt004|Hi there.\n".as_bytes(), &mut output)
        .unwrap();

    assert!(output.is_empty());
    assert_eq!(summary.failed, 1);

    let annotator = Annotator::new(Config::default(), fixed("H I   "));
    let report = annotator.annotate_line("utt004|Hi there.");
    match report.outcome {
        LineOutcome::Failed(LineError::CardinalityUnderflow { words, phones }) => {
            assert_eq!(words, vec!["Hi", "there."]);
            assert_eq!(phones, vec!["HI"]);
        }
        other => panic!("Expected underflow, got {:?}", other),
    }
}

#[test]
fn scenario_duplicated_colon() {
    let annotator = Annotator::new(Config::default(), fixed("K A F E:"));
    let report = annotator.annotate_line("utt005|Café:");
    assert_eq!(report.emitted(), Some("utt005 Café[KAFE]:"));
}

#[test]
fn end_to_end_file_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "wavs/a.wav|„Dzień dobry” — powiedział.").unwrap();
    writeln!(file, "b|Mamy 3 koty.").unwrap();
    writeln!(file, "c Tak... to prawda?!").unwrap();
    writeln!(file, "d|a|b|c|d").unwrap();

    let reader = open_source(&InputSource::File(file.path().to_path_buf())).unwrap();
    let app = App::new(Annotator::new(Config::default(), spelling));
    let mut output = Vec::new();
    let summary = app.run(reader, &mut output).unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "a Dzień[DZIEŃ] dobry[DOBRY] - powiedział[POWIEDZIAŁ].\n\
         c Tak[TAK]… to[TO] prawda[PRAWDA]?!\n\
         d a[A]\n"
    );
    assert_eq!(summary.lines, 4);
    assert_eq!(summary.emitted, 3);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.warnings, 1);
}

#[test]
fn cleaning_is_a_fixed_point() {
    let normalizer = Normalizer::default();
    let samples = [
        "— „Tak!.” -- powiedział...",
        "...?. odd .. spacing ?.",
        "<unk> \"quoted\" – text",
        "a.\".\" b",
    ];
    for sample in samples {
        let once = normalizer.clean(sample);
        assert_eq!(normalizer.clean(&once), once);
    }
}

#[test]
fn consumption_matches_word_and_segment_count() {
    let normalizer = Normalizer::default();
    let merger = Merger::default();
    let text = "Mr.Smith - a well-known co-op member , said: yes!";

    let normalized = normalizer.normalize(text).unwrap();
    let phones = prepare_phones(&spelling(&normalized.phonemizer_input()).unwrap(), &PhoneConfig::default());
    let merge = merger.merge(&normalized.tokens, &phones).unwrap();

    let expected: usize = normalized
        .tokens
        .iter()
        .filter(|t| !t.is_standalone_punctuation())
        .map(|t| {
            t.text
                .split(|c: char| c == '-' || c == '.')
                .filter(|s| !s.is_empty())
                .count()
        })
        .sum();
    assert_eq!(merge.consumed, expected);
    assert_eq!(merge.consumed, phones.len());
    assert!(merge.is_exact());
}

#[test]
fn standalone_punctuation_does_not_change_consumption() {
    let normalizer = Normalizer::default();
    let merger = Merger::default();
    let phones: Vec<String> = vec!["JES".to_string(), "NO".to_string()];

    for text in ["yes no", "yes - no", "yes - … - no ,"] {
        let normalized = normalizer.normalize(text).unwrap();
        let merge = merger.merge(&normalized.tokens, &phones).unwrap();
        assert_eq!(merge.consumed, 2, "for {:?}", text);
        assert!(merge.is_exact());
    }
}

#[test]
fn stripping_annotations_restores_cleaned_text() {
    let normalizer = Normalizer::default();
    let annotator = Annotator::new(Config::default(), spelling);

    for text in [
        "Hello, world!",
        "It's well-known.",
        "— Wait... really?!",
        "yes - no",
        "odd[word",
        "a [] b",
    ] {
        let report = annotator.annotate_line(&format!("id|{}", text));
        let line = report.emitted().unwrap();
        let body = line.strip_prefix("id ").unwrap();

        let normalized = normalizer.normalize(text).unwrap();
        let expected = normalized
            .tokens
            .iter()
            .map(|t| t.written())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(strip_annotations(body, "[", "]"), expected);
    }
}
