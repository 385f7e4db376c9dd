use annotrans::app::App;
use annotrans::engine::{Annotator, Config};
use annotrans::input::{open_source, InputSource};
use annotrans::phonemizer::CommandPhonemizer;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Annotate corpus lines ("id|text") with inline phonemes: "id word[phones]punct ..."
#[derive(Parser, Debug)]
#[command(name = "annotrans", version)]
struct Cli {
    /// Corpus file; standard input is read when omitted and piped
    file: Option<PathBuf>,

    /// Phonemizer program, run once per utterance with the text on its stdin
    #[arg(short, long)]
    phonemizer: String,

    /// Argument passed to the phonemizer (repeatable)
    #[arg(long = "phonemizer-arg", allow_hyphen_values = true)]
    phonemizer_args: Vec<String>,

    #[arg(long)]
    open_bracket: Option<String>,

    #[arg(long)]
    close_bracket: Option<String>,

    /// Joins the phones of one word (default: none)
    #[arg(long)]
    phone_separator: Option<String>,

    /// Between the utterance id and the annotated text (default: one space)
    #[arg(long)]
    id_separator: Option<String>,

    /// Characters treated as punctuation, replacing the default set
    #[arg(long)]
    punctuation: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(open) = &self.open_bracket {
            config.output.open_bracket = open.clone();
        }
        if let Some(close) = &self.close_bracket {
            config.output.close_bracket = close.clone();
        }
        if let Some(separator) = &self.phone_separator {
            config.phones.phone_separator = separator.clone();
        }
        if let Some(separator) = &self.id_separator {
            config.output.id_separator = separator.clone();
        }
        if let Some(punctuation) = &self.punctuation {
            config.normalizer.punctuation = punctuation.chars().collect();
        }
        config
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let source = match &cli.file {
        Some(path) => InputSource::File(path.clone()),
        None if io::stdin().is_tty() => {
            eprintln!(
                "Error: use annotrans in a pipeline or give the path to the corpus file as an argument."
            );
            std::process::exit(1);
        }
        None => InputSource::Stdin,
    };

    let phonemizer = CommandPhonemizer::new(cli.phonemizer.clone(), cli.phonemizer_args.clone());
    info!(source = %source.describe(), phonemizer = phonemizer.program(), "annotating");

    let reader = open_source(&source)?;
    let app = App::new(Annotator::new(cli.config(), phonemizer));

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    match app.run(reader, &mut writer) {
        Ok(_) => Ok(()),
        // downstream closed early, e.g. `| head`
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err.into()),
    }
}
