//! Phonemizer collaborator
//!
//! The core never converts graphemes itself; it consumes whatever a
//! `Phonemizer` returns: word-level units separated by three spaces, the
//! symbols of a unit separated by single spaces.

pub mod command;

pub use command::CommandPhonemizer;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhonemizeError {
    #[error("failed to start phonemizer {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("phonemizer exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },

    #[error("phonemizer output is not valid UTF-8")]
    InvalidOutput,

    #[error("phonemizer returned no output")]
    Empty,
}

pub trait Phonemizer {
    fn phonemize(&self, text: &str) -> Result<String, PhonemizeError>;
}

impl<F> Phonemizer for F
where
    F: Fn(&str) -> Result<String, PhonemizeError>,
{
    fn phonemize(&self, text: &str) -> Result<String, PhonemizeError> {
        self(text)
    }
}
