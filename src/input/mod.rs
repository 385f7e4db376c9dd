use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where corpus lines come from
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "stdin".to_string(),
            InputSource::File(path) => format!("file:{}", path.display()),
        }
    }
}

/// Opens the source as a line reader.
pub fn open_source(source: &InputSource) -> Result<Box<dyn BufRead>, LoadError> {
    match source {
        InputSource::Stdin => Ok(Box::new(BufReader::new(io::stdin()))),
        InputSource::File(path) => Ok(Box::new(open_file_safe(path)?)),
    }
}

/// Opens a corpus file. An empty file is valid input with no lines.
pub fn open_file_safe(path: &Path) -> Result<BufReader<File>, LoadError> {
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => LoadError::FileNotFound(path.to_path_buf()),
        _ => LoadError::Io(err),
    })?;
    Ok(BufReader::new(file))
}

pub mod line;

pub use line::{parse_line, utterance_id, ParseOutcome, ParsedLine, Utterance};
