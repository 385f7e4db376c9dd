use super::{PhonemizeError, Phonemizer};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

/// Runs an external program once per utterance.
///
/// The text is written to the program's stdin; its stdout is the phone
/// annotation.
#[derive(Debug, Clone)]
pub struct CommandPhonemizer {
    program: String,
    args: Vec<String>,
}

impl CommandPhonemizer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Phonemizer for CommandPhonemizer {
    fn phonemize(&self, text: &str) -> Result<String, PhonemizeError> {
        let spawn_error = |source| PhonemizeError::Spawn {
            program: self.program.clone(),
            source,
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = stdin
                .write_all(text.as_bytes())
                .and_then(|_| stdin.write_all(b"\n"));
            // a program that exits without reading its input is judged by its status
            match written {
                Err(err) if err.kind() != ErrorKind::BrokenPipe => return Err(spawn_error(err)),
                _ => {}
            }
        }

        let output = child.wait_with_output().map_err(spawn_error)?;
        if !output.status.success() {
            return Err(PhonemizeError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| PhonemizeError::InvalidOutput)?;
        let annotation = stdout.trim_end_matches(['\n', '\r']);
        if annotation.trim().is_empty() {
            return Err(PhonemizeError::Empty);
        }
        Ok(annotation.to_string())
    }
}
