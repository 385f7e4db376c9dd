// App module - drives the annotator over an input stream, line by line
use crate::engine::{Annotator, LineOutcome, LineReport};
use crate::phonemizer::Phonemizer;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, warn};

/// Counts of what happened to the lines of one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub lines: usize,
    pub emitted: usize,
    pub skipped: usize,
    pub failed: usize,
    pub warnings: usize,
}

impl RunSummary {
    fn record(&mut self, report: &LineReport) {
        self.warnings += report.warnings.len();
        match report.outcome {
            LineOutcome::Emitted(_) => self.emitted += 1,
            LineOutcome::Skipped(_) => self.skipped += 1,
            LineOutcome::Failed(_) => self.failed += 1,
        }
    }
}

pub struct App<P: Phonemizer> {
    annotator: Annotator<P>,
}

impl<P: Phonemizer> App<P> {
    pub fn new(annotator: Annotator<P>) -> Self {
        Self { annotator }
    }

    /// Annotates every line of `reader` in order, writing emitted lines to `writer`.
    ///
    /// A line that cannot be annotated is reported and skipped; only I/O
    /// failures on the output end the run.
    pub fn run<R: BufRead, W: Write>(&self, mut reader: R, writer: &mut W) -> io::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = String::new();

        loop {
            buf.clear();
            match reader.read_line(&mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    summary.lines += 1;
                    summary.failed += 1;
                    warn!(line_no = summary.lines, "skipping line: {}", err);
                    continue;
                }
                Err(err) => return Err(err),
            }
            summary.lines += 1;

            let report = self.annotator.annotate_line(&buf);
            log_report(summary.lines, &report);
            if let LineOutcome::Emitted(line) = &report.outcome {
                writeln!(writer, "{}", line)?;
            }
            summary.record(&report);
        }

        writer.flush()?;
        info!(
            lines = summary.lines,
            emitted = summary.emitted,
            skipped = summary.skipped,
            failed = summary.failed,
            warnings = summary.warnings,
            "finished"
        );
        Ok(summary)
    }
}

fn log_report(line_no: usize, report: &LineReport) {
    let utterance = report.utterance.as_deref().unwrap_or("-");
    for warning in &report.warnings {
        warn!(line_no, utterance, "{}", warning);
    }
    match &report.outcome {
        LineOutcome::Emitted(_) => {}
        LineOutcome::Skipped(reason) => debug!(line_no, utterance, ?reason, "skipped"),
        LineOutcome::Failed(error) => warn!(line_no, utterance, "{}", error),
    }
}
