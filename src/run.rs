use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::categorize::Categorizer;
use crate::import::{CsvImporter, CsvOptions};
use crate::report;

/// Prompt for a transactions file on stdin, then print the report.
pub(crate) fn interactive() -> Result<()> {
    let path = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        prompt_for_path(&mut stdin.lock(), &mut stdout.lock())?
    };
    let stdout = io::stdout();
    report_on(&path, &CsvOptions::default(), &mut stdout.lock())
}

/// Skip the prompt and report on the given file directly.
pub(crate) fn from_path(path: &str) -> Result<()> {
    let stdout = io::stdout();
    report_on(Path::new(path), &CsvOptions::default(), &mut stdout.lock())
}

pub(crate) fn report_on(path: &Path, options: &CsvOptions, out: &mut impl Write) -> Result<()> {
    let transactions = CsvImporter::load(path, options)?;
    let categorizer = Categorizer::new()?;
    let report = report::summarize(&categorizer, &transactions);
    report::render(&report, out)
}

/// Re-prompt until the line source yields a path to an existing file.
/// EOF ends the loop with an error, so piped stdin (and tests) terminate
/// instead of spinning.
pub(crate) fn prompt_for_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    loop {
        write!(
            output,
            "Enter the transactions file path relative to current directory: "
        )?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read file path from input")?;
        if read == 0 {
            anyhow::bail!("No transactions file path provided");
        }

        let candidate = PathBuf::from(line.trim());
        if candidate.is_file() {
            return Ok(candidate);
        }
        writeln!(output, "File does not exist! Please try again.")?;
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
