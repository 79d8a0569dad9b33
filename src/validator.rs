use super::{
    io::{ReadError, TsvFileReader},
    state::State,
    types::Summary,
};
use std::{io::Write, path::Path};

/// Runs the whole pass over the file at `path`: the header line goes to `out`,
/// row diagnostics, the summary and duplicate keys go to `err`.
///
/// Malformed rows and duplicate keys are reported and never fail the run. A
/// read failure part way through aborts before the summary is written.
pub fn validate<P, O, E>(path: P, mut out: O, mut err: E) -> Result<Summary, ValidateError>
where
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let reader = TsvFileReader::from_path(path)?;
    log::debug!("header has {} fields", reader.header().len());

    writeln!(out, "Headers: {}", reader.header())?;
    out.flush()?;

    let mut state = State::new(reader.header());

    for result in reader {
        if let Some(mismatch) = state.process(result?) {
            writeln!(err, "{}", mismatch)?;
        }
    }

    let summary = state.write(&mut err)?;
    log::debug!(
        "read {} lines, {} distinct keys",
        summary.lines_in_file,
        summary.unique_keys
    );

    Ok(summary)
}

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("filename needed")]
    MissingArgument,
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("write failed: {0}")]
    Output(#[from] std::io::Error),
}
