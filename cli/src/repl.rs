use std::io::{BufRead, Write};

use tutorbook_core::error::CliError;

use crate::session::{render_outcome, Session};

/// Reads command lines from `input` until `exit` or end of input.
///
/// Rejected lines print their error and the loop carries on; only storage
/// and I/O failures end it.
pub fn run_repl(
    session: &mut Session,
    input: impl BufRead,
    out: &mut impl Write,
    prompt: bool,
) -> Result<(), CliError> {
    if prompt {
        write!(out, "> ")?;
        out.flush()?;
    }
    for line in input.lines() {
        let line = line?;
        match session.handle_line(&line) {
            Ok(outcome) => {
                render_outcome(out, &outcome)?;
                if outcome.exit {
                    return Ok(());
                }
            }
            Err(e @ (CliError::Parse(_) | CliError::Command(_))) => {
                tracing::debug!(error = %e, "rejected input");
                writeln!(out, "{e}")?;
            }
            Err(e) => return Err(e),
        }
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
    }
    Ok(())
}
