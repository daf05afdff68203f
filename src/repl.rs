//! Interactive REPL (Read-Eval-Print Loop).

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::output::{self, OutputFormat};
use crate::reducer;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strip one trailing line terminator (`\n` or `\r\n`) and nothing else.
fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Run the loop until end of input or an `exit`/`quit` line.
///
/// Results go to `out`. In text mode failures go to `err` as
/// `Error: <message>`; in JSON mode every report goes to `out`.
///
/// # Errors
///
/// Returns the first read or write error; the loop stops there. Invalid
/// UTF-8 is not a read error: the line is reduced like any other.
pub fn run<R, W, E>(mut input: R, out: &mut W, err: &mut E, settings: &Settings) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if settings.banner {
        writeln!(out, "noop v{PKG_VERSION}")?;
        writeln!(out, "Type 'exit' or press Ctrl+D to quit")?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", settings.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // EOF (Ctrl+D): finish the prompt line.
            writeln!(out)?;
            debug!("end of input");
            return Ok(());
        }
        // Undecodable bytes become U+FFFD and fail as an invalid character.
        let text = String::from_utf8_lossy(&buf);
        let line = strip_line_ending(&text);

        if line == "exit" || line == "quit" {
            debug!(command = line, "leaving repl");
            return Ok(());
        }

        let outcome = reducer::add(line);
        let rendered = output::render(settings.output_format, line, outcome)
            .map_err(io::Error::other)?;
        match (settings.output_format, outcome) {
            (OutputFormat::Text, Err(_)) => writeln!(err, "{rendered}")?,
            _ => writeln!(out, "{rendered}")?,
        }
    }
}

/// Start the REPL on the process's stdin, stdout and stderr.
///
/// # Errors
///
/// Returns the first I/O error on the standard streams.
pub fn run_repl(settings: &Settings) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    run(stdin.lock(), &mut stdout, &mut stderr, settings)
}
