//! The interactive read-eval-print shell.
//!
//! Generic over `BufRead`/`Write` so tests can drive a full session from a
//! scripted transcript. All user-visible text goes through `output`; logging
//! stays on stderr.

use crate::commands::{Dispatcher, Reply};
use crate::commands::handlers::{GOODBYE, GREETING};
use std::io::{self, BufRead, Write};

/// Prompt printed before each input line.
const PROMPT: &str = "Input command: ";

/// Run the interactive loop until the user quits or input ends.
///
/// Prints the greeting, then reads one line per turn, executes it through
/// the dispatcher, and prints the reply. End of input (Ctrl-D) is treated
/// like an explicit exit.
pub fn run<R, W>(mut input: R, mut output: W, dispatcher: &mut Dispatcher) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{GREETING}")?;

    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            writeln!(output, "{GOODBYE}")?;
            return Ok(());
        }

        match dispatcher.execute(&line) {
            Reply::Message(msg) => writeln!(output, "{msg}")?,
            Reply::Exit => {
                writeln!(output, "{GOODBYE}")?;
                return Ok(());
            }
        }
    }
}
