//! The interactive session: prompt, dispatch, reply.

pub mod commands;

pub use commands::{execute, parse, Command};

use crate::book::ContactDirectory;
use crate::config::Config;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Run the interactive loop until a farewell command or end of input.
///
/// Blank lines are skipped; every other line is parsed, executed against
/// the book, and answered on stdout. Saving the book is the caller's job
/// once this returns.
pub fn run(book: &mut ContactDirectory, config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        stdout.write_all(b">>> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF ends the session like a farewell would
            debug!("stdin closed, ending session");
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = commands::parse(input);
        debug!(?command, "dispatching");
        let reply = commands::execute(command, &args, book, config.page_size);
        writeln!(stdout, "{}", reply)?;

        if command == Command::Exit {
            break;
        }
    }
    Ok(())
}
