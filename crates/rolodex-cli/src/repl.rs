use std::io::{self, BufRead, Write};

use crate::commands::{dispatch, parse_input, Context, Outcome};

pub const GREETING: &str = "Welcome to the assistance bot!";
pub const PROMPT: &str = "Enter a command >>> ";
pub const FAREWELL: &str = "Goodbye!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Exit,
    EndOfInput,
}

/// Reads commands line by line until `close`/`exit` or end of input.
/// Bytes that are not UTF-8 are replaced, so such a line reaches the
/// dispatcher like any other malformed input.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut Context<'_>,
    mut input: R,
    output: &mut W,
) -> io::Result<SessionEnd> {
    let mut buf = Vec::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            writeln!(output)?;
            return Ok(SessionEnd::EndOfInput);
        }

        let line = String::from_utf8_lossy(&buf);
        let Some((command, args)) = parse_input(&line) else {
            continue;
        };
        match dispatch(ctx, &command, &args) {
            Outcome::Reply(reply) => writeln!(output, "{reply}")?,
            Outcome::Exit => return Ok(SessionEnd::Exit),
        }
    }
}
