//! Terminal input and output for the driver loop.
//!
//! [`ConsoleInput`] shows the menu and reads one line per turn.
//! [`ConsoleObserver`] prints status panels and pet notices. Both are
//! generic over their reader and writer so tests can run them on buffers.

use std::io::{self, BufRead, Write};

use tamagotchi_core::{EndReason, Input, InputSource, RunnerError, SessionObserver};
use tamagotchi_pet::PetEvent;
use tamagotchi_types::PetStatus;

use crate::menu::{CHOICE_PROMPT, MENU, parse_choice};
use crate::render::render_status;

/// Printed when the player's choice matches nothing.
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

/// Printed when the player quits.
pub const FAREWELL: &str = "Thanks for playing!";

/// Print `question`, read one line, and return it trimmed.
///
/// Returns `None` at end of input or if the line is blank.
pub fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> io::Result<Option<String>> {
    write!(writer, "{question}")?;
    writer.flush()?;
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let answer = line.trim();
    Ok((!answer.is_empty()).then(|| answer.to_owned()))
}

/// Reads menu choices from a terminal.
#[derive(Debug)]
pub struct ConsoleInput<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Read choices from `reader`, printing the menu to `writer`.
    pub const fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> InputSource for ConsoleInput<R, W> {
    fn next_input(&mut self) -> Result<Option<Input>, RunnerError> {
        writeln!(self.writer, "{MENU}")?;
        write!(self.writer, "{CHOICE_PROMPT}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        writeln!(self.writer)?;
        Ok(Some(parse_choice(&line)))
    }
}

/// Prints everything the driver loop reports.
///
/// Observer callbacks cannot fail, so the first write error is kept and
/// returned by [`ConsoleObserver::finish`].
#[derive(Debug)]
pub struct ConsoleObserver<W> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleObserver<W> {
    /// Print to `writer`.
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            error: None,
        }
    }

    /// Flush output and surface the first write error, if any.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = writeln!(self.writer, "{text}") {
            self.error = Some(err);
        }
    }
}

impl<W: Write> SessionObserver for ConsoleObserver<W> {
    fn on_status(&mut self, status: &PetStatus) {
        self.line("\n\n");
        self.line(&render_status(status));
    }

    fn on_event(&mut self, pet_name: &str, event: &PetEvent) {
        // Decay is silent; its effect shows in the next status panel.
        if *event == PetEvent::Decayed {
            return;
        }
        self.line(&event.describe(pet_name));
    }

    fn on_invalid(&mut self, _raw: &str) {
        self.line(INVALID_CHOICE);
    }

    fn on_end(&mut self, status: &PetStatus, reason: EndReason) {
        match reason {
            EndReason::Quit => self.line(FAREWELL),
            EndReason::Died(_) => self.line(&render_status(status)),
            EndReason::InputExhausted => {}
        }
    }
}
