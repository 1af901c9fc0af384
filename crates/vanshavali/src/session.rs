use std::io::{BufRead, Write};

use tracing::{debug, info};
use vanshavali_data::transliterate;
use vanshavali_view::{Controller, Event, Outcome, RecordingSurface};

use crate::error::{CliError, Result};
use crate::output::Printer;

/// Reads one command per line:
///
/// ```text
/// select <id>
/// background
/// search <text>
/// back
/// home
/// ```
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_command(line: &str, latin: bool) -> Result<Option<Event>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let event = match (verb, rest) {
        ("select" | "click", id) if !id.is_empty() => Event::NodeSelect(id.to_string()),
        ("background", "") => Event::BackgroundSelect,
        ("search", text) => {
            let text = if latin { transliterate(text) } else { text.to_string() };
            Event::SearchSubmit(text)
        }
        ("back", "") => Event::Back,
        ("home", "") => Event::Home,
        _ => return Err(CliError::BadCommand(line.to_string())),
    };
    Ok(Some(event))
}

/// Feeds commands to the controller and prints every presented frame and
/// notice. Refused interactions are reported but do not end the session.
pub fn run_session(
    controller: &mut Controller,
    printer: &Printer,
    latin: bool,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    for line in input.lines() {
        let line = line?;
        let Some(event) = parse_command(&line, latin)? else {
            continue;
        };

        let mut surface = RecordingSurface::new();
        let outcome = controller.handle(event, &mut surface);
        debug!(?outcome, fits = surface.fits.len(), "session event handled");

        for notice in &surface.notices {
            writeln!(output, "! {notice}")?;
        }
        for frame in &surface.frames {
            writeln!(output, "{}", printer.frame(frame)?)?;
        }
        if outcome == Outcome::Ignored {
            info!(line = line.trim(), "ignored");
        }
    }
    Ok(())
}
