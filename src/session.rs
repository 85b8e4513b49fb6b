#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::debug;

use crate::{
    calc::GradeCalculator,
    document::{Document, FieldSlot, StyleBundle},
    guard::InputGuard,
};

/// What the user can do at the session prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// One content-change event: replace a field's text wholesale.
    Edit(FieldSlot, String),
    /// Activate the trigger control.
    Calculate,
    /// Print the current document state.
    Show,
    /// Print the command summary.
    Help,
    /// End the session.
    Quit,
}

/// Why a prompt line failed to parse as a command.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    /// The first word is not a known command.
    #[error("unknown command `{0}`; try `help`")]
    Unknown(String),
    /// An edit named a slot other than `1` or `2`.
    #[error("expected a field slot of `1` or `2`, got `{0}`")]
    BadSlot(String),
}

impl std::str::FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let trimmed = line.trim();
        let (word, rest) = trimmed.split_once(char::is_whitespace).unwrap_or((trimmed, ""));

        match word {
            "1" => Ok(SessionCommand::Edit(FieldSlot::Cut1, rest.trim_start().to_string())),
            "2" => Ok(SessionCommand::Edit(FieldSlot::Cut2, rest.trim_start().to_string())),
            "calc" => Ok(SessionCommand::Calculate),
            "show" => Ok(SessionCommand::Show),
            "help" => Ok(SessionCommand::Help),
            "quit" | "exit" => Ok(SessionCommand::Quit),
            other if other.chars().all(|c| c.is_ascii_digit()) && !other.is_empty() => {
                Err(CommandError::BadSlot(other.to_string()))
            }
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// The command summary printed by `help`.
const HELP: &str = "\
1 <text>   type into the cut 1 field
2 <text>   type into the cut 2 field
calc       compute the grade needed on the final cut
show       print both fields and the last result
help       print this summary
quit       end the session";

/// Runs the interactive session loop over arbitrary reader/writer pairs.
/// Each `1`/`2` line is one edit event passed through the input guard;
/// `calc` activates the trigger. The prompt is painted in the trigger
/// control's current color scheme.
pub fn run(reader: impl BufRead, writer: &mut impl Write) -> Result<()> {
    let mut document = Document::new();

    writeln!(writer, "Enter the first two cut grades, then `calc`. `help` lists commands.")
        .context("Could not write to the session output")?;

    write_prompt(writer, &document)?;
    for line in reader.lines() {
        let line = line.context("Could not read from the session input")?;

        if line.trim().is_empty() {
            write_prompt(writer, &document)?;
            continue;
        }

        match line.parse::<SessionCommand>() {
            Ok(SessionCommand::Edit(slot, text)) => {
                InputGuard::on_edit(&mut document, slot, &text);
                let kept = document.field(slot).text();
                if kept != text {
                    debug!("edit on {slot} adjusted to {kept:?}");
                }
                writeln!(writer, "{slot}: {kept}").context("Could not write to the session output")?;
            }
            Ok(SessionCommand::Calculate) => {
                GradeCalculator::trigger(&mut document);
                if let Some(rendered) = document.result.to_terminal() {
                    writeln!(writer, "{rendered}")
                        .context("Could not write to the session output")?;
                }
            }
            Ok(SessionCommand::Show) => {
                show(writer, &document)?;
            }
            Ok(SessionCommand::Help) => {
                writeln!(writer, "{HELP}").context("Could not write to the session output")?;
            }
            Ok(SessionCommand::Quit) => return Ok(()),
            Err(e) => {
                writeln!(writer, "{}", StyleBundle::Error.paint(&e.to_string()))
                    .context("Could not write to the session output")?;
            }
        }

        write_prompt(writer, &document)?;
    }

    Ok(())
}

/// Prints the prompt marker in the trigger control's current scheme.
fn write_prompt(writer: &mut impl Write, document: &Document) -> Result<()> {
    write!(writer, "{} ", document.trigger.paint("parcial>"))
        .context("Could not write to the session output")?;
    writer.flush().context("Could not flush the session output")
}

/// Prints both fields and the last rendered result, if any.
fn show(writer: &mut impl Write, document: &Document) -> Result<()> {
    for slot in [FieldSlot::Cut1, FieldSlot::Cut2] {
        let text = document.field(slot).text();
        let display = if text.is_empty() { "(empty)".dimmed().to_string() } else { text.to_string() };
        writeln!(writer, "{slot}: {display}").context("Could not write to the session output")?;
    }

    if let Some(rendered) = document.result.to_terminal() {
        writeln!(writer, "{rendered}").context("Could not write to the session output")?;
    }

    Ok(())
}
