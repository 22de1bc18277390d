//! The interactive read-parse-dispatch loop

use crate::command::{parse_line, Command, CommandExecutor};
use crate::core::error::Result;
use crate::spell::Spell;
use crate::spell_list::PersonalSpellList;
use clap::error::ErrorKind;
use std::io::{BufRead, Write};

pub const PROMPT: &str = "spellbook> ";

/// One interactive session over a fixed spell set
pub struct Session<'a> {
    spells: &'a [Spell],
    my_spells: PersonalSpellList,
}

impl<'a> Session<'a> {
    pub fn new(spells: &'a [Spell]) -> Self {
        Self {
            spells,
            my_spells: PersonalSpellList::new(),
        }
    }

    /// Read commands from `input` until `quit` or end of input
    ///
    /// Query results go to `output` as indented JSON. Parse errors are
    /// reported and the loop carries on.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, output: &mut W) -> Result<()> {
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                tracing::debug!("End of input, leaving session");
                break;
            }

            let command = match parse_line(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    report_parse_error(&err, output)?;
                    continue;
                }
            };

            let result = CommandExecutor::execute(&command, self.spells, &mut self.my_spells);
            if !result.is_empty() {
                writeln!(output, "{}", serde_json::to_string_pretty(&result)?)?;
            }

            if command == Command::Quit {
                break;
            }
        }
        Ok(())
    }
}

fn report_parse_error<W: Write>(err: &clap::Error, output: &mut W) -> Result<()> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
            write!(output, "{}", err.render())?;
        }
        _ => {
            let rendered = err.to_string();
            let summary = rendered.lines().next().unwrap_or("invalid command");
            writeln!(output, "Could not parse command: {}", summary)?;
        }
    }
    Ok(())
}
