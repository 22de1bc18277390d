//! Command execution - runs a parsed command against the session's spells

use crate::command::{Command, SpellListArgs};
use crate::query::{run_query, QueryRequest};
use crate::spell::Spell;
use crate::spell_list::PersonalSpellList;

/// Dispatches parsed commands to their handlers
pub struct CommandExecutor;

impl CommandExecutor {
    /// Execute a command, returning the spells to print (empty for none)
    pub fn execute<'a>(
        command: &Command,
        spells: &'a [Spell],
        my_spells: &mut PersonalSpellList,
    ) -> Vec<&'a Spell> {
        match command {
            Command::Query(args) => {
                let request = QueryRequest::from(args);
                tracing::debug!("Running {:?}", request);
                run_query(spells, &request, my_spells)
            }
            Command::Spell(args) => {
                handle_spell_list(args, my_spells);
                Vec::new()
            }
            Command::Quit => Vec::new(),
        }
    }
}

fn handle_spell_list(args: &SpellListArgs, my_spells: &PersonalSpellList) {
    tracing::debug!("spell command {:?} ({} listed)", args, my_spells.len());
    tracing::warn!("Spell list management is not implemented yet; nothing was changed");
}
