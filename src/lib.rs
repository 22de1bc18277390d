//! Spellbook - fetch, filter and query D&D 5e spells

pub mod cli;
pub mod command;
pub mod core;
pub mod filter;
pub mod query;
pub mod session;
pub mod source;
pub mod spell;
pub mod spell_list;
