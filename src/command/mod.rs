//! Interactive command grammar
//!
//! Each input line is one of three commands: `query`, `spell` or `quit`.
//! Lines are split on whitespace and parsed with clap, so malformed input
//! becomes a `clap::Error` and is never dispatched.
//!
//! Several flags are traditionally written with a single dash and a
//! multi-letter name (`-type`, `-lv`, `-sort`, ...). clap only knows
//! single-letter short flags, so those tokens are rewritten to their
//! double-dash form before parsing.

pub mod executor;

pub use executor::CommandExecutor;

use crate::query::{CombineMode, QueryRequest, SortKey};
use clap::{Args, Parser, Subcommand};

/// Multi-letter flags accepted with a single leading dash
pub const SINGLE_DASH_FLAGS: &[&str] = &["type", "lv", "sort", "add", "rem", "show", "sc"];

/// One parsed input line
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "spellbook", no_binary_name = true)]
#[command(about = "Query the loaded spells or manage your spell list")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Search the loaded spells
    Query(QueryArgs),
    /// Manage your personal spell list (not implemented yet)
    Spell(SpellListArgs),
    /// Leave the session
    Quit,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct QueryArgs {
    /// How filters combine
    #[arg(long = "type", value_enum)]
    pub kind: CombineMode,

    /// Part of the spell name; several words are joined with spaces
    #[arg(short = 'n', long = "name", num_args = 1.., value_name = "NAME")]
    pub name: Vec<String>,

    /// Exact spell level; 0 is ignored
    #[arg(long = "level", visible_alias = "lv")]
    pub level: Option<u8>,

    /// Sort the remaining candidates by this field
    #[arg(long = "sort", value_enum)]
    pub sort: Option<SortKey>,

    /// School letter code or full name
    #[arg(long = "school")]
    pub school: Option<String>,

    /// Casting-time unit (action, bonus, reaction, ...)
    #[arg(long = "cast-time")]
    pub cast_time: Option<String>,

    /// Search your spell list instead of every loaded spell
    #[arg(long = "my-spells")]
    pub my_spells: bool,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SpellListArgs {
    /// Spells to add
    #[arg(long = "add", num_args = 1.., value_name = "NAME")]
    pub add: Vec<String>,

    /// Spells to remove
    #[arg(long = "rem", num_args = 1.., value_name = "NAME")]
    pub remove: Vec<String>,

    /// Show the list
    #[arg(long = "show")]
    pub show: bool,

    /// Maximum number of spells in the list
    #[arg(long = "spells-size", value_parser = clap::value_parser!(u16).range(1..1000))]
    pub spells_size: Option<u16>,
}

impl From<&QueryArgs> for QueryRequest {
    fn from(args: &QueryArgs) -> Self {
        QueryRequest {
            mode: args.kind,
            name: args.name.clone(),
            level: args.level,
            school: args.school.clone(),
            cast_time: args.cast_time.clone(),
            sort: args.sort,
            from_spells: args.my_spells,
        }
    }
}

/// Rewrite single-dash multi-letter flags (`-type`, `-lv=3`) to double-dash form
///
/// Every token is checked, so a flag word stays a flag even where a value is
/// expected: `-n -show` is a name option followed by `--show`. A value that
/// starts with a dash must be attached with `=`, as in `--name=-show`, which
/// is never rewritten.
pub fn normalize_flags<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    args.into_iter()
        .map(|arg| normalize_flag(arg.into()))
        .collect()
}

fn normalize_flag(arg: String) -> String {
    let Some(rest) = arg.strip_prefix('-') else {
        return arg;
    };
    if rest.starts_with('-') {
        return arg;
    }
    let flag = rest.split('=').next().unwrap_or(rest);
    if SINGLE_DASH_FLAGS.contains(&flag) {
        format!("-{}", arg)
    } else {
        arg
    }
}

/// Parse one input line; blank lines yield `Ok(None)`
pub fn parse_line(line: &str) -> Result<Option<Command>, clap::Error> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }
    let parsed = CommandLine::try_parse_from(normalize_flags(tokens))?;
    Ok(Some(parsed.command))
}
