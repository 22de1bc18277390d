//! Spellbook - Entry Point
//!
//! Loads spells from the website or a cache file, keeps those the configured
//! classes and subclasses can cast, runs the interactive query loop, and
//! optionally writes the filtered set back to disk on exit.

use spellbook::cli::Cli;
use spellbook::command::normalize_flags;
use spellbook::core::error::Result;
use spellbook::filter::ClassFilter;
use spellbook::session::Session;
use spellbook::source::{write_to_file, SpellSource};

use clap::Parser;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse_from(normalize_flags(std::env::args()));

    // Logs go to stderr so stdout only carries prompts and JSON
    let directive = if args.verbose {
        "spellbook=debug"
    } else {
        "spellbook=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(directive)
        .with_writer(io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("spellbook: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Cli) -> Result<()> {
    let config = args.resolve_config()?;
    tracing::debug!("Using {:?}", config);

    let source = SpellSource::from_config(&config, args.from_file.clone());
    let spells = source.load()?;
    tracing::info!("Done!");

    let spells = ClassFilter::new(config.classes, config.subclasses).apply(spells);

    println!();
    println!("=== SPELLBOOK ===");
    println!("{} spells loaded.", spells.len());
    println!();
    println!("Commands:");
    println!("  query -type {{and|or}} [-n NAME...] [-lv LEVEL] [-sort {{name|level|school}}]");
    println!("        [--school SCHOOL] [--cast-time TIME] [--my-spells]");
    println!("  spell [-add NAME...] [-rem NAME...] [-show] [--spells-size N]");
    println!("  quit");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    Session::new(&spells).run(stdin.lock(), &mut stdout)?;

    println!("Done!");

    if let Some(path) = &args.dest_file {
        write_to_file(&spells, path)?;
    }

    Ok(())
}
