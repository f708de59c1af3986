use clap::Parser;
use jotr::application::{add_note, delete_note, edit_note, list_notes, manage_config};
use jotr::cli::output::format_note_list;
use jotr::cli::{shell, Cli, Commands};
use jotr::domain::DateRange;
use jotr::error::NotesError;
use jotr::infrastructure::{Config, FileRepository, CONFIG_FILE};
use std::io;
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NotesError> {
    let config = Config::resolve(cli.file)?;

    match cli.command {
        Some(Commands::Add { title, body }) => {
            let mut repository = FileRepository::open(&config.storage)?;
            let id = add_note(&mut repository, &title, &body)?;
            println!("Added note {}", id);
            Ok(())
        }
        Some(Commands::Edit { id, title, body }) => {
            let mut repository = FileRepository::open(&config.storage)?;
            if edit_note(&mut repository, id, &title, &body)? {
                println!("Updated note {}", id);
            } else {
                // A miss is informational, not an error
                println!("Note {} not found", id);
            }
            Ok(())
        }
        Some(Commands::Delete { id }) => {
            let mut repository = FileRepository::open(&config.storage)?;
            if delete_note(&mut repository, id)? {
                println!("Deleted note {}", id);
            } else {
                println!("Note {} not found", id);
            }
            Ok(())
        }
        Some(Commands::List { from, to }) => {
            let repository = FileRepository::open(&config.storage)?;

            // Filtering needs both bounds; either one alone lists everything.
            let range = match (from, to) {
                (Some(from), Some(to)) => Some(DateRange::parse(&from, &to)?),
                _ => None,
            };

            let notes = list_notes(&repository, range);
            println!("{}", format_note_list(&notes));
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let path = Path::new(CONFIG_FILE);
            let mut file_config = Config::load(path)?;

            if list {
                println!("storage = {}", file_config.storage.display());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    manage_config::set(&mut file_config, &k, &v)?;
                    file_config.save(path)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = manage_config::get(&file_config, &k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: jotr config [--list | <key> [<value>]]");
                println!("Valid keys: storage");
                Ok(())
            }
        }
        None => {
            // No subcommand: interactive shell over the resolved store
            let mut repository = FileRepository::open(&config.storage)?;
            let stdin = io::stdin();
            shell::run(&mut repository, stdin.lock(), io::stdout())
        }
    }
}
