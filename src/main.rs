use clap::Parser;
use notekeep::application::{add_note, archive_note, list_notes};
use notekeep::cli::{format_archive_outcome, format_created, format_note_list, Cli, Commands};
use notekeep::domain::{NewNote, NoteFilter};
use notekeep::error::NotekeepError;
use notekeep::infrastructure::{config, JsonFileStore, NoteRepository};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("NOTEKEEP_LOG", "warn"))
        .init();

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

fn run(cli: Cli) -> Result<(), NotekeepError> {
    let data_dir = config::data_dir(cli.data_dir.as_deref())?;
    let store = JsonFileStore::in_dir(&data_dir);

    match cli.command {
        Commands::Add {
            title,
            content,
            tags,
            due,
        } => {
            let input = NewNote {
                title,
                content,
                tags,
                due_date: due,
            };
            let note = add_note(&store, input)?;
            println!("{}", format_created(&note));
        }
        Commands::List {
            tag,
            search,
            archived,
        } => {
            let filter = NoteFilter::new(tag, search).archived(archived);
            let notes = list_notes(&store, &filter)?;
            println!("{}", format_note_list(&notes).trim_end());
        }
        Commands::Archive { id } => {
            let outcome = archive_note(&store, id)?;
            println!("{}", format_archive_outcome(outcome));
        }
        Commands::Path => {
            println!("{}", store.location().display());
        }
    }

    Ok(())
}
