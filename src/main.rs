use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use contact_book::cli::{handle_contact_command, run_menu, ContactCommands};
use contact_book::config::paths::{ContactPaths, DIR_ENV_VAR};
use contact_book::config::settings::Settings;
use contact_book::services::ContactService;
use contact_book::storage::Storage;

#[derive(Parser)]
#[command(
    name = "contacts",
    version,
    about = "Terminal contact book with prefix search",
    long_about = "A small contact book for the terminal. Contacts are kept in a CSV \
                  file and searched by name prefix, phone fragment or email fragment, \
                  from one-shot commands, a numbered menu or an interactive window."
)]
struct Cli {
    /// Directory holding contacts, settings and logs
    #[arg(long, global = true, env = DIR_ENV_VAR, value_name = "DIR")]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Run the numbered console menu
    Menu,

    #[command(flatten)]
    Contact(ContactCommands),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.dir {
        Some(dir) => ContactPaths::with_base_dir(dir),
        None => ContactPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;
    paths.ensure_directories()?;
    init_logging(&paths)?;

    let storage = Storage::new(paths.clone())?;
    let mut service = ContactService::open(storage, &settings)?;
    tracing::debug!(contacts = service.count(), "contact book opened");

    match cli.command {
        Some(Commands::Tui) => {
            contact_book::tui::run_tui(&mut service, &settings)?;
        }
        Some(Commands::Menu) => {
            run_menu(&mut service, io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Contact(cmd)) => {
            handle_contact_command(&mut service, settings.recent_history, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing contact book at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            if !paths.contacts_file().exists() {
                service.storage().contacts.save(&[])?;
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'contacts add <NAME> <PHONE> <EMAIL>' to add your first contact.");
        }
        Some(Commands::Config) => {
            println!("Contact Book Configuration");
            println!("==========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Contacts file:  {}", paths.contacts_file().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Log file:       {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Search debounce:   {} ms", settings.search_debounce_ms);
            println!("  Title-case names:  {}", settings.title_case_names);
            println!("  Allow duplicates:  {}", settings.allow_duplicate_names);
            println!("  History entries:   {}", settings.recent_history);
        }
        None => {
            println!("Contact Book - terminal contact manager");
            println!();
            println!("Run 'contacts --help' for usage information.");
            println!("Run 'contacts menu' for the numbered menu.");
            println!("Run 'contacts tui' to launch the interactive interface.");
        }
    }

    Ok(())
}

/// Send diagnostics to the log file; the terminal belongs to the UI
fn init_logging(paths: &ContactPaths) -> Result<()> {
    let log_path = paths.log_file();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
