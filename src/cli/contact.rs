//! Contact CLI commands
//!
//! One-shot commands for scripting and quick lookups.

use clap::Subcommand;

use crate::display::{format_contact_list, format_history};
use crate::error::{ContactError, ContactResult};
use crate::services::ContactService;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// List all contacts
    #[command(alias = "ls")]
    List,
    /// Add a new contact
    Add {
        /// Full name
        name: String,
        /// Phone number (10 digits)
        phone: String,
        /// Email address
        email: String,
    },
    /// Delete every contact with this name (case-insensitive)
    #[command(alias = "rm")]
    Delete {
        /// Contact name
        name: String,
    },
    /// Search by name prefix, phone or email fragment
    #[command(alias = "find")]
    Search {
        /// Search text (empty lists everything)
        #[arg(default_value = "")]
        query: String,
    },
    /// Show recently added and deleted contacts
    History {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Handle a contact command
pub fn handle_contact_command(
    service: &mut ContactService,
    default_history: usize,
    cmd: ContactCommands,
) -> ContactResult<()> {
    match cmd {
        ContactCommands::List => {
            println!("{}", format_contact_list(&service.list()));
        }

        ContactCommands::Add { name, phone, email } => {
            let contact = service.add(&name, &phone, &email)?;
            println!("Added contact: {}", contact);
        }

        ContactCommands::Delete { name } => {
            let removed = service.delete(&name)?;
            if removed.is_empty() {
                return Err(ContactError::contact_not_found(name));
            }
            for contact in &removed {
                println!("Deleted contact: {}", contact);
            }
        }

        ContactCommands::Search { query } => {
            let results = service.search(&query);
            if results.is_empty() {
                println!("No contacts found for: {}", query);
            } else {
                println!("{}", format_contact_list(&results));
            }
        }

        ContactCommands::History { limit } => {
            let entries = service.history(limit.unwrap_or(default_history))?;
            println!("{}", format_history(&entries));
        }
    }

    Ok(())
}
