//! Interactive console menu
//!
//! A numbered menu (view, add, delete, search, exit) driven by line input.
//! Reader and writer are generic so the loop runs against in-memory buffers
//! in tests.

use std::io::{BufRead, Write};

use crate::display::format_contact_list;
use crate::error::{ContactError, ContactResult};
use crate::services::ContactService;

const MENU: &str = "\n--- Contact Book ---
1. View Contacts
2. Add Contact
3. Delete Contact
4. Search Contact
5. Exit";

/// Run the menu loop until the user exits or input ends
pub fn run_menu<R: BufRead, W: Write>(
    service: &mut ContactService,
    mut input: R,
    mut output: W,
) -> ContactResult<()> {
    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "Choose an option: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                writeln!(output, "{}", format_contact_list(&service.list()))?;
            }
            "2" => {
                if !add_contact(service, &mut input, &mut output)? {
                    break;
                }
            }
            "3" => {
                let Some(name) = prompt(&mut input, &mut output, "Enter name to delete: ")? else {
                    break;
                };
                let removed = service.delete(&name)?;
                if removed.is_empty() {
                    writeln!(output, "No contact named '{}'.", name.trim())?;
                } else {
                    writeln!(output, "Deleted {} contact(s).", removed.len())?;
                }
            }
            "4" => {
                let Some(query) = prompt(&mut input, &mut output, "Enter search text: ")? else {
                    break;
                };
                let results = service.search(&query);
                if results.is_empty() {
                    writeln!(output, "No contacts found for: {}", query)?;
                } else {
                    writeln!(output, "{}", format_contact_list(&results))?;
                }
            }
            "5" => {
                writeln!(output, "Exiting...")?;
                return Ok(());
            }
            _ => {
                writeln!(output, "Invalid option. Try again.")?;
            }
        }
    }

    writeln!(output)?;
    Ok(())
}

/// Prompt for the three fields and add the contact
///
/// Returns `false` if input ended part-way.
fn add_contact<R: BufRead, W: Write>(
    service: &mut ContactService,
    input: &mut R,
    output: &mut W,
) -> ContactResult<bool> {
    let mut fields = Vec::with_capacity(3);
    for label in ["Enter name: ", "Enter phone: ", "Enter email: "] {
        match prompt(input, output, label)? {
            Some(value) => fields.push(value),
            None => return Ok(false),
        }
    }

    match service.add(&fields[0], &fields[1], &fields[2]) {
        Ok(contact) => writeln!(output, "Contact added: {}", contact)?,
        Err(e @ (ContactError::Validation(_) | ContactError::Duplicate { .. })) => {
            writeln!(output, "{}", e)?
        }
        Err(e) => return Err(e),
    }

    Ok(true)
}

/// Print `label` and read one line without its line ending
///
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> ContactResult<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContactPaths, Settings};
    use crate::storage::Storage;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn open_service() -> (TempDir, ContactService) {
        let temp_dir = TempDir::new().unwrap();
        let storage =
            Storage::new(ContactPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let service = ContactService::open(storage, &Settings::default()).unwrap();
        (temp_dir, service)
    }

    fn run(service: &mut ContactService, script: &str) -> String {
        let mut output = Vec::new();
        run_menu(service, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_then_view() {
        let (_temp, mut service) = open_service();
        let out = run(
            &mut service,
            "2\njohn doe\n5551234567\njohn@x.com\n1\n5\n",
        );

        assert!(out.contains("Contact added: John Doe"));
        assert!(out.contains("| John Doe | 5551234567 | john@x.com |"));
        assert!(out.ends_with("Exiting...\n"));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_invalid_add_reports_and_continues() {
        let (_temp, mut service) = open_service();
        let out = run(&mut service, "2\nAnn\n123\nann@x.com\n5\n");

        assert!(out.contains("Invalid phone '123'"));
        assert!(out.contains("Exiting..."));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_search_and_delete() {
        let (_temp, mut service) = open_service();
        service.add("Ann", "5551234567", "ann@x.com").unwrap();
        service.add("Bob", "5559876543", "bob@y.com").unwrap();

        let out = run(&mut service, "4\n654\n3\nann\n3\nann\n4\nann\n5\n");

        assert!(out.contains("| Bob  | 5559876543 | bob@y.com |"));
        assert!(out.contains("Deleted 1 contact(s)."));
        assert!(out.contains("No contact named 'ann'."));
        assert!(out.contains("No contacts found for: ann"));
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_invalid_option() {
        let (_temp, mut service) = open_service();
        let out = run(&mut service, "9\n5\n");
        assert!(out.contains("Invalid option. Try again."));
    }

    #[test]
    fn test_view_empty_book() {
        let (_temp, mut service) = open_service();
        let out = run(&mut service, "1\n5\n");
        assert!(out.contains("No contacts found."));
    }

    #[test]
    fn test_end_of_input_exits_cleanly() {
        let (_temp, mut service) = open_service();
        let out = run(&mut service, "2\nAnn\n");

        assert!(!out.contains("Exiting..."));
        assert_eq!(service.count(), 0);
    }
}
