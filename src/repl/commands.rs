//! Command parsing and handlers for the interactive session.
//!
//! The parser maps the first word (or first two words) of a line to a
//! command, case-insensitively; everything after the command name becomes
//! its arguments. Handlers never panic: bad arguments and domain errors
//! come back as user-facing replies.

use crate::book::{ContactDirectory, ContactRecord};

/// One recognized REPL command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `hello`
    Hello,
    /// `add NAME PHONE [BIRTHDAY]` (alias: `+`)
    Add,
    /// `change NAME OLD_PHONE NEW_PHONE`
    ChangePhone,
    /// `phone NAME`
    ShowPhones,
    /// `remove phone NAME PHONE`
    RemovePhone,
    /// `remove NAME`
    RemoveContact,
    /// `birthday NAME YYYY-MM-DD`
    SetBirthday,
    /// `days NAME`
    DaysToBirthday,
    /// `show all`
    ShowAll,
    /// `search TERM`
    Search,
    /// `good bye` | `close` | `exit`
    Exit,
    /// Anything else
    Unknown,
}

/// Split a line into a command and its arguments.
///
/// Two-word command names (`show all`, `good bye`, `remove phone`) are
/// matched before single words, so `remove phone Bill 123456789` targets
/// the phone, not the contact.
pub fn parse(line: &str) -> (Command, Vec<&str>) {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return (Command::Unknown, Vec::new());
    }

    if tokens.len() >= 2 {
        let two_words = format!(
            "{} {}",
            tokens[0].to_lowercase(),
            tokens[1].to_lowercase()
        );
        let command = match two_words.as_str() {
            "show all" => Some(Command::ShowAll),
            "good bye" => Some(Command::Exit),
            "remove phone" => Some(Command::RemovePhone),
            _ => None,
        };
        if let Some(command) = command {
            return (command, tokens[2..].to_vec());
        }
    }

    let command = match tokens[0].to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" | "+" => Command::Add,
        "change" => Command::ChangePhone,
        "phone" => Command::ShowPhones,
        "remove" => Command::RemoveContact,
        "birthday" => Command::SetBirthday,
        "days" => Command::DaysToBirthday,
        "search" => Command::Search,
        "close" | "exit" => Command::Exit,
        _ => Command::Unknown,
    };
    (command, tokens[1..].to_vec())
}

/// Run a command against the book and produce the reply to print.
pub fn execute(
    command: Command,
    args: &[&str],
    book: &mut ContactDirectory,
    page_size: usize,
) -> String {
    match command {
        Command::Hello => "How can I help you?".to_string(),
        Command::Add => add(args, book),
        Command::ChangePhone => change_phone(args, book),
        Command::ShowPhones => show_phones(args, book),
        Command::RemovePhone => remove_phone(args, book),
        Command::RemoveContact => remove_contact(args, book),
        Command::SetBirthday => set_birthday(args, book),
        Command::DaysToBirthday => days_to_birthday(args, book),
        Command::ShowAll => show_all(book, page_size),
        Command::Search => search(args, book),
        Command::Exit => "Good bye!".to_string(),
        Command::Unknown => "Unknown command".to_string(),
    }
}

fn add(args: &[&str], book: &mut ContactDirectory) -> String {
    let (name, phone, birthday) = match args {
        [name, phone] => (*name, *phone, None),
        [name, phone, birthday] => (*name, *phone, Some(*birthday)),
        _ => return "Give me a name and a phone: add NAME PHONE [YYYY-MM-DD]".to_string(),
    };
    let record = match ContactRecord::from_raw(name, &[phone], birthday) {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };
    match book.add_record(record) {
        Ok(()) => format!("Contact {} has been added", name),
        Err(err) => err.to_string(),
    }
}

fn change_phone(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name, old, new] = args else {
        return "Give me a name and two phones: change NAME OLD_PHONE NEW_PHONE".to_string();
    };
    let record = match book.get_mut(name) {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };
    match record.change_phone(old, new) {
        Ok(()) => format!("Phone for {} has been changed", name),
        Err(err) => err.to_string(),
    }
}

fn show_phones(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name] = args else {
        return "Give me a name: phone NAME".to_string();
    };
    match book.get(name) {
        Ok(record) if record.phones().is_empty() => format!("{} has no phones", name),
        Ok(record) => record
            .phones()
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>()
            .join(" "),
        Err(err) => err.to_string(),
    }
}

fn remove_phone(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name, phone] = args else {
        return "Give me a name and a phone: remove phone NAME PHONE".to_string();
    };
    let record = match book.get_mut(name) {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };
    match record.remove_phone(phone) {
        Ok(()) => format!("Phone has been removed from {}", name),
        Err(err) => err.to_string(),
    }
}

fn remove_contact(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name] = args else {
        return "Give me a name: remove NAME".to_string();
    };
    match book.remove(name) {
        Ok(_) => format!("Contact {} has been removed", name),
        Err(err) => err.to_string(),
    }
}

// Refusing to overwrite an existing birthday is session policy, not a
// record invariant; the record itself accepts any valid date.
fn set_birthday(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name, date] = args else {
        return "Give me a name and a date: birthday NAME YYYY-MM-DD".to_string();
    };
    let record = match book.get_mut(name) {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };
    if let Some(existing) = record.birthday() {
        return format!("{} already has a birthday: {}", name, existing);
    }
    match record.set_birthday(date) {
        Ok(()) => format!("Birthday for {} set to {}", name, date),
        Err(err) => err.to_string(),
    }
}

fn days_to_birthday(args: &[&str], book: &mut ContactDirectory) -> String {
    let [name] = args else {
        return "Give me a name: days NAME".to_string();
    };
    let record = match book.get(name) {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };
    match record.days_to_next_birthday() {
        Ok(days) => format!("{} day(s) until {}'s birthday", days, name),
        Err(err) => err.to_string(),
    }
}

fn show_all(book: &ContactDirectory, page_size: usize) -> String {
    if book.is_empty() {
        return "The book is empty".to_string();
    }
    match book.paginate(page_size) {
        Ok(pages) => pages
            .map(|page| {
                page.iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n----------\n"),
        Err(err) => err.to_string(),
    }
}

fn search(args: &[&str], book: &mut ContactDirectory) -> String {
    if args.is_empty() {
        return "Give me something to look for: search TERM".to_string();
    }
    let term = args.join(" ");
    let found = book.search(&term);
    if found.is_empty() {
        return format!("Nothing found for '{}'", term);
    }
    found
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> ContactDirectory {
        let mut book = ContactDirectory::new();
        book.add_record(
            ContactRecord::from_raw("Bill", &["1234567890"], Some("1994-02-26")).unwrap(),
        )
        .unwrap();
        book.add_record(ContactRecord::from_raw("Ann", &["0987654321"], None).unwrap())
            .unwrap();
        book
    }

    #[test]
    fn test_parse_single_word_commands() {
        assert_eq!(parse("hello").0, Command::Hello);
        assert_eq!(parse("ADD Bill 123").0, Command::Add);
        assert_eq!(parse("+ Bill 123").0, Command::Add);
        assert_eq!(parse("change Bill 1 2").0, Command::ChangePhone);
        assert_eq!(parse("exit").0, Command::Exit);
        assert_eq!(parse("close").0, Command::Exit);
        assert_eq!(parse("what").0, Command::Unknown);
    }

    #[test]
    fn test_parse_two_word_commands() {
        assert_eq!(parse("show all").0, Command::ShowAll);
        assert_eq!(parse("Good Bye").0, Command::Exit);
        let (command, args) = parse("remove phone Bill 123456789");
        assert_eq!(command, Command::RemovePhone);
        assert_eq!(args, vec!["Bill", "123456789"]);
    }

    #[test]
    fn test_parse_one_word_remove_takes_contact() {
        let (command, args) = parse("remove Bill");
        assert_eq!(command, Command::RemoveContact);
        assert_eq!(args, vec!["Bill"]);
    }

    #[test]
    fn test_parse_keeps_argument_case() {
        let (_, args) = parse("add Bill 1234567890");
        assert_eq!(args, vec!["Bill", "1234567890"]);
    }

    #[test]
    fn test_add_and_duplicate() {
        let mut book = ContactDirectory::new();
        let reply = execute(Command::Add, &["Bill", "1234567890"], &mut book, 3);
        assert_eq!(reply, "Contact Bill has been added");

        let reply = execute(Command::Add, &["Bill", "0987654321"], &mut book, 3);
        assert_eq!(reply, "Contact 'Bill' is already in the book");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_add_with_bad_phone_reports_validation() {
        let mut book = ContactDirectory::new();
        let reply = execute(Command::Add, &["Bill", "123"], &mut book, 3);
        assert!(reply.contains("not in range"));
        assert!(book.is_empty());
    }

    #[test]
    fn test_add_missing_arguments_prompts_usage() {
        let mut book = ContactDirectory::new();
        let reply = execute(Command::Add, &["Bill"], &mut book, 3);
        assert!(reply.starts_with("Give me a name and a phone"));
    }

    #[test]
    fn test_change_phone_handler() {
        let mut book = book();
        let reply = execute(
            Command::ChangePhone,
            &["Bill", "1234567890", "1112223334"],
            &mut book,
            3,
        );
        assert_eq!(reply, "Phone for Bill has been changed");
        assert_eq!(book.get("Bill").unwrap().phones()[0], "1112223334");

        let reply = execute(
            Command::ChangePhone,
            &["Nobody", "1234567890", "1112223334"],
            &mut book,
            3,
        );
        assert_eq!(reply, "Contact 'Nobody' is not in the book");
    }

    #[test]
    fn test_birthday_policy_refuses_overwrite() {
        let mut book = book();
        let reply = execute(Command::SetBirthday, &["Bill", "2000-01-01"], &mut book, 3);
        assert_eq!(reply, "Bill already has a birthday: 1994-02-26");
        // the record keeps its original date
        assert_eq!(
            book.get("Bill").unwrap().birthday().unwrap().as_str(),
            "1994-02-26"
        );

        let reply = execute(Command::SetBirthday, &["Ann", "2000-01-01"], &mut book, 3);
        assert_eq!(reply, "Birthday for Ann set to 2000-01-01");
    }

    #[test]
    fn test_days_handler_without_birthday() {
        let mut book = book();
        let reply = execute(Command::DaysToBirthday, &["Ann"], &mut book, 3);
        assert_eq!(reply, "No birthday set for 'Ann'");
    }

    #[test]
    fn test_show_all_pages() {
        let mut book = ContactDirectory::new();
        for name in ["A", "B", "C", "D", "E"] {
            book.add_record(ContactRecord::from_raw(name, &["1234567890"], None).unwrap())
                .unwrap();
        }
        let reply = execute(Command::ShowAll, &[], &mut book, 2);
        // 5 records in pages of 2 -> 2 separators
        assert_eq!(reply.matches("----------").count(), 2);
        assert!(reply.contains("A: 1234567890"));

        let mut empty = ContactDirectory::new();
        assert_eq!(execute(Command::ShowAll, &[], &mut empty, 2), "The book is empty");
    }

    #[test]
    fn test_search_handler() {
        let mut book = book();
        let reply = execute(Command::Search, &["098765"], &mut book, 3);
        assert!(reply.contains("Ann"));
        assert!(!reply.contains("Bill"));

        let reply = execute(Command::Search, &["zzz"], &mut book, 3);
        assert_eq!(reply, "Nothing found for 'zzz'");
    }

    #[test]
    fn test_remove_handlers() {
        let mut book = book();
        let reply = execute(Command::RemovePhone, &["Bill", "1234567890"], &mut book, 3);
        assert_eq!(reply, "Phone has been removed from Bill");
        assert!(book.get("Bill").unwrap().phones().is_empty());

        let reply = execute(Command::RemoveContact, &["Bill"], &mut book, 3);
        assert_eq!(reply, "Contact Bill has been removed");
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_unknown_command() {
        let mut book = ContactDirectory::new();
        assert_eq!(execute(Command::Unknown, &[], &mut book, 3), "Unknown command");
    }
}
