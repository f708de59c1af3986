//! Interactive shell - the prompt loop over the note repository

use crate::application::{add_note, delete_note, edit_note, list_notes};
use crate::cli::output::format_note_list;
use crate::domain::DateRange;
use crate::error::Result;
use crate::infrastructure::FileRepository;
use std::io::{BufRead, Write};

const COMMAND_PROMPT: &str = "Enter a command (add, edit, delete, list, exit): ";

/// Run the interactive prompt loop until `exit` or end of input.
///
/// Input and output are generic so tests can drive a session from a
/// scripted buffer.
pub fn run<R, W>(repository: &mut FileRepository, mut input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        let Some(line) = prompt(&mut input, &mut output, COMMAND_PROMPT)? else {
            break;
        };

        match line.trim() {
            "add" => add_command(repository, &mut input, &mut output)?,
            "edit" => edit_command(repository, &mut input, &mut output)?,
            "delete" => delete_command(repository, &mut input, &mut output)?,
            "list" => list_command(repository, &mut input, &mut output)?,
            "exit" => break,
            other => writeln!(output, "Unknown command: '{}'", other)?,
        }
    }

    Ok(())
}

fn add_command<R: BufRead, W: Write>(
    repository: &mut FileRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(title) = prompt(input, output, "Note title: ")? else {
        return Ok(());
    };
    let Some(body) = prompt(input, output, "Note body: ")? else {
        return Ok(());
    };

    let id = add_note(repository, &title, &body)?;
    writeln!(output, "Added note {}", id)?;
    Ok(())
}

fn edit_command<R: BufRead, W: Write>(
    repository: &mut FileRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_id(input, output, "Id of the note to edit: ")? else {
        return Ok(());
    };

    let Some(title) = prompt(input, output, "New title: ")? else {
        return Ok(());
    };
    let Some(body) = prompt(input, output, "New body: ")? else {
        return Ok(());
    };

    // An unknown id is a silent no-op.
    edit_note(repository, id, &title, &body)?;
    Ok(())
}

fn delete_command<R: BufRead, W: Write>(
    repository: &mut FileRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(id) = prompt_id(input, output, "Id of the note to delete: ")? else {
        return Ok(());
    };

    // An unknown id is a silent no-op.
    delete_note(repository, id)?;
    Ok(())
}

fn list_command<R: BufRead, W: Write>(
    repository: &mut FileRepository,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let Some(answer) = prompt(input, output, "Filter by date? (yes/no): ")? else {
        return Ok(());
    };

    let range = if answer.trim().eq_ignore_ascii_case("yes") {
        let Some(from) = prompt(input, output, "Start date (YYYY-MM-DD): ")? else {
            return Ok(());
        };
        let Some(to) = prompt(input, output, "End date (YYYY-MM-DD): ")? else {
            return Ok(());
        };

        match DateRange::parse(&from, &to) {
            Ok(range) => Some(range),
            Err(e) => {
                // Malformed dates skip the listing entirely.
                writeln!(output, "{}", e)?;
                return Ok(());
            }
        }
    } else {
        None
    };

    let notes = list_notes(repository, range);
    writeln!(output, "{}", format_note_list(&notes))?;
    Ok(())
}

/// Write a prompt and read one line, stripped of its line ending.
/// Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>> {
    write!(output, "{}", text)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prompt for a numeric id. A value that does not parse gets an error
/// message and resolves to `None`, returning control to the command loop.
fn prompt_id<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<u64>> {
    let Some(raw) = prompt(input, output, text)? else {
        return Ok(None);
    };

    match raw.trim().parse::<u64>() {
        Ok(id) => Ok(Some(id)),
        Err(_) => {
            writeln!(output, "Invalid id: '{}'", raw.trim())?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn open_repo(temp: &TempDir) -> FileRepository {
        FileRepository::open(temp.path().join("notes.json")).unwrap()
    }

    fn run_session(repository: &mut FileRepository, script: &str) -> String {
        let mut output = Vec::new();
        run(repository, Cursor::new(script.to_string()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_then_list() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "add\nGroceries\nMilk and eggs\nlist\nno\nexit\n");

        assert!(output.contains("Added note 1"));
        assert!(output.contains("ID: 1"));
        assert!(output.contains("Title: Groceries"));
        assert!(output.contains("Body: Milk and eggs"));
    }

    #[test]
    fn test_exit_ends_session() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "exit\nadd\nnever\nreached\n");

        assert!(!output.contains("Note title"));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        // No exit command; the loop must stop at end of input.
        let output = run_session(&mut repo, "add\nA\nx\n");
        assert!(output.contains("Added note 1"));
    }

    #[test]
    fn test_unknown_command_reprompts() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "frobnicate\nexit\n");

        assert!(output.contains("Unknown command: 'frobnicate'"));
        // Prompt printed again after the unknown command
        assert_eq!(output.matches("Enter a command").count(), 2);
    }

    #[test]
    fn test_edit_updates_note() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        run_session(&mut repo, "add\nA\nx\nedit\n1\nA2\nx2\nexit\n");

        assert_eq!(repo.notes()[0].title, "A2");
        assert_eq!(repo.notes()[0].body, "x2");
    }

    #[test]
    fn test_edit_unknown_id_is_silent() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "add\nA\nx\nedit\n99\nB\ny\nexit\n");

        assert_eq!(repo.notes()[0].title, "A");
        assert!(!output.contains("not found"));
    }

    #[test]
    fn test_non_numeric_id_reports_and_continues() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "delete\nabc\nexit\n");

        assert!(output.contains("Invalid id: 'abc'"));
        // Loop is still alive after the bad id
        assert_eq!(output.matches("Enter a command").count(), 2);
    }

    #[test]
    fn test_delete_removes_note() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        run_session(&mut repo, "add\nA\nx\nadd\nB\ny\ndelete\n1\nexit\n");

        let ids: Vec<u64> = repo.notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn test_list_empty_repository() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "list\nno\nexit\n");
        assert!(output.contains("No notes found"));
    }

    #[test]
    fn test_list_bad_date_reports_and_skips_listing() {
        let temp = TempDir::new().unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(
            &mut repo,
            "add\nA\nx\nlist\nyes\n2025-99-01\n2025-01-31\nexit\n",
        );

        assert!(output.contains("Invalid date: '2025-99-01'"));
        assert!(!output.contains("ID: 1"));
    }

    #[test]
    fn test_list_with_date_filter() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("notes.json"),
            r#"[
  {"id": 1, "title": "old", "body": "a", "timestamp": "2020-06-01 12:00:00"},
  {"id": 2, "title": "older", "body": "b", "timestamp": "2019-06-01 12:00:00"}
]"#,
        )
        .unwrap();
        let mut repo = open_repo(&temp);

        let output = run_session(&mut repo, "list\nyes\n2020-01-01\n2020-12-31\nexit\n");

        assert!(output.contains("Title: old\n"));
        assert!(!output.contains("Title: older"));
    }
}
