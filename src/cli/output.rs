//! Output formatting utilities

use crate::domain::note::TIMESTAMP_FORMAT;
use crate::domain::Note;

/// Format a single note for display
pub fn format_note(note: &Note) -> String {
    format!(
        "ID: {}\nTitle: {}\nBody: {}\nTimestamp: {}\n",
        note.id,
        note.title,
        note.body,
        note.timestamp.format(TIMESTAMP_FORMAT)
    )
}

/// Format a list of notes for display, one block per note separated by
/// blank lines
pub fn format_note_list(notes: &[&Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format_note(note));
        output.push('\n');
    }
    output
}
