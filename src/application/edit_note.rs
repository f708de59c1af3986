//! Edit note use case

use crate::error::Result;
use crate::infrastructure::FileRepository;

/// Replace the title and body of the note with the given id, re-stamping
/// its timestamp. Returns whether a note was updated; an unknown id is a
/// no-op the caller may choose to surface.
pub fn edit_note(repository: &mut FileRepository, id: u64, title: &str, body: &str) -> Result<bool> {
    repository.edit(id, title, body)
}
