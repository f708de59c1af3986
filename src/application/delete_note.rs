//! Delete note use case

use crate::error::Result;
use crate::infrastructure::FileRepository;

/// Delete the note with the given id. Returns whether a note was removed;
/// an unknown id is a no-op.
pub fn delete_note(repository: &mut FileRepository, id: u64) -> Result<bool> {
    repository.delete(id)
}
