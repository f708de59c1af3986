//! Add note use case

use crate::error::Result;
use crate::infrastructure::FileRepository;

/// Create a note with the given title and body and return its assigned id.
/// Empty strings are accepted.
pub fn add_note(repository: &mut FileRepository, title: &str, body: &str) -> Result<u64> {
    repository.add(title, body)
}
