//! List notes use case

use crate::domain::{DateRange, Note};
use crate::infrastructure::FileRepository;

/// List notes in insertion order, optionally restricted to an inclusive
/// date range.
pub fn list_notes(repository: &FileRepository, range: Option<DateRange>) -> Vec<&Note> {
    repository.list(range).collect()
}
