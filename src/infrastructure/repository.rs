//! JSON-file note repository

use crate::domain::{DateRange, Note};
use crate::error::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Owns the authoritative note collection and its backing JSON file.
///
/// The whole collection is rewritten on every mutation, so the store never
/// diverges from memory beyond a single mutation's window. Exactly one
/// process is assumed to access the file at a time.
#[derive(Debug)]
pub struct FileRepository {
    path: PathBuf,
    notes: Vec<Note>,
    next_id: u64,
}

impl FileRepository {
    /// Open a repository backed by the given file.
    ///
    /// A missing or undecodable store yields an empty collection; the
    /// repository never fails to start because storage is absent or
    /// corrupt. Any other read failure propagates. Persisted ids and
    /// timestamps are preserved exactly, with no re-stamping.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let notes = match fs::read_to_string(&path) {
            Ok(contents) => match Self::decode(&contents) {
                Ok(notes) => notes,
                // Corrupt store: recovered here into an empty collection,
                // never surfaced.
                Err(_) => Vec::new(),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        // Seed the id counter past every persisted id so a delete followed
        // by further adds never hands out a duplicate.
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;

        Ok(FileRepository {
            path,
            notes,
            next_id,
        })
    }

    /// Decode the persisted note array
    fn decode(contents: &str) -> std::result::Result<Vec<Note>, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Rewrite the backing file with the full in-memory collection.
    ///
    /// Writes to a temp file in the same directory, then renames into
    /// place. On Windows, `rename` does not overwrite existing files, so
    /// the destination is removed first.
    pub fn persist(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.notes)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.jotr-tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("notes.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, contents)?;

        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Add a note, persist, and return its assigned id
    pub fn add(&mut self, title: impl Into<String>, body: impl Into<String>) -> Result<u64> {
        let id = self.next_id;
        self.next_id += 1;

        self.notes.push(Note::new(id, title, body));
        self.persist()?;
        Ok(id)
    }

    /// Replace title and body of the first note with a matching id,
    /// re-stamping its timestamp. Returns whether a note was updated; an
    /// unknown id is a no-op, not an error, and nothing is rewritten.
    pub fn edit(
        &mut self,
        id: u64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<bool> {
        match self.notes.iter_mut().find(|note| note.id == id) {
            Some(note) => {
                note.update(title, body);
                self.persist()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove every note with a matching id and persist. Returns whether
    /// anything was removed; an unknown id is a no-op, not an error.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let removed = self.notes.len() != before;

        self.persist()?;
        Ok(removed)
    }

    /// Iterate notes in insertion order, restricted to the given inclusive
    /// date range when one is supplied. Recomputed fresh on every call.
    pub fn list(&self, range: Option<DateRange>) -> impl Iterator<Item = &Note> {
        self.notes
            .iter()
            .filter(move |note| range.is_none_or(|r| r.contains(note.timestamp)))
    }

    /// All notes in insertion order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
