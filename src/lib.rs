//! jotr - Terminal note-taking application
//!
//! A command-line note manager that keeps short text notes with a title,
//! body, and modification timestamp in a single JSON file.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NotesError;
