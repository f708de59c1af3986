//! Application layer - Use cases and orchestration

pub mod add_note;
pub mod delete_note;
pub mod edit_note;
pub mod list_notes;
pub mod manage_config;

pub use add_note::add_note;
pub use delete_note::delete_note;
pub use edit_note::edit_note;
pub use list_notes::list_notes;
