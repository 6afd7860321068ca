pub mod note;

pub use note::{CreateNote, Note, UpdateNote, DEFAULT_TAG};
