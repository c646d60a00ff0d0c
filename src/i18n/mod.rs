//! Language selection, content resolution and the UI string table.

mod language;
mod strings;

pub use language::{Language, ResolvedText, UnknownLanguage, resolve};
pub use strings::t;
