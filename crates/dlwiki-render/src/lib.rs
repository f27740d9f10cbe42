pub mod wikitext;

pub use wikitext::{ENTRY_SEPARATOR, render_entry, render_store};
