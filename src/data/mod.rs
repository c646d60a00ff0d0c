pub mod demo;
mod loader;
mod provider;

pub use loader::{LoadError, load_items_from_json, validate_items};
pub use provider::{
    ContentProvider, JsonContent, StaticContent, TierCounts, filter_by_category,
    select_session_items, subjects,
};
