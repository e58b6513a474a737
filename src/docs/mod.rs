//! Authored document discovery and link classification.

mod links;
mod store;

pub use links::{LinkKind, extract_links};
pub use store::DocStore;
