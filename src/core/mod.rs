//! Content loading and access.
//!
//! This module contains:
//! - Store: Parsing, validation and the read-only collections
//! - Validation: Schema checks (fatal)
//! - Lint: Data-quality findings (warnings)
//! - Search: Lookups across collections
//! - Export: JSON bundle for the rendering layer

pub mod export;
pub mod lint;
pub mod search;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use export::{write_export, Export};
pub use lint::Lint;
pub use search::SearchHit;
pub use store::{load, load_once, store, ContentError, ContentSources, ContentStore, LoadOptions, StoreCell};
pub use validation::{validate_url, Violation};
