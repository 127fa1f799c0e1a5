// Chart of Accounts - Core Library
// Code-addressed account hierarchy: derivation, lookup, traversal, classification

pub mod codec;
pub mod entities;
pub mod error;
pub mod catalog;
pub mod resolver;
pub mod classifier;
pub mod export;
pub mod seed;

// Re-export commonly used types
pub use codec::{level_of, parent_of, top_level_prefix, MAX_LEVEL};
pub use entities::{Account, AccountType, CategoryTable, Language, Level1Category};
pub use error::CatalogError;
pub use catalog::Catalog;
pub use resolver::{is_ancestor, path_string, resolve_path};
pub use classifier::{Classification, Classifier};
pub use seed::standard_catalog;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
