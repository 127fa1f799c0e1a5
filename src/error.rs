use thiserror::Error;

use crate::entities::AccountType;

/// Reasons a dataset is rejected at load time.
///
/// Queries never produce these; only catalog and category-table construction do.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("account code is empty")]
    EmptyCode,

    #[error("malformed account code {code:?}: expected 2 to 10 digits in pairs")]
    MalformedCode { code: String },

    #[error("duplicate account code {code:?}")]
    DuplicateCode { code: String },

    #[error("account {code:?} stores level {stored} but its code implies level {derived}")]
    LevelMismatch { code: String, stored: u8, derived: u8 },

    #[error("account {code:?} stores parent {stored:?} but its code implies {derived:?}")]
    ParentMismatch {
        code: String,
        stored: Option<String>,
        derived: Option<String>,
    },

    #[error("account {code:?} is tagged {account_type:?} but sits at level {level}")]
    TypeMismatch {
        code: String,
        account_type: AccountType,
        level: u8,
    },

    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
}
