// 📒 Account Entity - One node of the chart of accounts
//
// "The code IS the identity"
//
// An account has no id beyond its code. Level and parent are stored
// explicitly but are always derivable from the code; the catalog rejects
// any entry where the stored values disagree with the derivation.

use serde::{Deserialize, Serialize};

use crate::codec;

// ============================================================================
// ACCOUNT TYPE
// ============================================================================

/// Classification tag, one per level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    /// Level 1 - major category (e.g. Current Assets)
    Header,

    /// Level 2
    Group,

    /// Level 3
    Subgroup,

    /// Level 4 - the level postings normally land on
    Detail,

    /// Level 5 and anything longer
    SubDetail,
}

impl AccountType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Header => "header",
            AccountType::Group => "group",
            AccountType::Subgroup => "subgroup",
            AccountType::Detail => "detail",
            AccountType::SubDetail => "subdetail",
        }
    }

    /// The tag a well-formed account at `level` carries
    pub fn for_level(level: u8) -> Option<AccountType> {
        match level {
            1 => Some(AccountType::Header),
            2 => Some(AccountType::Group),
            3 => Some(AccountType::Subgroup),
            4 => Some(AccountType::Detail),
            5 => Some(AccountType::SubDetail),
            _ => None,
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            AccountType::Header => 1,
            AccountType::Group => 2,
            AccountType::Subgroup => 3,
            AccountType::Detail => 4,
            AccountType::SubDetail => 5,
        }
    }
}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// Immutable account record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Positional code, e.g. "03040101"
    pub code: String,

    /// Display label. Not used for identity or lookup.
    pub name: String,

    /// 1-5, must equal `codec::level_of(code)`
    pub level: u8,

    /// Immediate ancestor code; `None` only for level-1 entries
    pub parent: Option<String>,

    #[serde(rename = "type")]
    pub account_type: AccountType,
}

impl Account {
    /// Build an account with level, parent and type derived from the code.
    ///
    /// Returns `None` for codes shorter than one segment.
    pub fn derived(code: impl Into<String>, name: impl Into<String>) -> Option<Self> {
        let code = code.into();
        let level = codec::level_of(&code);
        let account_type = AccountType::for_level(level)?;
        let parent = codec::parent_of(&code).map(str::to_string);

        Some(Account {
            code,
            name: name.into(),
            level,
            parent,
            account_type,
        })
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Code of the level-1 category this account rolls up into
    pub fn top_level_prefix(&self) -> Option<&str> {
        codec::top_level_prefix(&self.code)
    }
}

// ============================================================================
// TESTS
// ============================================================================
