// 📚 Account Catalog - The taxonomy, indexed by code
//
// Loaded once, never mutated. Validation runs at construction and fails
// fast; after that every query is infallible and returns empty results
// instead of errors.
//
// Storage is an arena (declaration order) plus two indexes:
// - code → position
// - parent code → child positions (declaration order)

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::codec::{self, MAX_LEVEL, SEGMENT_WIDTH};
use crate::entities::{Account, AccountType, CategoryTable, Level1Category};
use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct Catalog {
    accounts: Vec<Account>,
    by_code: HashMap<String, usize>,
    children: HashMap<String, Vec<usize>>,
    categories: CategoryTable,
}

impl Catalog {
    /// Validate and index a dataset.
    ///
    /// Rejects the whole dataset on the first malformed code, duplicate code,
    /// or stored level/parent/type that disagrees with the code. Stored codes
    /// are at most five segments long; only query input collapses deeper
    /// codes into level 5.
    pub fn new(accounts: Vec<Account>, categories: CategoryTable) -> Result<Self, CatalogError> {
        let mut by_code = HashMap::with_capacity(accounts.len());
        let mut children: HashMap<String, Vec<usize>> = HashMap::new();

        for (idx, account) in accounts.iter().enumerate() {
            if let Err(err) = validate_account(account) {
                tracing::warn!(code = %account.code, error = %err, "rejecting catalog");
                return Err(err);
            }

            if by_code.insert(account.code.clone(), idx).is_some() {
                tracing::warn!(code = %account.code, "rejecting catalog: duplicate code");
                return Err(CatalogError::DuplicateCode {
                    code: account.code.clone(),
                });
            }

            if let Some(parent) = &account.parent {
                children.entry(parent.clone()).or_default().push(idx);
            }
        }

        let catalog = Catalog {
            accounts,
            by_code,
            children,
            categories,
        };

        tracing::debug!(
            accounts = catalog.len(),
            categories = catalog.categories.len(),
            fingerprint = %catalog.fingerprint(),
            "catalog loaded"
        );

        Ok(catalog)
    }

    /// Load accounts from a JSON array of account records
    ///
    /// ```
    /// use chart_of_accounts::{Catalog, CategoryTable};
    ///
    /// let json = r#"[
    ///     {"code": "01", "name": "Assets", "level": 1, "parent": null, "type": "header"},
    ///     {"code": "0101", "name": "Cash", "level": 2, "parent": "01", "type": "group"}
    /// ]"#;
    /// let catalog = Catalog::from_json_str(json, CategoryTable::default()).unwrap();
    ///
    /// assert_eq!(catalog.children_of("01").len(), 1);
    /// ```
    pub fn from_json_str(json: &str, categories: CategoryTable) -> Result<Self, CatalogError> {
        let accounts: Vec<Account> = serde_json::from_str(json)?;
        Self::new(accounts, categories)
    }

    // ========================================================================
    // LOOKUPS
    // ========================================================================

    /// Exact-match lookup. Codes are unique, so at most one account matches.
    pub fn find_by_code(&self, code: &str) -> Option<&Account> {
        self.by_code.get(code).map(|&idx| &self.accounts[idx])
    }

    /// Direct children of `parent_code`, in declaration order
    pub fn children_of(&self, parent_code: &str) -> Vec<&Account> {
        self.children
            .get(parent_code)
            .map(|positions| positions.iter().map(|&idx| &self.accounts[idx]).collect())
            .unwrap_or_default()
    }

    /// Level-1 category the code rolls up into
    pub fn category_of(&self, code: &str) -> Option<&Level1Category> {
        self.categories.for_code(code)
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    // ========================================================================
    // TRAVERSAL
    // ========================================================================

    /// Level-1 accounts, in declaration order
    pub fn roots(&self) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.is_root()).collect()
    }

    /// All transitive descendants, pre-order
    ///
    /// Example: "0304" → ["030401", "03040101", "03040102", ..., "030402"]
    pub fn descendants_of(&self, code: &str) -> Vec<&Account> {
        let mut descendants = Vec::new();
        let mut stack: Vec<&Account> = self.children_of(code).into_iter().rev().collect();

        while let Some(account) = stack.pop() {
            descendants.push(account);
            stack.extend(self.children_of(&account.code).into_iter().rev());
        }

        descendants
    }

    /// Accounts whose stored level equals `level`
    pub fn at_level(&self, level: u8) -> Vec<&Account> {
        self.accounts.iter().filter(|a| a.level == level).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Account> {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// SHA-256 over the ordered account records, identifying the dataset version
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for account in &self.accounts {
            hash_field(&mut hasher, account.code.as_bytes());
            hash_field(&mut hasher, account.name.as_bytes());
            hash_field(&mut hasher, &[account.level]);
            match &account.parent {
                Some(parent) => {
                    hasher.update([1u8]);
                    hash_field(&mut hasher, parent.as_bytes());
                }
                None => hasher.update([0u8]),
            }
            hash_field(&mut hasher, account.account_type.as_str().as_bytes());
        }
        format!("{:x}", hasher.finalize())
    }
}

/// Length-prefixed, so free-text names cannot run into the next field
fn hash_field(hasher: &mut Sha256, bytes: &[u8]) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}

fn validate_account(account: &Account) -> Result<(), CatalogError> {
    let code = &account.code;

    if code.is_empty() {
        return Err(CatalogError::EmptyCode);
    }
    if !codec::is_well_formed(code) || code.len() > usize::from(MAX_LEVEL) * SEGMENT_WIDTH {
        return Err(CatalogError::MalformedCode { code: code.clone() });
    }

    let derived_level = codec::level_of(code);
    if account.level != derived_level {
        return Err(CatalogError::LevelMismatch {
            code: code.clone(),
            stored: account.level,
            derived: derived_level,
        });
    }

    let derived_parent = codec::parent_of(code);
    if account.parent.as_deref() != derived_parent {
        return Err(CatalogError::ParentMismatch {
            code: code.clone(),
            stored: account.parent.clone(),
            derived: derived_parent.map(str::to_string),
        });
    }

    if AccountType::for_level(derived_level) != Some(account.account_type) {
        return Err(CatalogError::TypeMismatch {
            code: code.clone(),
            account_type: account.account_type,
            level: derived_level,
        });
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
