// 🏷️ Level-1 Category - The closed set of top-level groupings
//
// Hand-authored, not derived from the catalog. Each category owns one
// 2-character prefix and carries an Arabic and an English display name.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::CatalogError;

// ============================================================================
// DISPLAY LANGUAGE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Arabic,
    English,
}

// ============================================================================
// CATEGORY ENTITY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level1Category {
    /// 2-character prefix, e.g. "03"
    pub code: String,

    pub name_ar: String,

    pub name_en: String,
}

impl Level1Category {
    pub fn new(code: &str, name_ar: &str, name_en: &str) -> Self {
        Level1Category {
            code: code.to_string(),
            name_ar: name_ar.to_string(),
            name_en: name_en.to_string(),
        }
    }

    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Arabic => &self.name_ar,
            Language::English => &self.name_en,
        }
    }
}

// ============================================================================
// CATEGORY TABLE
// ============================================================================

/// Ordered, immutable table of level-1 categories
///
/// Only built through [`CategoryTable::new`], so every table is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<Level1Category>,
}

impl CategoryTable {
    /// Build a table, rejecting malformed or repeated prefixes
    pub fn new(categories: Vec<Level1Category>) -> Result<Self, CatalogError> {
        for (idx, category) in categories.iter().enumerate() {
            if let Err(err) = validate_category(category, &categories[..idx]) {
                tracing::warn!(code = %category.code, error = %err, "rejecting category table");
                return Err(err);
            }
        }

        Ok(CategoryTable { categories })
    }

    /// Load a table from a JSON array of `{code, name_ar, name_en}` objects
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let categories: Vec<Level1Category> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    /// Category whose code equals `prefix` exactly
    pub fn find(&self, prefix: &str) -> Option<&Level1Category> {
        self.categories.iter().find(|c| c.code == prefix)
    }

    /// Category an arbitrary code rolls up into
    pub fn for_code(&self, code: &str) -> Option<&Level1Category> {
        codec::top_level_prefix(code).and_then(|prefix| self.find(prefix))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Level1Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

fn validate_category(
    category: &Level1Category,
    earlier: &[Level1Category],
) -> Result<(), CatalogError> {
    if !codec::is_well_formed(&category.code) || codec::level_of(&category.code) != 1 {
        return Err(CatalogError::MalformedCode {
            code: category.code.clone(),
        });
    }
    if earlier.iter().any(|c| c.code == category.code) {
        return Err(CatalogError::DuplicateCode {
            code: category.code.clone(),
        });
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
