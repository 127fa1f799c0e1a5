// 🗂️ Classifier - Flattened lineage for reports and export
//
// Turns a code into one flat record: level, level-1 category, and the name
// at every level from 1 to 5. Downstream consumers read any ancestor's name
// directly instead of walking the path again.

use serde::Serialize;

use crate::catalog::Catalog;
use crate::codec;
use crate::entities::{Account, Language, Level1Category};
use crate::resolver;

// ============================================================================
// CLASSIFICATION RECORD
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub code: String,

    /// Caller-supplied name, stored verbatim
    pub name: String,

    /// 0 for empty input, otherwise 1-5
    pub level: u8,

    pub category: Option<Level1Category>,

    /// Root-first accounts found on the code chain
    pub path: Vec<Account>,

    pub level1_name: String,
    pub level2_name: String,
    pub level3_name: String,
    pub level4_name: String,
    pub level5_name: String,
}

impl Classification {
    /// Name recorded for `level` (1-5), or "" outside that range
    pub fn level_name(&self, level: u8) -> &str {
        match level {
            1 => &self.level1_name,
            2 => &self.level2_name,
            3 => &self.level3_name,
            4 => &self.level4_name,
            5 => &self.level5_name,
            _ => "",
        }
    }

    pub fn category_code(&self) -> &str {
        self.category.as_ref().map(|c| c.code.as_str()).unwrap_or("")
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    catalog: &'a Catalog,
    language: Language,
}

impl<'a> Classifier<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Classifier {
            catalog,
            language: Language::default(),
        }
    }

    /// Choose which category display name fills `level1_name`
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Classify a code under a caller-supplied name.
    ///
    /// The code need not exist in the catalog. The name fills the slot for
    /// the code's own level; shallower slots come from catalog ancestors and
    /// stay empty where the catalog has a gap. Never fails.
    pub fn classify(&self, code: &str, name: &str) -> Classification {
        let level = codec::level_of(code);
        let category = self.catalog.category_of(code).cloned();
        let path = resolver::resolve_path(self.catalog, code);

        let mut names: [String; 5] = Default::default();
        names[0] = category
            .as_ref()
            .map(|c| c.display_name(self.language).to_string())
            .unwrap_or_default();

        for slot in 2..=codec::MAX_LEVEL {
            let idx = usize::from(slot - 1);
            if slot == level {
                names[idx] = name.to_string();
            } else if slot < level {
                names[idx] = path
                    .iter()
                    .find(|account| account.level == slot)
                    .map(|account| account.name.clone())
                    .unwrap_or_default();
            }
        }

        let [level1_name, level2_name, level3_name, level4_name, level5_name] = names;

        Classification {
            code: code.to_string(),
            name: name.to_string(),
            level,
            category,
            path: path.into_iter().cloned().collect(),
            level1_name,
            level2_name,
            level3_name,
            level4_name,
            level5_name,
        }
    }

    /// Classify a catalog account under its own name
    pub fn classify_account(&self, account: &Account) -> Classification {
        self.classify(&account.code, &account.name)
    }

    /// Every catalog account, in declaration order
    pub fn classify_all(&self) -> Vec<Classification> {
        self.catalog
            .iter()
            .map(|account| self.classify_account(account))
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::CategoryTable;

    fn catalog() -> Catalog {
        let accounts = [
            ("03", "الخصوم المتداولة"),
            ("0304", "المصروفات المستحقة"),
            ("030401", "مصروفات مستحقة"),
            ("06", "التكاليف والمصروفات"),
            ("0601", "تكلفة المبيعات"),
            ("06010101", "مشتريات محلية"),
        ]
        .iter()
        .map(|(code, name)| Account::derived(*code, *name).unwrap())
        .collect();

        let categories = CategoryTable::new(vec![
            Level1Category::new("03", "الخصوم المتداولة", "Current Liabilities"),
            Level1Category::new("06", "التكاليف والمصروفات", "Costs & Expenses"),
        ])
        .unwrap();

        Catalog::new(accounts, categories).unwrap()
    }

    #[test]
    fn test_classify_fills_every_level() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("03040101", "مصروفات مستحقة رواتب");

        assert_eq!(result.level, 4);
        assert_eq!(result.category_code(), "03");
        assert_eq!(result.level1_name, "الخصوم المتداولة");
        assert_eq!(result.level2_name, "المصروفات المستحقة");
        assert_eq!(result.level3_name, "مصروفات مستحقة");
        assert_eq!(result.level4_name, "مصروفات مستحقة رواتب");
        assert_eq!(result.level5_name, "");
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn test_classify_stores_caller_name_verbatim() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("030401", "  renamed draft ");

        assert_eq!(result.name, "  renamed draft ");
        assert_eq!(result.level3_name, "  renamed draft ");
        // the catalog record is still on the path
        assert_eq!(result.path.last().unwrap().name, "مصروفات مستحقة");
    }

    #[test]
    fn test_classify_leaves_gap_levels_empty() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("06010101", "مشتريات محلية");

        assert_eq!(result.level2_name, "تكلفة المبيعات");
        assert_eq!(result.level3_name, "");
        assert_eq!(result.level4_name, "مشتريات محلية");
    }

    #[test]
    fn test_classify_in_english() {
        let catalog = catalog();
        let result = Classifier::new(&catalog)
            .with_language(Language::English)
            .classify("0601", "Cost of sales");

        assert_eq!(result.level1_name, "Costs & Expenses");
        assert_eq!(result.level2_name, "Cost of sales");
    }

    #[test]
    fn test_classify_unknown_top_level() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("99", "Unknown");

        assert_eq!(result.level, 1);
        assert!(result.category.is_none());
        assert!(result.path.is_empty());
        for level in 1..=5 {
            assert_eq!(result.level_name(level), "");
        }
    }

    #[test]
    fn test_classify_degrades_on_malformed_input() {
        let catalog = catalog();
        let classifier = Classifier::new(&catalog);

        let empty = classifier.classify("", "");
        assert_eq!(empty.level, 0);
        assert!(empty.category.is_none());
        assert_eq!(empty.level1_name, "");

        let odd = classifier.classify("030", "odd");
        assert_eq!(odd.level, 1);
        assert_eq!(odd.level1_name, "الخصوم المتداولة");
        assert_eq!(odd.level2_name, "");
    }

    #[test]
    fn test_classify_level5() {
        let catalog = catalog();
        let result = Classifier::new(&catalog).classify("0304010101", "فرع جدة");

        assert_eq!(result.level, 5);
        assert_eq!(result.level4_name, "");
        assert_eq!(result.level5_name, "فرع جدة");
    }

    #[test]
    fn test_classify_is_idempotent() {
        let catalog = catalog();
        let classifier = Classifier::new(&catalog);

        assert_eq!(
            classifier.classify("03040101", "x"),
            classifier.classify("03040101", "x")
        );
    }

    #[test]
    fn test_classify_all_uses_catalog_names() {
        let catalog = catalog();
        let all = Classifier::new(&catalog).classify_all();

        assert_eq!(all.len(), catalog.len());
        assert_eq!(all[2].code, "030401");
        assert_eq!(all[2].level3_name, "مصروفات مستحقة");
        assert_eq!(all[2].level2_name, "المصروفات المستحقة");
    }
}
