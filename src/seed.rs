// 🌱 Seed Dataset - The standard chart of accounts
//
// Static, versioned configuration. Every entry stores its level, parent and
// type explicitly; `standard_catalog()` checks them against the codes.
//
// Structure (level 1):
// - 01 Current Assets
// - 02 Fixed Assets
// - 03 Current Liabilities
// - 04 Long-Term Liabilities
// - 05 Equity
// - 06 Costs & Expenses
// - 07 Revenue

use crate::catalog::Catalog;
use crate::entities::AccountType::{Detail, Group, Header, Subgroup};
use crate::entities::{Account, AccountType, CategoryTable, Level1Category};
use crate::error::CatalogError;

/// (code, Arabic name, English name)
pub const LEVEL1_CATEGORIES: &[(&str, &str, &str)] = &[
    ("01", "الأصول المتداولة", "Current Assets"),
    ("02", "الأصول الثابتة", "Fixed Assets"),
    ("03", "الخصوم المتداولة", "Current Liabilities"),
    ("04", "الخصوم طويلة الأجل", "Long-Term Liabilities"),
    ("05", "حقوق الملكية", "Equity"),
    ("06", "التكاليف والمصروفات", "Costs & Expenses"),
    ("07", "الإيرادات", "Revenue"),
];

/// (code, name, level, parent, type), in pre-order
pub const ACCOUNTS: &[(&str, &str, u8, Option<&str>, AccountType)] = &[
    // 01 - Current Assets
    ("01", "الأصول المتداولة", 1, None, Header),
    ("0101", "النقدية وما في حكمها", 2, Some("01"), Group),
    ("010101", "الصندوق", 3, Some("0101"), Subgroup),
    ("01010101", "الصندوق الرئيسي", 4, Some("010101"), Detail),
    ("01010102", "صندوق المصروفات النثرية", 4, Some("010101"), Detail),
    ("010102", "البنوك", 3, Some("0101"), Subgroup),
    ("01010201", "البنك الأهلي - حساب جاري", 4, Some("010102"), Detail),
    ("01010202", "بنك الراجحي - حساب جاري", 4, Some("010102"), Detail),
    ("0102", "الذمم المدينة", 2, Some("01"), Group),
    ("010201", "العملاء", 3, Some("0102"), Subgroup),
    ("010202", "أوراق القبض", 3, Some("0102"), Subgroup),
    ("010203", "سلف الموظفين", 3, Some("0102"), Subgroup),
    ("0103", "المخزون", 2, Some("01"), Group),
    ("010301", "مخزون المواد الخام", 3, Some("0103"), Subgroup),
    ("010302", "مخزون البضاعة التامة", 3, Some("0103"), Subgroup),
    ("0104", "المصروفات المدفوعة مقدماً", 2, Some("01"), Group),
    ("010401", "إيجار مدفوع مقدماً", 3, Some("0104"), Subgroup),
    ("010402", "تأمين مدفوع مقدماً", 3, Some("0104"), Subgroup),
    // 02 - Fixed Assets
    ("02", "الأصول الثابتة", 1, None, Header),
    ("0201", "الأراضي", 2, Some("02"), Group),
    ("0202", "المباني", 2, Some("02"), Group),
    ("020201", "مباني إدارية", 3, Some("0202"), Subgroup),
    ("0203", "الآلات والمعدات", 2, Some("02"), Group),
    ("0204", "وسائل النقل", 2, Some("02"), Group),
    ("0205", "الأثاث والتجهيزات", 2, Some("02"), Group),
    ("0206", "مجمع الإهلاك", 2, Some("02"), Group),
    ("020601", "مجمع إهلاك المباني", 3, Some("0206"), Subgroup),
    ("020602", "مجمع إهلاك الآلات والمعدات", 3, Some("0206"), Subgroup),
    ("020603", "مجمع إهلاك وسائل النقل", 3, Some("0206"), Subgroup),
    // 03 - Current Liabilities
    ("03", "الخصوم المتداولة", 1, None, Header),
    ("0301", "الموردون", 2, Some("03"), Group),
    ("030101", "موردون محليون", 3, Some("0301"), Subgroup),
    ("030102", "موردون خارجيون", 3, Some("0301"), Subgroup),
    ("0302", "أوراق الدفع", 2, Some("03"), Group),
    ("0303", "القروض قصيرة الأجل", 2, Some("03"), Group),
    ("0304", "المصروفات المستحقة", 2, Some("03"), Group),
    ("030401", "مصروفات مستحقة", 3, Some("0304"), Subgroup),
    ("03040101", "مصروفات مستحقة رواتب", 4, Some("030401"), Detail),
    ("03040102", "مصروفات مستحقة إيجار", 4, Some("030401"), Detail),
    ("03040103", "مصروفات مستحقة كهرباء ومياه", 4, Some("030401"), Detail),
    ("030402", "ضرائب مستحقة", 3, Some("0304"), Subgroup),
    ("03040201", "ضريبة القيمة المضافة المستحقة", 4, Some("030402"), Detail),
    ("0305", "الإيرادات المقدمة", 2, Some("03"), Group),
    // 04 - Long-Term Liabilities
    ("04", "الخصوم طويلة الأجل", 1, None, Header),
    ("0401", "القروض طويلة الأجل", 2, Some("04"), Group),
    ("0402", "مخصص مكافأة نهاية الخدمة", 2, Some("04"), Group),
    // 05 - Equity
    ("05", "حقوق الملكية", 1, None, Header),
    ("0501", "رأس المال", 2, Some("05"), Group),
    ("0502", "الاحتياطيات", 2, Some("05"), Group),
    ("050201", "الاحتياطي النظامي", 3, Some("0502"), Subgroup),
    ("050202", "الاحتياطي الاختياري", 3, Some("0502"), Subgroup),
    ("0503", "الأرباح المحتجزة", 2, Some("05"), Group),
    ("0504", "جاري الشركاء", 2, Some("05"), Group),
    // 06 - Costs & Expenses
    ("06", "التكاليف والمصروفات", 1, None, Header),
    ("0601", "تكلفة المبيعات", 2, Some("06"), Group),
    ("060101", "تكلفة البضاعة المباعة", 3, Some("0601"), Subgroup),
    ("060102", "المشتريات", 3, Some("0601"), Subgroup),
    ("0602", "المصروفات العمومية والإدارية", 2, Some("06"), Group),
    ("060201", "الرواتب والأجور", 3, Some("0602"), Subgroup),
    ("06020101", "رواتب أساسية", 4, Some("060201"), Detail),
    ("06020102", "بدلات", 4, Some("060201"), Detail),
    ("060202", "الإيجارات", 3, Some("0602"), Subgroup),
    ("060203", "الكهرباء والمياه", 3, Some("0602"), Subgroup),
    ("060204", "الاتصالات والإنترنت", 3, Some("0602"), Subgroup),
    ("060205", "القرطاسية والمطبوعات", 3, Some("0602"), Subgroup),
    ("060206", "الصيانة والإصلاحات", 3, Some("0602"), Subgroup),
    ("060207", "مصروفات السفر والانتقالات", 3, Some("0602"), Subgroup),
    ("060208", "الرسوم الحكومية", 3, Some("0602"), Subgroup),
    ("060209", "أتعاب مهنية واستشارات", 3, Some("0602"), Subgroup),
    ("060210", "مصروفات التأمين", 3, Some("0602"), Subgroup),
    ("060211", "مصروفات الإهلاك", 3, Some("0602"), Subgroup),
    ("060212", "مصروفات عمومية متنوعة", 3, Some("0602"), Subgroup),
    ("0603", "مصروفات البيع والتسويق", 2, Some("06"), Group),
    ("060301", "الدعاية والإعلان", 3, Some("0603"), Subgroup),
    ("060302", "عمولات المبيعات", 3, Some("0603"), Subgroup),
    ("0604", "المصروفات التمويلية", 2, Some("06"), Group),
    ("060401", "فوائد بنكية", 3, Some("0604"), Subgroup),
    ("060402", "عمولات بنكية", 3, Some("0604"), Subgroup),
    // 07 - Revenue
    ("07", "الإيرادات", 1, None, Header),
    ("0701", "إيرادات النشاط", 2, Some("07"), Group),
    ("070101", "إيرادات المبيعات", 3, Some("0701"), Subgroup),
    ("070102", "إيرادات الخدمات", 3, Some("0701"), Subgroup),
    ("0702", "مردودات ومسموحات المبيعات", 2, Some("07"), Group),
    ("0703", "إيرادات أخرى", 2, Some("07"), Group),
    ("070301", "أرباح بيع أصول", 3, Some("0703"), Subgroup),
    ("070302", "إيرادات متنوعة", 3, Some("0703"), Subgroup),
];

pub fn standard_categories() -> Result<CategoryTable, CatalogError> {
    CategoryTable::new(
        LEVEL1_CATEGORIES
            .iter()
            .map(|&(code, name_ar, name_en)| Level1Category::new(code, name_ar, name_en))
            .collect(),
    )
}

pub fn standard_accounts() -> Vec<Account> {
    ACCOUNTS
        .iter()
        .map(|&(code, name, level, parent, account_type)| Account {
            code: code.to_string(),
            name: name.to_string(),
            level,
            parent: parent.map(str::to_string),
            account_type,
        })
        .collect()
}

/// The seeded chart of accounts, validated and indexed
pub fn standard_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(standard_accounts(), standard_categories()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_passes_validation() {
        let catalog = standard_catalog().unwrap();

        assert_eq!(catalog.len(), ACCOUNTS.len());
        assert_eq!(catalog.categories().len(), 7);
    }

    #[test]
    fn test_every_root_has_a_category() {
        let catalog = standard_catalog().unwrap();

        assert_eq!(catalog.roots().len(), 7);
        for root in catalog.roots() {
            let category = catalog.category_of(&root.code).unwrap();
            assert_eq!(category.name_ar, root.name);
        }
    }

    #[test]
    fn test_seed_is_pre_order() {
        // parents appear before their children
        for (idx, &(_, _, _, parent, _)) in ACCOUNTS.iter().enumerate() {
            if let Some(parent) = parent {
                assert!(ACCOUNTS[..idx].iter().any(|&(code, ..)| code == parent));
            }
        }
    }

    #[test]
    fn test_seed_has_no_level5_entries() {
        let catalog = standard_catalog().unwrap();
        assert!(catalog.at_level(5).is_empty());
    }
}
