use chart_of_accounts::{
    level_of, parent_of, resolve_path, standard_catalog, Catalog, Classifier, Language,
};

fn catalog() -> Catalog {
    standard_catalog().expect("seed catalog is valid")
}

#[test]
fn accrued_salaries_classification() {
    let catalog = catalog();
    let record = Classifier::new(&catalog).classify("03040101", "مصروفات مستحقة رواتب");

    assert_eq!(record.level, 4);
    assert_eq!(record.category.as_ref().map(|c| c.name_en.as_str()), Some("Current Liabilities"));
    assert_eq!(record.level1_name, "الخصوم المتداولة");
    assert_eq!(record.level2_name, catalog.find_by_code("0304").unwrap().name);
    assert_eq!(record.level3_name, catalog.find_by_code("030401").unwrap().name);
    assert_eq!(record.level4_name, "مصروفات مستحقة رواتب");
    assert_eq!(record.level5_name, "");
}

#[test]
fn accrued_salaries_classification_in_english() {
    let catalog = catalog();
    let record = Classifier::new(&catalog)
        .with_language(Language::English)
        .classify("03040101", "Accrued salaries");

    assert_eq!(record.level1_name, "Current Liabilities");
    assert_eq!(record.level4_name, "Accrued salaries");
}

#[test]
fn general_admin_expenses_have_twelve_subgroups() {
    let catalog = catalog();
    let children = catalog.children_of("0602");

    let codes: Vec<&str> = children.iter().map(|a| a.code.as_str()).collect();
    let expected: Vec<String> = (1..=12).map(|n| format!("0602{n:02}")).collect();

    assert_eq!(codes, expected);
    assert!(children.iter().all(|a| a.parent.as_deref() == Some("0602")));
}

#[test]
fn unknown_top_level_code_degrades_gracefully() {
    let catalog = catalog();
    let record = Classifier::new(&catalog).classify("99", "Unknown");

    assert_eq!(record.level, 1);
    assert!(record.category.is_none());
    assert_eq!(record.level1_name, "");
    assert_eq!(record.level2_name, "");
    assert_eq!(record.level3_name, "");
    assert_eq!(record.level4_name, "");
    assert_eq!(record.level5_name, "");
}

#[test]
fn parent_lookup_never_matches_partially() {
    let catalog = catalog();

    for account in catalog.iter().filter(|a| a.level > 1) {
        let parent_code = parent_of(&account.code).unwrap();
        if let Some(parent) = catalog.find_by_code(parent_code) {
            assert_eq!(parent.code, parent_code);
        }
    }
}

#[test]
fn children_and_parent_fields_agree() {
    let catalog = catalog();

    for parent in catalog.iter() {
        let children = catalog.children_of(&parent.code);
        for candidate in catalog.iter() {
            let listed = children.iter().any(|c| c.code == candidate.code);
            let points_here = candidate.parent.as_deref() == Some(parent.code.as_str());
            assert_eq!(listed, points_here, "{} under {}", candidate.code, parent.code);
        }
    }
}

#[test]
fn every_path_is_root_first_and_ends_at_the_account() {
    let catalog = catalog();

    for account in catalog.iter() {
        let path = resolve_path(&catalog, &account.code);

        assert_eq!(path.last().map(|a| a.code.as_str()), Some(account.code.as_str()));
        assert_eq!(path[0].level, 1);
        assert!(path.windows(2).all(|w| w[0].level < w[1].level));
    }
}

#[test]
fn stored_levels_agree_with_codes() {
    let catalog = catalog();

    for account in catalog.iter() {
        assert_eq!(account.level, level_of(&account.code));
    }
}

#[test]
fn classification_is_repeatable() {
    let catalog = catalog();
    let classifier = Classifier::new(&catalog);

    for account in catalog.iter() {
        assert_eq!(
            classifier.classify(&account.code, &account.name),
            classifier.classify(&account.code, &account.name)
        );
    }
}

#[test]
fn catalog_is_shareable_across_threads() {
    let catalog = std::sync::Arc::new(catalog());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = std::sync::Arc::clone(&catalog);
            std::thread::spawn(move || {
                Classifier::new(&catalog)
                    .classify("06020101", "رواتب أساسية")
                    .level2_name
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "المصروفات العمومية والإدارية");
    }
}
