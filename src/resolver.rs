// 🧭 Path Resolver - Ancestor chains rebuilt from the code alone
//
// The walk follows code truncation, never the stored `parent` field, so
// a level with no catalog entry is skipped instead of ending the walk:
//
//   "06010101" with no "060101" record → [06, 0601, 06010101]
//
// Each step shortens the code by one segment, so the loop runs at most
// once per segment.

use crate::catalog::Catalog;
use crate::codec;
use crate::entities::Account;

/// Catalog accounts on the way from the root down to `code`, root first.
///
/// The last element is the account for `code` itself when it exists.
/// Unknown codes with no known ancestors give an empty path.
pub fn resolve_path<'a>(catalog: &'a Catalog, code: &str) -> Vec<&'a Account> {
    let mut path = Vec::new();
    let mut current = Some(code);

    while let Some(step) = current {
        if let Some(account) = catalog.find_by_code(step) {
            path.push(account);
        }
        current = codec::parent_of(step);
    }

    path.reverse();
    path
}

/// Names along the resolved path, joined for display
///
/// Example: "03040101" → "الخصوم المتداولة → المصروفات المستحقة → ..."
pub fn path_string(catalog: &Catalog, code: &str) -> String {
    resolve_path(catalog, code)
        .iter()
        .map(|account| account.name.as_str())
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Whether `ancestor` is on the code chain of `descendant`.
///
/// Pure prefix check by whole segments; a code is its own ancestor.
pub fn is_ancestor(ancestor: &str, descendant: &str) -> bool {
    if ancestor.is_empty() {
        return false;
    }
    ancestor == descendant
        || codec::ancestors_of(descendant)
            .iter()
            .any(|code| *code == ancestor)
}
