// 🔢 Code Codec - Structure encoded in the account code itself
//
// An account code is a run of 2-character segments:
//   "03"       → Current Liabilities (level 1)
//   "0304"     → Accrued Expenses    (level 2)
//   "030401"   → Accrued Expenses    (level 3)
//   "03040101" → Accrued Salaries    (level 4)
//
// Nothing here looks at the dataset. These are plain text operations and
// never fail: empty or malformed input degrades to level 0 / no parent.

/// Width of one code segment, in characters
pub const SEGMENT_WIDTH: usize = 2;

/// Deepest level the scheme distinguishes. Longer codes collapse into it.
pub const MAX_LEVEL: u8 = 5;

// ============================================================================
// DERIVATIONS
// ============================================================================

/// Nesting depth of a code.
///
/// Empty input is level 0. Otherwise `length / 2`, capped at [`MAX_LEVEL`].
/// Only the length is checked; odd lengths and non-digit characters pass
/// through (validation belongs to catalog construction).
pub fn level_of(code: &str) -> u8 {
    let segments = code.chars().count() / SEGMENT_WIDTH;
    segments.min(MAX_LEVEL as usize) as u8
}

/// Code of the immediate ancestor, or `None` for level-1 and empty codes.
///
/// Purely textual: the returned code may not exist in any catalog.
pub fn parent_of(code: &str) -> Option<&str> {
    let len = code.chars().count();
    if len <= SEGMENT_WIDTH {
        return None;
    }

    let cut = code
        .char_indices()
        .nth(len - SEGMENT_WIDTH)
        .map(|(idx, _)| idx)?;
    Some(&code[..cut])
}

/// First segment of a code, used to key into the Level-1 category table.
pub fn top_level_prefix(code: &str) -> Option<&str> {
    if code.is_empty() {
        return None;
    }

    let end = code
        .char_indices()
        .nth(SEGMENT_WIDTH)
        .map(|(idx, _)| idx)
        .unwrap_or(code.len());
    Some(&code[..end])
}

/// Ancestor codes from the immediate parent up to the level-1 code
///
/// Example: "03040101" → ["030401", "0304", "03"]
pub fn ancestors_of(code: &str) -> Vec<&str> {
    let mut chain = Vec::new();
    let mut current = parent_of(code);

    while let Some(parent) = current {
        chain.push(parent);
        current = parent_of(parent);
    }

    chain
}

// ============================================================================
// SHAPE CHECKS
// ============================================================================

/// True when the code is non-empty, all ASCII digits, and of even length.
///
/// Used at load time only; the query path never rejects input.
pub fn is_well_formed(code: &str) -> bool {
    !code.is_empty()
        && code.len() % SEGMENT_WIDTH == 0
        && code.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// TESTS
// ============================================================================
