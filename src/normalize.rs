//! Brand-name normalization shared by the CSV loader and the linker.

/// Canonical matching form of a brand name: trimmed, lowercased, with
/// internal whitespace runs collapsed to single spaces.
pub fn normalize_name(s: &str) -> String {
    s.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}
