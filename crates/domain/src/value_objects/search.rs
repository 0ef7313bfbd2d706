//! Search token derivation.

/// Derives the search index tokens for an NPC name.
///
/// Lower-cases the name, collapses runs of non-alphanumeric characters
/// (including `_`) into separators, and returns the remaining tokens. Empty
/// tokens are never produced, so `"Goblin Chief!"` and `"goblin   chief"`
/// index identically.
///
/// Only a successful publish recomputes these; the stored value is otherwise
/// left untouched.
pub fn search_tokens(name: &str) -> Vec<String> {
    name.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
