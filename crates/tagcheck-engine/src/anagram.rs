//! Anagram detection
//!
//! Two names with exactly the same letters in a different order are almost
//! always a transposition typo (`hieght` for `height`).

/// Whether `a` and `b` are letter permutations of each other without being equal.
///
/// Both sides are ASCII case-folded first. Identical strings are a match, never
/// an anagram.
pub fn is_anagram(a: &str, b: &str) -> bool {
    let a = a.to_ascii_lowercase();
    let b = b.to_ascii_lowercase();

    if a.chars().count() != b.chars().count() || a == b {
        return false;
    }

    sorted_chars(&a) == sorted_chars(&b)
}

fn sorted_chars(s: &str) -> Vec<char> {
    let mut chars: Vec<char> = s.chars().collect();
    chars.sort_unstable();
    chars
}
