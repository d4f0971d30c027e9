//! Identifier normalization
//!
//! Turns a mixed-case identifier into the lowercase, underscore separated form
//! most serialization tags use: `WalterWhite` becomes `walter_white`.

/// Un-camel-case an identifier.
///
/// Every maximal run of ASCII uppercase letters starts a new word, so an
/// underscore is inserted before the run unless it opens the string. Only
/// ASCII letters are case-folded; everything else is copied through.
///
/// ```
/// use tagcheck_engine::normalize;
///
/// assert_eq!(normalize("WalterWhite"), "walter_white");
/// assert_eq!(normalize("UserID"), "user_id");
/// ```
pub fn normalize(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut in_upper_run = false;

    for (pos, ch) in ident.char_indices() {
        if ch.is_ascii_uppercase() {
            if !in_upper_run && pos > 0 {
                out.push('_');
            }
            in_upper_run = true;
            out.push(ch.to_ascii_lowercase());
        } else {
            in_upper_run = false;
            out.push(ch);
        }
    }

    out
}
