//! Struct tag tokenizer
//!
//! Splits a decoded tag such as `json:"name,omitempty" bson:"name"` into
//! scheme/value entries. Malformed tags yield no entries at all instead of an
//! error: a tag the checker cannot read is simply not checked.

use tagcheck_core::TagEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between pairs
    Space,
    /// Inside the scheme name
    Key,
    /// After the colon, waiting for the opening quote
    Quote,
    /// Inside the quoted value
    Value,
    /// Right after a backslash inside the value
    Escape,
}

/// Split a struct tag into entries, stripping any `,modifier` suffix.
///
/// Entries with an empty name (`json:",omitempty"`, `json:""`) are dropped.
pub fn parse_tag(tag: &str) -> Vec<TagEntry> {
    match tokenize(tag) {
        Ok(entries) => entries,
        Err(reason) => {
            tracing::debug!(tag, reason, "ignoring malformed struct tag");
            Vec::new()
        }
    }
}

fn tokenize(tag: &str) -> Result<Vec<TagEntry>, &'static str> {
    let mut entries = Vec::new();
    let mut state = State::Space;
    let mut key = String::new();
    let mut value = String::new();

    for ch in tag.chars() {
        state = match (state, ch) {
            (State::Space, c) if c.is_whitespace() => State::Space,
            (State::Space, ':' | '"') => return Err("missing scheme name"),
            (State::Space, c) => {
                key.push(c);
                State::Key
            }

            (State::Key, ':') => State::Quote,
            (State::Key, '"') => return Err("missing colon"),
            (State::Key, c) if c.is_whitespace() => return Err("missing colon"),
            (State::Key, c) => {
                key.push(c);
                State::Key
            }

            (State::Quote, '"') => State::Value,
            (State::Quote, _) => return Err("value is not quoted"),

            (State::Value, '\\') => State::Escape,
            (State::Value, '"') => {
                let name = value.split(',').next().unwrap_or_default();
                if !name.is_empty() {
                    entries.push(TagEntry::new(key.as_str(), name, entries.len()));
                }
                key.clear();
                value.clear();
                State::Space
            }
            (State::Value, c) => {
                value.push(c);
                State::Value
            }

            (State::Escape, c) => {
                value.push(c);
                State::Value
            }
        };
    }

    match state {
        State::Space => Ok(entries),
        State::Key => Err("missing colon"),
        State::Quote => Err("value is not quoted"),
        State::Value | State::Escape => Err("unterminated value"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(tag: &str) -> Vec<(String, String, usize)> {
        parse_tag(tag)
            .into_iter()
            .map(|e| (e.scheme, e.value, e.index))
            .collect()
    }

    fn pair(scheme: &str, value: &str, index: usize) -> (String, String, usize) {
        (scheme.to_string(), value.to_string(), index)
    }

    #[test]
    fn space_separated_pairs() {
        assert_eq!(
            pairs(r#"json:"name" bson:"name""#),
            vec![pair("json", "name", 0), pair("bson", "name", 1)]
        );
    }

    #[test]
    fn adjacent_pairs_without_space() {
        assert_eq!(
            pairs(r#"json:"name"bson:"nome,omitempty""#),
            vec![pair("json", "name", 0), pair("bson", "nome", 1)]
        );
    }

    #[test]
    fn modifier_stripped_for_every_scheme() {
        assert_eq!(
            pairs(r#"json:"id,string" xml:"id,attr" db:"id""#),
            vec![pair("json", "id", 0), pair("xml", "id", 1), pair("db", "id", 2)]
        );
    }

    #[test]
    fn empty_names_are_dropped() {
        assert_eq!(
            pairs(r#"json:",omitempty" yaml:"" bson:"name""#),
            vec![pair("bson", "name", 0)]
        );
    }

    #[test]
    fn escaped_quote_in_value() {
        assert_eq!(pairs(r#"x:"a\"b""#), vec![pair("x", "a\"b", 0)]);
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!(pairs("  json:\"a\"\t "), vec![pair("json", "a", 0)]);
    }

    #[test]
    fn empty_tag() {
        assert!(parse_tag("").is_empty());
    }

    #[test]
    fn malformed_tags_yield_nothing() {
        for tag in [
            "not a tag",
            r#"json"name""#,
            r#"json: "name""#,
            r#":"name""#,
            r#"json:"unterminated"#,
            r#"json:"ok" bson"#,
            r#"json:"ok" bson:"x\"#,
        ] {
            assert!(parse_tag(tag).is_empty(), "{:?} produced entries", tag);
        }
    }
}
