//! Pairwise consistency classification

use crate::anagram::is_anagram;
use crate::normalize::normalize;
use std::borrow::Cow;
use tagcheck_core::CheckConfig;

/// Relationship between two compared names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// Names are identical (after normalization)
    Match,

    /// Names differ
    Mismatch { left: String, right: String },

    /// Names use the same letters in a different order
    Anagram { left: String, right: String },
}

/// Classifies pairs of names according to the configured modes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsistencyTester {
    normalize: bool,
    detect_anagrams: bool,
}

impl ConsistencyTester {
    pub fn new(normalize: bool, detect_anagrams: bool) -> Self {
        Self {
            normalize,
            detect_anagrams,
        }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(config.normalize_before_compare, config.detect_anagrams)
    }

    /// Compare two names.
    ///
    /// Anagram is checked before plain inequality, so a transposed name is
    /// only ever reported as an anagram.
    pub fn compare(&self, a: &str, b: &str) -> Comparison {
        let (left, right): (Cow<'_, str>, Cow<'_, str>) = if self.normalize {
            (Cow::Owned(normalize(a)), Cow::Owned(normalize(b)))
        } else {
            (Cow::Borrowed(a), Cow::Borrowed(b))
        };

        if self.detect_anagrams && is_anagram(&left, &right) {
            return Comparison::Anagram {
                left: left.into_owned(),
                right: right.into_owned(),
            };
        }

        if left != right {
            return Comparison::Mismatch {
                left: left.into_owned(),
                right: right.into_owned(),
            };
        }

        Comparison::Match
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn all_modes() -> Vec<ConsistencyTester> {
        vec![
            ConsistencyTester::new(false, false),
            ConsistencyTester::new(false, true),
            ConsistencyTester::new(true, false),
            ConsistencyTester::new(true, true),
        ]
    }

    #[test]
    fn anagram_takes_precedence() {
        let tester = ConsistencyTester::new(false, true);
        assert_eq!(
            tester.compare("height", "hieght"),
            Comparison::Anagram {
                left: "height".to_string(),
                right: "hieght".to_string(),
            }
        );
    }

    #[test]
    fn anagram_disabled_is_mismatch() {
        let tester = ConsistencyTester::new(false, false);
        assert_eq!(
            tester.compare("height", "hieght"),
            Comparison::Mismatch {
                left: "height".to_string(),
                right: "hieght".to_string(),
            }
        );
    }

    #[test]
    fn substitution_is_mismatch_even_with_anagrams() {
        let tester = ConsistencyTester::new(false, true);
        assert!(matches!(tester.compare("name", "nome"), Comparison::Mismatch { .. }));
    }

    #[test]
    fn identical_names_match_in_every_mode() {
        for tester in all_modes() {
            assert_eq!(tester.compare("height", "height"), Comparison::Match, "{:?}", tester);
        }
    }

    #[test]
    fn normalization_applies_to_both_sides() {
        let tester = ConsistencyTester::new(true, false);
        assert_eq!(tester.compare("WalterWhite", "walter_white"), Comparison::Match);
        assert_eq!(tester.compare("UserID", "userId"), Comparison::Match);
        assert_eq!(
            tester.compare("UserName", "username"),
            Comparison::Mismatch {
                left: "user_name".to_string(),
                right: "username".to_string(),
            }
        );
    }

    #[test]
    fn without_normalization_case_matters() {
        let tester = ConsistencyTester::new(false, true);
        assert_eq!(
            tester.compare("Name", "name"),
            Comparison::Mismatch {
                left: "Name".to_string(),
                right: "name".to_string(),
            }
        );
    }

    #[test]
    fn built_from_config() {
        let config = CheckConfig::default().with_anagrams(true);
        let tester = ConsistencyTester::from_config(&config);
        assert_eq!(tester, ConsistencyTester::new(false, true));
    }
}
