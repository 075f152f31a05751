//! The closed `TestEnum` fixture and its name lookup.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::LookupError;

/// Fixture enumeration with two constants, each carrying a `test_priv` flag.
///
/// Serializes to the JSON string of its declared name (`"TEST_1"`, `"TEST_2"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TestEnum {
    /// `TEST_1`, flagged `true`.
    #[serde(rename = "TEST_1")]
    Test1,
    /// `TEST_2`, flagged `false`.
    #[serde(rename = "TEST_2")]
    Test2,
}

impl TestEnum {
    /// Every variant in declaration order.
    pub const ALL: [TestEnum; 2] = [TestEnum::Test1, TestEnum::Test2];

    /// Looks up a variant by its declared name.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`LookupError::NotFound`] when no variant has this name.
    pub fn lookup(name: &str) -> Result<Self, LookupError> {
        Self::iter()
            .find(|variant| variant.name() == name)
            .ok_or_else(|| {
                debug!(name, "no TestEnum variant with this name");
                LookupError::NotFound {
                    name: name.to_string(),
                }
            })
    }

    /// The declared name of the variant.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TestEnum::Test1 => "TEST_1",
            TestEnum::Test2 => "TEST_2",
        }
    }

    /// The boolean attribute fixed for this variant.
    #[must_use]
    pub const fn test_priv(self) -> bool {
        match self {
            TestEnum::Test1 => true,
            TestEnum::Test2 => false,
        }
    }

    /// Iterates over every variant in declaration order.
    #[must_use = "iterators are lazy"]
    pub fn iter() -> impl Iterator<Item = TestEnum> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for TestEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TestEnum {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lookup_finds_every_variant_by_name() {
        for variant in TestEnum::iter() {
            assert_eq!(TestEnum::lookup(variant.name()).unwrap(), variant);
        }
    }

    #[test]
    fn attributes_are_fixed_per_variant() {
        assert!(TestEnum::lookup("TEST_1").unwrap().test_priv());
        assert!(!TestEnum::lookup("TEST_2").unwrap().test_priv());
    }

    #[test]
    fn unknown_name_is_not_found() {
        let err = TestEnum::lookup("UNKNOWN").unwrap_err();
        assert_eq!(
            err,
            LookupError::NotFound {
                name: "UNKNOWN".to_string()
            }
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(TestEnum::lookup("test_1").is_err());
        assert!(TestEnum::lookup(" TEST_1").is_err());
        assert!(TestEnum::lookup("").is_err());
    }

    #[test]
    fn enumerates_in_declaration_order() {
        let all: Vec<TestEnum> = TestEnum::iter().collect();
        assert_eq!(all, vec![TestEnum::Test1, TestEnum::Test2]);
    }

    #[test]
    fn display_and_from_str_use_declared_name() {
        assert_eq!(TestEnum::Test2.to_string(), "TEST_2");
        assert_eq!("TEST_1".parse::<TestEnum>().unwrap(), TestEnum::Test1);
    }

    #[test]
    fn serde_round_trips_as_name_string() {
        for variant in TestEnum::iter() {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.name()));
            let back: TestEnum = serde_json::from_str(&json).unwrap();
            assert_eq!(back, variant);
        }
    }

    #[test]
    fn serde_rejects_unrecognized_literal() {
        assert!(serde_json::from_str::<TestEnum>("\"TEST_3\"").is_err());
        assert!(serde_json::from_str::<TestEnum>("\"Test1\"").is_err());
    }

    #[test]
    fn variants_are_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestEnum>();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| TestEnum::lookup("TEST_1").map(TestEnum::test_priv))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Ok(true));
        }
    }
}
