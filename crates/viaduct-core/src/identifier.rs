//! Identifier management using string interning for efficient storage and comparison.
//!
//! This module provides the [`Id`] type used for every node and edge in a
//! diagram, together with generators for fresh, prefixed ids
//! (`stn_…`, `line_…`, `misc_node_…`).

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use rand::{RngExt, distr::Alphanumeric};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Number of random alphanumeric characters in a freshly generated id suffix.
const FRESH_SUFFIX_LEN: usize = 10;

/// Global string interner for identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning.
///
/// Ids are cheap to copy and compare. They identify nodes and edges for
/// their whole lifetime and must be unique across a diagram.
///
/// # Examples
///
/// ```
/// use viaduct_core::identifier::Id;
///
/// // Wrap a known identifier
/// let id = Id::new("stn_kKL2PjK2Nx");
///
/// // Mint fresh ones
/// let station = Id::fresh_station();
/// let line = Id::fresh_line();
/// assert_ne!(station, line);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from `&str`.
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Mints a fresh station id of the form `stn_` + 10 random alphanumerics.
    ///
    /// Collisions are possible in principle; callers inserting into a graph
    /// get a duplicate-id error rather than silent reuse.
    pub fn fresh_station() -> Self {
        Self::fresh("stn")
    }

    /// Mints a fresh line (edge) id of the form `line_` + 10 random alphanumerics.
    pub fn fresh_line() -> Self {
        Self::fresh("line")
    }

    /// Mints a fresh miscellaneous-node id of the form `misc_node_` + 10 random alphanumerics.
    pub fn fresh_misc_node() -> Self {
        Self::fresh("misc_node")
    }

    fn fresh(prefix: &str) -> Self {
        let suffix: String = rand::rng()
            .sample_iter(Alphanumeric)
            .take(FRESH_SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self::new(&format!("{prefix}_{suffix}"))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let str_value = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        write!(f, "{}", str_value)
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`.
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl Serialize for Id {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Id {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct IdVisitor;

        impl de::Visitor<'_> for IdVisitor {
            type Value = Id;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an identifier string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Id, E> {
                Ok(Id::new(value))
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let id1 = Id::new("stn_a");
        let id2 = Id::new("stn_a");
        let id3 = Id::new("stn_b");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
        assert_eq!(id1, "stn_a");
    }

    #[test]
    fn test_fresh_ids_are_prefixed() {
        let station = Id::fresh_station();
        let line = Id::fresh_line();
        let misc = Id::fresh_misc_node();

        assert!(station.to_string().starts_with("stn_"));
        assert!(line.to_string().starts_with("line_"));
        assert!(misc.to_string().starts_with("misc_node_"));
    }

    #[test]
    fn test_fresh_ids_have_fixed_suffix_length() {
        let id = Id::fresh_station().to_string();
        assert_eq!(id.len(), "stn_".len() + FRESH_SUFFIX_LEN);
    }

    #[test]
    fn test_fresh_ids_differ() {
        let a = Id::fresh_station();
        let b = Id::fresh_station();
        assert_ne!(a, b);
    }

    #[test]
    fn test_display_trait() {
        let id = Id::new("line_xyz");
        assert_eq!(format!("{}", id), "line_xyz");
    }

    #[test]
    fn test_serde_round_trip() {
        let id = Id::new("stn_round_trip");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"stn_round_trip\"");

        let back: Id = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_hash_and_eq() {
        use std::collections::HashMap;

        let id1 = Id::new("key1");
        let id2 = Id::new("key1");
        let id3 = Id::new("key2");

        let mut map = HashMap::new();
        map.insert(id1, "value1");
        map.insert(id3, "value2");

        assert_eq!(map.get(&id2), Some(&"value1"));
        assert_eq!(map.len(), 2);
    }
}
