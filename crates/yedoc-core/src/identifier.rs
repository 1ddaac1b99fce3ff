//! Identifier management using string interning for efficient storage and comparison
//!
//! This module provides the [`Id`] type used for document-unique node, edge
//! and template identifiers. Identifiers are emitted verbatim as XML `id`
//! attributes at build time, so the original string must always be
//! recoverable.

use std::{
    fmt,
    sync::{Mutex, OnceLock},
};

use string_interner::{DefaultStringInterner, DefaultSymbol};

/// Global string interner for efficient identifier storage.
///
/// # Thread Safety
///
/// This uses `Mutex` for thread-safe access to the string interner.
static INTERNER: OnceLock<Mutex<DefaultStringInterner>> = OnceLock::new();

fn interner() -> &'static Mutex<DefaultStringInterner> {
    INTERNER.get_or_init(|| Mutex::new(DefaultStringInterner::new()))
}

/// Efficient identifier type using string interning
///
/// This type provides efficient storage and comparison of entity identifiers
/// through string interning. Identifiers are opaque: a numeric id like `7`
/// and the string `"7"` denote the same identifier, which is how auto-issued
/// ids can never collide with manually assigned ones.
///
/// # Examples
///
/// ```
/// use yedoc_core::identifier::Id;
///
/// // Create identifiers from names
/// let node_id = Id::new("gateway");
/// let edge_id = Id::new("gateway_to_db");
///
/// // Auto-issued ids intern their decimal representation
/// let auto = Id::from_index(7);
/// assert_eq!(auto, "7");
/// assert_eq!(auto, Id::new("7"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id(DefaultSymbol);

impl Id {
    /// Creates an `Id` from &str.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::identifier::Id;
    ///
    /// let node_id = Id::new("user_service");
    /// ```
    pub fn new(name: &str) -> Self {
        let mut interner = interner().lock().expect("Failed to acquire interner lock");
        let symbol = interner.get_or_intern(name);
        Self(symbol)
    }

    /// Creates an `Id` from a counter value, interning its decimal
    /// representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::identifier::Id;
    ///
    /// let id = Id::from_index(42);
    /// assert_eq!(id.to_string(), "42");
    /// ```
    pub fn from_index(idx: u64) -> Self {
        let name = idx.to_string();
        Self::new(&name)
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

impl std::str::FromStr for Id {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Id {
    /// Creates an `Id` from a string slice
    ///
    /// This is a convenience implementation that calls `Id::new`.
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::identifier::Id;
    ///
    /// let id: Id = "example".into();
    /// assert_eq!(id, "example");
    /// ```
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<u64> for Id {
    /// Creates an `Id` from a counter value, see [`Id::from_index`].
    fn from(idx: u64) -> Self {
        Self::from_index(idx)
    }
}

impl PartialEq<str> for Id {
    /// Allows direct comparison with string slices: `id == "string"`
    ///
    /// # Examples
    ///
    /// ```
    /// use yedoc_core::identifier::Id;
    ///
    /// let id = Id::new("gateway");
    /// assert!(id == "gateway");
    /// ```
    fn eq(&self, other: &str) -> bool {
        let interner = interner().lock().expect("Failed to acquire interner lock");
        let self_str = interner
            .resolve(self.0)
            .expect("Symbol should exist in interner");
        self_str == other
    }
}

impl PartialEq<&str> for Id {
    /// Allows direct comparison with string references: `id == &string`
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
