//! Catalog entries and their identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque unique identifier for a catalog entry
///
/// Minted once at creation and immutable thereafter. Displays with the
/// `BOOK-` prefix used by backend systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Mint a fresh identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BOOK-{}", self.0)
    }
}

/// Identifier of the patron holding (or requesting) a loan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BorrowerId(String);

impl BorrowerId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BorrowerId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for BorrowerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for BorrowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single book record in the catalog
///
/// Immutable once created; the catalog never mutates an entry after
/// insertion. Descriptive fields are stored verbatim - empty strings
/// are accepted, no validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Unique identifier, assigned at creation
    pub id: EntryId,
    /// Book title
    pub title: String,
    /// Book author
    pub author: String,
    /// Genre label; descriptive only, never searched
    pub genre: String,
}

impl CatalogEntry {
    /// Create an entry with a freshly minted id
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self::with_id(EntryId::new(), title, author, genre)
    }

    /// Create an entry under a caller-supplied id
    pub fn with_id(
        id: EntryId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
        }
    }
}
