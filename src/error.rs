//! Catalog error types.
//!
//! Every fallible catalog operation returns one of these instead of
//! logging and continuing, so callers can react programmatically.

use thiserror::Error;

use crate::entry::{BorrowerId, EntryId};

/// Errors produced by catalog operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Borrow attempted on an entry that is already out on loan
    #[error("entry '{id}' is already borrowed by '{borrower}'")]
    AlreadyBorrowed { id: EntryId, borrower: BorrowerId },

    /// The entry id is not present in the catalog
    #[error("entry '{id}' not found in the catalog")]
    NotFound { id: EntryId },

    /// Return attempted by the wrong borrower, or for an entry not on
    /// loan at all (the two cases are not distinguished)
    #[error("entry '{id}' is not on loan to '{borrower}'")]
    ReturnMismatch { id: EntryId, borrower: BorrowerId },

    /// Removal attempted while the entry is still out on loan
    #[error("entry '{id}' is still borrowed by '{borrower}' and cannot be removed")]
    StillBorrowed { id: EntryId, borrower: BorrowerId },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
