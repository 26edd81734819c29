//! Biblio - an in-memory library catalog with loan tracking.
//!
//! The catalog owns an ordered collection of entries plus a loan ledger
//! recording which entries are out and to whom. Borrowing models a
//! latency-bearing backend call: the claim on the ledger happens after
//! the suspension point and is an atomic check-and-insert, so concurrent
//! borrows of the same entry resolve to exactly one winner.

pub mod catalog;
pub mod entry;
pub mod error;

pub use catalog::{Catalog, CatalogConfig, Loan, LoanLedger, LoanStatus};
pub use entry::{BorrowerId, CatalogEntry, EntryId};
pub use error::{CatalogError, Result};
