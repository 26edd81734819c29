//! Loan ledger - tracks which entries are out and to whom.
//!
//! The ledger is the single source of truth for loan state. Its
//! invariants: keys are unique, at most one borrower per entry, and an
//! id is present exactly while the entry is considered borrowed.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{BorrowerId, EntryId};
use crate::error::{CatalogError, Result};

/// An open loan: who holds the entry and since when
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    /// The patron currently holding the entry
    pub borrower: BorrowerId,
    /// When the loan was recorded
    pub borrowed_at: DateTime<Utc>,
}

/// Loan state of a single entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Entry is on the shelf and borrowable
    #[default]
    Available,
    /// Entry is out on loan to the named borrower
    OnLoan(BorrowerId),
}

/// In-memory map of open loans, keyed by entry id
#[derive(Debug, Default)]
pub struct LoanLedger {
    loans: HashMap<EntryId, Loan>,
}

impl LoanLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claim a loan for `borrower`.
    ///
    /// Check-and-insert in one step: if the id already has an open loan
    /// the claim fails with `AlreadyBorrowed` and the ledger is left
    /// unchanged. This is the linearization point for concurrent borrow
    /// attempts on the same id.
    pub fn try_claim(&mut self, id: EntryId, borrower: BorrowerId) -> Result<Loan> {
        match self.loans.entry(id) {
            Entry::Occupied(slot) => Err(CatalogError::AlreadyBorrowed {
                id,
                borrower: slot.get().borrower.clone(),
            }),
            Entry::Vacant(slot) => {
                let loan = Loan {
                    borrower,
                    borrowed_at: Utc::now(),
                };
                slot.insert(loan.clone());
                Ok(loan)
            }
        }
    }

    /// Close the loan on `id`, but only for the borrower who holds it.
    ///
    /// A mismatched borrower and a not-on-loan id both fail with
    /// `ReturnMismatch`; neither mutates the ledger.
    pub fn release(&mut self, id: EntryId, borrower: &BorrowerId) -> Result<Loan> {
        match self.loans.entry(id) {
            Entry::Occupied(slot) if slot.get().borrower == *borrower => Ok(slot.remove()),
            _ => Err(CatalogError::ReturnMismatch {
                id,
                borrower: borrower.clone(),
            }),
        }
    }

    /// Current holder of `id`, if it is out on loan
    pub fn holder(&self, id: &EntryId) -> Option<&BorrowerId> {
        self.loans.get(id).map(|loan| &loan.borrower)
    }

    /// Loan state of `id`
    pub fn status(&self, id: &EntryId) -> LoanStatus {
        match self.holder(id) {
            Some(borrower) => LoanStatus::OnLoan(borrower.clone()),
            None => LoanStatus::Available,
        }
    }

    /// Snapshot of all open loans
    pub fn active(&self) -> HashMap<EntryId, Loan> {
        self.loans.clone()
    }

    pub fn len(&self) -> usize {
        self.loans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loans.is_empty()
    }
}
