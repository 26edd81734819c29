//! The catalog - ordered entry collection plus loan tracking.
//!
//! A `Catalog` is caller-owned and shareable across tasks: all methods
//! take `&self`, with entries behind a `tokio::sync::RwLock` and the
//! loan ledger behind a `tokio::sync::Mutex`. Borrowing suspends for a
//! configured latency before touching the ledger, standing in for a
//! backend round trip; the ledger claim itself is atomic, so two
//! in-flight borrows of the same entry cannot both succeed.

use std::collections::HashMap;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::entry::{BorrowerId, CatalogEntry, EntryId};
use crate::error::{CatalogError, Result};

mod config;
mod loans;

pub use config::CatalogConfig;
pub use loans::{Loan, LoanLedger, LoanStatus};


/// The owning collection of entries plus current loan state
pub struct Catalog {
    /// Human-readable catalog name (e.g. the branch name)
    name: String,
    /// Where this catalog lives
    location: String,
    config: CatalogConfig,
    /// Insertion-ordered entries; removal deletes by id match
    entries: RwLock<Vec<CatalogEntry>>,
    ledger: Mutex<LoanLedger>,
}

impl Catalog {
    /// Create an empty catalog with default configuration
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self::with_config(name, location, CatalogConfig::default())
    }

    /// Create an empty catalog with explicit configuration
    pub fn with_config(
        name: impl Into<String>,
        location: impl Into<String>,
        config: CatalogConfig,
    ) -> Self {
        let name = name.into();
        let location = location.into();
        info!("Opening catalog '{}' ({})", name, location);
        Self {
            name,
            location,
            config,
            entries: RwLock::new(Vec::new()),
            ledger: Mutex::new(LoanLedger::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Append an entry to the catalog.
    ///
    /// No duplicate-id check is performed; entries keep their insertion
    /// order. Returns the id of the added entry.
    pub async fn add_entry(&self, entry: CatalogEntry) -> EntryId {
        let id = entry.id;
        let title = entry.title.clone();
        let total = {
            let mut entries = self.entries.write().await;
            entries.push(entry);
            entries.len()
        };
        info!("Added '{}' to the catalog ({} total)", title, total);
        id
    }

    /// Remove the entry with the given id and return it.
    ///
    /// Removal is refused while the entry is out on loan
    /// (`StillBorrowed`); a missing id fails with `NotFound`.
    pub async fn remove_entry(&self, id: EntryId) -> Result<CatalogEntry> {
        // Lock order is ledger then entries, the same as borrow's
        // post-suspension section, so a racing borrow cannot claim the
        // entry between the holder check and the delete.
        let ledger = self.ledger.lock().await;
        if let Some(holder) = ledger.holder(&id) {
            return Err(CatalogError::StillBorrowed {
                id,
                borrower: holder.clone(),
            });
        }

        let mut entries = self.entries.write().await;
        let index = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(CatalogError::NotFound { id })?;
        let removed = entries.remove(index);
        info!("Removed '{}' from the catalog", removed.title);
        Ok(removed)
    }

    /// Find entries whose title or author contains `query`,
    /// case-insensitively.
    ///
    /// Genre is never searched. Results preserve addition order; no
    /// match yields an empty vector, not an error.
    pub async fn search(&self, query: &str) -> Vec<CatalogEntry> {
        let needle = query.to_lowercase();
        let results: Vec<CatalogEntry> = self
            .entries
            .read()
            .await
            .iter()
            .filter(|entry| {
                entry.title.to_lowercase().contains(&needle)
                    || entry.author.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        debug!("Search for '{}' matched {} entries", query, results.len());
        results
    }

    /// Borrow the entry with the given id for `borrower`.
    ///
    /// Suspends for the configured latency between the availability
    /// pre-check and the ledger claim, modelling the backend round trip.
    /// No state changes before the suspension completes, so a borrow
    /// future dropped mid-flight leaves the catalog untouched. The claim
    /// itself is an atomic check-and-insert: of any number of concurrent
    /// borrows for one id, exactly one succeeds and the rest fail with
    /// `AlreadyBorrowed`.
    pub async fn borrow(
        &self,
        id: EntryId,
        borrower: impl Into<BorrowerId>,
    ) -> Result<Loan> {
        let borrower = borrower.into();

        // Fast path: refuse before paying the round trip.
        {
            let ledger = self.ledger.lock().await;
            if let Some(holder) = ledger.holder(&id) {
                return Err(CatalogError::AlreadyBorrowed {
                    id,
                    borrower: holder.clone(),
                });
            }
        }

        tokio::time::sleep(self.config.borrow_latency).await;

        // Ledger first, then entries - the same order as remove_entry -
        // so the existence check and the claim observe one consistent
        // state and a racing removal cannot slip between them.
        let mut ledger = self.ledger.lock().await;
        let title = {
            let entries = self.entries.read().await;
            entries
                .iter()
                .find(|entry| entry.id == id)
                .map(|entry| entry.title.clone())
        }
        .ok_or(CatalogError::NotFound { id })?;

        let loan = ledger.try_claim(id, borrower)?;
        info!("'{}' borrowed '{}'", loan.borrower, title);
        Ok(loan)
    }

    /// Return the entry with the given id on behalf of `borrower`.
    ///
    /// Succeeds only when `borrower` matches the recorded holder;
    /// otherwise fails with `ReturnMismatch` and changes nothing. The
    /// entry becomes borrowable again immediately on success.
    pub async fn return_entry(
        &self,
        id: EntryId,
        borrower: impl Into<BorrowerId>,
    ) -> Result<()> {
        let borrower = borrower.into();
        match self.ledger.lock().await.release(id, &borrower) {
            Ok(_) => {
                info!("'{}' returned '{}'", borrower, id);
                Ok(())
            }
            Err(err) => {
                warn!("{}", err);
                Err(err)
            }
        }
    }

    /// Loan state of a single entry
    pub async fn status(&self, id: EntryId) -> LoanStatus {
        self.ledger.lock().await.status(&id)
    }

    /// Ordered snapshot of all entries
    pub async fn entries(&self) -> Vec<CatalogEntry> {
        self.entries.read().await.clone()
    }

    /// Snapshot of all open loans
    pub async fn loans(&self) -> HashMap<EntryId, Loan> {
        self.ledger.lock().await.active()
    }

    /// Number of entries in the catalog
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}
