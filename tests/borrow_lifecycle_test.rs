//! Borrow/return lifecycle against a live catalog

mod common;

use biblio::{BorrowerId, CatalogEntry, CatalogError, EntryId, LoanStatus};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn borrow_of_unknown_id_is_not_found() {
    let catalog = common::test_catalog();
    let ghost = EntryId::new();

    let err = catalog.borrow(ghost, "user1").await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound { id: ghost });
    assert!(catalog.loans().await.is_empty());
}

#[tokio::test]
async fn borrow_then_return_round_trip() {
    let catalog = common::test_catalog();
    let id = catalog
        .add_entry(CatalogEntry::new(
            "To Kill a Mockingbird",
            "Harper Lee",
            "Classic",
        ))
        .await;

    let loan = catalog.borrow(id, "user2").await.unwrap();
    assert_eq!(loan.borrower, BorrowerId::from("user2"));
    assert_eq!(
        catalog.status(id).await,
        LoanStatus::OnLoan(BorrowerId::from("user2"))
    );
    assert_eq!(catalog.loans().await.len(), 1);

    catalog.return_entry(id, "user2").await.unwrap();
    assert_eq!(catalog.status(id).await, LoanStatus::Available);
    assert!(catalog.loans().await.is_empty());
}

#[tokio::test]
async fn second_borrower_is_rejected_until_return() {
    let catalog = common::test_catalog();
    let id = catalog
        .add_entry(CatalogEntry::new(
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            "Classic",
        ))
        .await;

    catalog.borrow(id, "user1").await.unwrap();

    let err = catalog.borrow(id, "user2").await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::AlreadyBorrowed {
            id,
            borrower: BorrowerId::from("user1"),
        }
    );
    assert_eq!(catalog.loans().await.len(), 1);

    catalog.return_entry(id, "user1").await.unwrap();

    // Once returned, any borrower may take the entry
    let loan = catalog.borrow(id, "user2").await.unwrap();
    assert_eq!(loan.borrower, BorrowerId::from("user2"));
}

#[tokio::test]
async fn return_by_wrong_borrower_changes_nothing() {
    let catalog = common::test_catalog();
    let id = catalog
        .add_entry(CatalogEntry::new("1984", "George Orwell", "Dystopian"))
        .await;

    catalog.borrow(id, "user1").await.unwrap();

    let err = catalog.return_entry(id, "user3").await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::ReturnMismatch {
            id,
            borrower: BorrowerId::from("user3"),
        }
    );
    assert_eq!(
        catalog.status(id).await,
        LoanStatus::OnLoan(BorrowerId::from("user1"))
    );
}

#[tokio::test]
async fn return_of_entry_not_on_loan_is_a_mismatch() {
    let catalog = common::test_catalog();
    let id = catalog
        .add_entry(CatalogEntry::new("Dune", "Frank Herbert", "Sci-Fi"))
        .await;

    let err = catalog.return_entry(id, "user1").await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::ReturnMismatch {
            id,
            borrower: BorrowerId::from("user1"),
        }
    );
    assert!(catalog.loans().await.is_empty());
}

#[tokio::test]
async fn removal_is_refused_while_on_loan() {
    let catalog = common::test_catalog();
    let id = catalog
        .add_entry(CatalogEntry::new("Emma", "Jane Austen", "Classic"))
        .await;

    catalog.borrow(id, "user1").await.unwrap();

    let err = catalog.remove_entry(id).await.unwrap_err();
    assert_eq!(
        err,
        CatalogError::StillBorrowed {
            id,
            borrower: BorrowerId::from("user1"),
        }
    );
    assert_eq!(catalog.len().await, 1);

    catalog.return_entry(id, "user1").await.unwrap();

    let removed = catalog.remove_entry(id).await.unwrap();
    assert_eq!(removed.id, id);
    assert!(catalog.is_empty().await);

    // Second removal reports the miss instead of silently doing nothing
    let err = catalog.remove_entry(id).await.unwrap_err();
    assert_eq!(err, CatalogError::NotFound { id });
}

#[tokio::test]
async fn removal_deletes_only_the_matching_entry() {
    let catalog = common::test_catalog();
    let first = catalog
        .add_entry(CatalogEntry::new("Emma", "Jane Austen", "Classic"))
        .await;
    let second = catalog
        .add_entry(CatalogEntry::new("Persuasion", "Jane Austen", "Classic"))
        .await;

    catalog.remove_entry(first).await.unwrap();

    let remaining = catalog.entries().await;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, second);
}
