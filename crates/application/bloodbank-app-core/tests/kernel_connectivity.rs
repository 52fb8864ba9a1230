mod common;

use std::sync::atomic::Ordering;

use bloodbank_app_core::domain::{FinderPhase, CONNECTIVITY_FAULT_MESSAGE};
use bloodbank_app_core::{AppCommand, CriteriaEdit};
use bloodbank_core::{BloodType, InventoryItem};
use common::{donor, drain, kernel, settle, Calls, DummyBackend, Reply};

fn stocked() -> DummyBackend {
    DummyBackend {
        donors: vec![donor("Ann", BloodType::OPositive)],
        inventory: vec![InventoryItem {
            blood_type: BloodType::OPositive,
            units: 12,
        }],
        ..Default::default()
    }
}

#[tokio::test]
async fn initial_load_fetches_both_collections() {
    let backend = stocked();
    let calls = backend.calls.clone();
    let mut k = kernel(backend, Reply::Empty);

    k.dispatch(AppCommand::LoadInitialState);
    let s = settle(&mut k, |s| !s.donors.is_empty() && !s.inventory.is_empty()).await;
    assert_eq!(Calls::count(&calls.list_donors), 1);
    assert_eq!(Calls::count(&calls.list_inventory), 1);
    assert!(s.connectivity_fault.is_none());
}

#[tokio::test]
async fn donor_failure_raises_banner_and_retry_clears_it() {
    let backend = stocked();
    let donors_down = backend.donors_down.clone();
    let inventory_down = backend.inventory_down.clone();
    donors_down.store(true, Ordering::SeqCst);
    inventory_down.store(true, Ordering::SeqCst);
    let calls = backend.calls.clone();
    let mut k = kernel(backend, Reply::Empty);

    k.dispatch(AppCommand::LoadInitialState);
    let s = settle(&mut k, |s| s.connectivity_fault.is_some()).await;
    assert_eq!(s.connectivity_fault.as_deref(), Some(CONNECTIVITY_FAULT_MESSAGE));

    donors_down.store(false, Ordering::SeqCst);
    inventory_down.store(false, Ordering::SeqCst);
    k.dispatch(AppCommand::Retry);
    assert!(k.state().retrying);
    // Retry is disabled while one is running.
    k.dispatch(AppCommand::Retry);

    let s = settle(&mut k, |s| !s.retrying).await;
    assert!(s.connectivity_fault.is_none());
    assert_eq!(s.donors.len(), 1);
    assert_eq!(Calls::count(&calls.list_donors), 2);
    assert_eq!(Calls::count(&calls.list_inventory), 2);
}

#[tokio::test]
async fn inventory_failure_alone_is_only_logged() {
    let backend = stocked();
    backend.inventory_down.store(true, Ordering::SeqCst);
    let mut k = kernel(backend, Reply::Empty);

    k.dispatch(AppCommand::LoadInitialState);
    settle(&mut k, |s| !s.donors.is_empty()).await;
    let s = drain(&mut k).await;
    assert!(s.connectivity_fault.is_none());
    assert!(s.inventory.is_empty());
    assert!(s.notification.is_none());
}

#[tokio::test]
async fn retry_still_failing_keeps_banner() {
    let backend = stocked();
    backend.donors_down.store(true, Ordering::SeqCst);
    backend.inventory_down.store(true, Ordering::SeqCst);
    let calls = backend.calls.clone();
    let mut k = kernel(backend, Reply::Empty);

    k.dispatch(AppCommand::Retry);
    // RetryFinished is emitted after both fetches have reported.
    let s = settle(&mut k, |s| !s.retrying).await;
    assert_eq!(s.connectivity_fault.as_deref(), Some(CONNECTIVITY_FAULT_MESSAGE));
    assert!(s.inventory.is_empty());
    assert_eq!(Calls::count(&calls.list_donors), 1);
    assert_eq!(Calls::count(&calls.list_inventory), 1);
}

#[tokio::test]
async fn later_search_success_clears_banner() {
    let backend = DummyBackend {
        search_results: vec![donor("Ann", BloodType::OPositive)],
        ..stocked()
    };
    backend.donors_down.store(true, Ordering::SeqCst);
    backend.inventory_down.store(true, Ordering::SeqCst);
    let mut k = kernel(backend, Reply::Empty);

    k.dispatch(AppCommand::LoadInitialState);
    settle(&mut k, |s| s.connectivity_fault.is_some()).await;
    let s = drain(&mut k).await;
    assert!(s.connectivity_fault.is_some());

    k.dispatch(AppCommand::EditCriteria(CriteriaEdit::State("CA".into())));
    k.dispatch(AppCommand::EditCriteria(CriteriaEdit::City("Fresno".into())));
    k.dispatch(AppCommand::SearchDonors);
    let s = settle(&mut k, |s| s.finder.phase == FinderPhase::ResultsShown).await;
    assert!(s.connectivity_fault.is_none());
    assert_eq!(s.finder.results.len(), 1);
}
