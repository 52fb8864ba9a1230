use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppState;

use super::{events::DomainEvent, reducer::reduce};

#[derive(Clone)]
pub struct AppStore {
    inner: Arc<Mutex<AppState>>,
}

impl AppStore {
    pub fn new(state: AppState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    // A panic inside `reduce` leaves the default state behind, so a poisoned
    // lock still guards a well-formed value.
    fn lock(&self) -> MutexGuard<'_, AppState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> AppState {
        self.lock().clone()
    }

    /// Reads without cloning the whole state.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.lock())
    }

    pub fn apply(&self, ev: DomainEvent) {
        let mut guard = self.lock();
        let next = reduce(std::mem::take(&mut *guard), ev);
        *guard = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_core::commands::DraftEdit;
    use bloodbank_core::{BloodType, DraftField, InventoryItem};

    #[test]
    fn apply_keeps_untouched_fields_across_events() {
        let store = AppStore::new(AppState::default());
        store.apply(DomainEvent::InventoryLoaded(vec![InventoryItem {
            blood_type: BloodType::ONegative,
            units: 4,
        }]));
        for c in ["F", "Fr", "Fre"] {
            store.apply(DomainEvent::DraftEdited(DraftEdit::Text(
                DraftField::City,
                c.to_string(),
            )));
        }
        store.apply(DomainEvent::SearchTermChanged("ann".into()));

        let s = store.state();
        assert_eq!(s.inventory.len(), 1);
        assert_eq!(s.draft.city, "Fre");
        assert_eq!(s.search_term, "ann");
        assert_eq!(store.read(|s| s.inventory[0].units), 4);
    }
}
