use bloodbank_core::DonorDraft;

use super::commands::{CriteriaEdit, DraftEdit};
use super::events::DomainEvent;
use crate::domain::{AppState, FinderPhase, CONNECTIVITY_FAULT_MESSAGE};

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::DonorsLoaded(donors) => {
            state.donors = donors;
            state.connectivity_fault = None;
        }
        DomainEvent::DonorsLoadFailed => {
            state.connectivity_fault = Some(CONNECTIVITY_FAULT_MESSAGE.to_string());
        }
        // Only a donor-list failure raises the banner; any success clears it.
        DomainEvent::InventoryLoaded(items) => {
            state.inventory = items;
            state.connectivity_fault = None;
        }

        DomainEvent::RetryStarted => state.retrying = true,
        DomainEvent::RetryFinished => state.retrying = false,

        DomainEvent::ViewChanged(v) => state.view = v,

        DomainEvent::DraftEdited(edit) => apply_draft_edit(&mut state.draft, edit),
        DomainEvent::RegistrationStarted => state.registering = true,
        DomainEvent::RegistrationSucceeded => {
            state.registering = false;
            state.draft = DonorDraft::default();
            state.connectivity_fault = None;
        }
        // The draft is kept so the user can resubmit.
        DomainEvent::RegistrationFailed => state.registering = false,

        DomainEvent::SearchTermChanged(term) => state.search_term = term,

        DomainEvent::CriteriaEdited(edit) => match edit {
            CriteriaEdit::State(v) => state.finder.criteria.state = v,
            CriteriaEdit::City(v) => state.finder.criteria.city = v,
        },
        DomainEvent::SearchStarted => {
            let finder = &mut state.finder;
            finder.phase = FinderPhase::Searching;
            finder.searched = Some(finder.criteria.clone());
            finder.outreach = None;
        }
        DomainEvent::SearchCompleted(donors) => {
            state.finder.phase = FinderPhase::ResultsShown;
            state.finder.results = donors;
            state.connectivity_fault = None;
        }
        DomainEvent::SearchFailed => {
            state.finder.phase = FinderPhase::ResultsShown;
            state.finder.results.clear();
        }
        DomainEvent::OutreachGenerationStarted => state.finder.generating = true,
        DomainEvent::OutreachGenerated(text) => {
            state.finder.generating = false;
            state.finder.outreach = Some(text);
        }

        DomainEvent::CampaignGenerationStarted => state.campaign.generating = true,
        DomainEvent::CampaignGenerated(text) => {
            state.campaign.generating = false;
            state.campaign.ideas = Some(text);
        }

        DomainEvent::NotificationShown(n) => state.notification = Some(n),
        DomainEvent::NotificationCleared => state.notification = None,
    }
    state
}

fn apply_draft_edit(draft: &mut DonorDraft, edit: DraftEdit) {
    match edit {
        DraftEdit::Text(field, value) => *draft.field_mut(field) = value,
        DraftEdit::BloodType(bt) => draft.blood_type = bt,
        DraftEdit::Gender(g) => draft.gender = g,
    }
}
