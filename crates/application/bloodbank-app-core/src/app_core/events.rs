use bloodbank_core::{Donor, InventoryItem};

use super::commands::{CriteriaEdit, DraftEdit};
use crate::domain::{GeneratedText, Notification, View};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    // Backend data
    DonorsLoaded(Vec<Donor>),
    DonorsLoadFailed,
    InventoryLoaded(Vec<InventoryItem>),

    RetryStarted,
    RetryFinished,

    // Navigation
    ViewChanged(View),

    // Registration
    DraftEdited(DraftEdit),
    RegistrationStarted,
    RegistrationSucceeded,
    RegistrationFailed,

    // Donor list
    SearchTermChanged(String),

    // Finder
    CriteriaEdited(CriteriaEdit),
    SearchStarted,
    SearchCompleted(Vec<Donor>),
    SearchFailed,
    OutreachGenerationStarted,
    OutreachGenerated(GeneratedText),

    // Dashboard
    CampaignGenerationStarted,
    CampaignGenerated(GeneratedText),

    // User-visible notifications
    NotificationShown(Notification),
    NotificationCleared,
}
