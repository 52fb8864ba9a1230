use bloodbank_core::{BloodType, DraftField, Gender};

use crate::domain::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEdit {
    Text(DraftField, String),
    BloodType(BloodType),
    Gender(Gender),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriteriaEdit {
    State(String),
    City(String),
}

#[derive(Debug, Clone)]
pub enum AppCommand {
    // Boot
    LoadInitialState,
    Retry,

    // Navigation
    Navigate(View),

    // Registration
    EditDraft(DraftEdit),
    SubmitRegistration,

    // Donor list
    SetSearchTerm(String),

    // Finder
    EditCriteria(CriteriaEdit),
    SearchDonors,
    GenerateOutreachMessage,
    OutreachCopied,

    // Dashboard
    GenerateCampaignIdeas,

    DismissNotification,
}
